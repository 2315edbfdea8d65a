//! Tax Repository

use super::{RepoError, RepoResult};
use shared::models::{Tax, TaxCreate, TaxUpdate};
use sqlx::SqlitePool;

const TAX_SELECT: &str = "SELECT id, name, rate, is_active, created_at, updated_at FROM tax";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Tax>> {
    let sql = format!("{TAX_SELECT} ORDER BY name");
    let rows = sqlx::query_as::<_, Tax>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Tax>> {
    let sql = format!("{TAX_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Tax>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: TaxCreate) -> RepoResult<Tax> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO tax (id, name, rate, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?4)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.rate)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create tax".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: TaxUpdate) -> RepoResult<Tax> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE tax SET name = COALESCE(?1, name), rate = COALESCE(?2, rate), is_active = COALESCE(?3, is_active), updated_at = ?4 WHERE id = ?5",
    )
    .bind(data.name)
    .bind(data.rate)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Tax {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Tax {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE tax SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
