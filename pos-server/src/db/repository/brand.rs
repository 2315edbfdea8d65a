//! Brand Repository

use super::{RepoError, RepoResult};
use shared::models::{Brand, BrandCreate, BrandUpdate};
use sqlx::SqlitePool;

const BRAND_SELECT: &str = "SELECT id, name, created_at, updated_at FROM brand";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Brand>> {
    let sql = format!("{BRAND_SELECT} ORDER BY name");
    let rows = sqlx::query_as::<_, Brand>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Brand>> {
    let sql = format!("{BRAND_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Brand>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: BrandCreate) -> RepoResult<Brand> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query("INSERT INTO brand (id, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)")
        .bind(id)
        .bind(data.name)
        .bind(now)
        .execute(pool)
        .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create brand".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BrandUpdate) -> RepoResult<Brand> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE brand SET name = COALESCE(?1, name), updated_at = ?2 WHERE id = ?3")
        .bind(data.name)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Brand {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Brand {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM brand WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
