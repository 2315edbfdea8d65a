//! Showroom Repository

use super::{RepoError, RepoResult};
use shared::models::{Showroom, ShowroomCreate, ShowroomUpdate};
use sqlx::SqlitePool;

const SHOWROOM_SELECT: &str = "SELECT id, name, code, invoice_prefix, address, phone, is_active, created_at, updated_at FROM showroom";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Showroom>> {
    let sql = format!("{SHOWROOM_SELECT} WHERE is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, Showroom>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Showroom>> {
    let sql = format!("{SHOWROOM_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Showroom>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Showroom>> {
    let sql = format!("{SHOWROOM_SELECT} WHERE code = ? LIMIT 1");
    let row = sqlx::query_as::<_, Showroom>(&sql)
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ShowroomCreate) -> RepoResult<Showroom> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO showroom (id, name, code, invoice_prefix, address, phone, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.code)
    .bind(data.invoice_prefix)
    .bind(data.address)
    .bind(data.phone)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create showroom".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ShowroomUpdate) -> RepoResult<Showroom> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE showroom SET name = COALESCE(?1, name), code = COALESCE(?2, code), invoice_prefix = COALESCE(?3, invoice_prefix), address = COALESCE(?4, address), phone = COALESCE(?5, phone), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.code)
    .bind(data.invoice_prefix)
    .bind(data.address)
    .bind(data.phone)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Showroom {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Showroom {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE showroom SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
