//! Warehouse Repository

use super::{RepoError, RepoResult};
use shared::models::{Warehouse, WarehouseCreate, WarehouseUpdate};
use sqlx::SqlitePool;

const WAREHOUSE_SELECT: &str =
    "SELECT id, name, code, location, is_active, created_at, updated_at FROM warehouse";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Warehouse>> {
    let sql = format!("{WAREHOUSE_SELECT} WHERE is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, Warehouse>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Warehouse>> {
    let sql = format!("{WAREHOUSE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Warehouse>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: WarehouseCreate) -> RepoResult<Warehouse> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO warehouse (id, name, code, location, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.code)
    .bind(data.location)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create warehouse".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: WarehouseUpdate) -> RepoResult<Warehouse> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE warehouse SET name = COALESCE(?1, name), code = COALESCE(?2, code), location = COALESCE(?3, location), is_active = COALESCE(?4, is_active), updated_at = ?5 WHERE id = ?6",
    )
    .bind(data.name)
    .bind(data.code)
    .bind(data.location)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Warehouse {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Warehouse {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE warehouse SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
