//! Product Group Repository

use super::{RepoError, RepoResult};
use shared::models::{ProductGroup, ProductGroupCreate, ProductGroupUpdate};
use sqlx::SqlitePool;

const GROUP_SELECT: &str =
    "SELECT id, name, description, created_at, updated_at FROM product_group";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ProductGroup>> {
    let sql = format!("{GROUP_SELECT} ORDER BY name");
    let rows = sqlx::query_as::<_, ProductGroup>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ProductGroup>> {
    let sql = format!("{GROUP_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, ProductGroup>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ProductGroupCreate) -> RepoResult<ProductGroup> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO product_group (id, name, description, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.description)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create product group".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ProductGroupUpdate) -> RepoResult<ProductGroup> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE product_group SET name = COALESCE(?1, name), description = COALESCE(?2, description), updated_at = ?3 WHERE id = ?4",
    )
    .bind(data.name)
    .bind(data.description)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Product group {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Product group {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM product_group WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
