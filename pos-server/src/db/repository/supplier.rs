//! Supplier Repository

use super::{RepoError, RepoResult};
use shared::models::{Supplier, SupplierCreate, SupplierUpdate};
use sqlx::SqlitePool;

const SUPPLIER_SELECT: &str = "SELECT id, name, contact_person, phone, email, address, is_active, created_at, updated_at FROM supplier";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Supplier>> {
    let sql = format!("{SUPPLIER_SELECT} WHERE is_active = 1 ORDER BY name");
    let rows = sqlx::query_as::<_, Supplier>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Supplier>> {
    let sql = format!("{SUPPLIER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Supplier>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn search(pool: &SqlitePool, query: &str) -> RepoResult<Vec<Supplier>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "{SUPPLIER_SELECT} WHERE is_active = 1 AND (name LIKE ?1 OR contact_person LIKE ?1 OR phone LIKE ?1) ORDER BY name"
    );
    let rows = sqlx::query_as::<_, Supplier>(&sql)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: SupplierCreate) -> RepoResult<Supplier> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO supplier (id, name, contact_person, phone, email, address, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.contact_person)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create supplier".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SupplierUpdate) -> RepoResult<Supplier> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE supplier SET name = COALESCE(?1, name), contact_person = COALESCE(?2, contact_person), phone = COALESCE(?3, phone), email = COALESCE(?4, email), address = COALESCE(?5, address), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.contact_person)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Supplier {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE supplier SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
