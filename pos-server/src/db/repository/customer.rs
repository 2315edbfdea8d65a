//! Customer Repository

use super::{RepoError, RepoResult};
use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use sqlx::SqlitePool;

const CUSTOMER_SELECT: &str = "SELECT id, name, phone, email, address, showroom_id, total_spent, purchase_count, is_active, created_at, updated_at FROM customer";

/// `scope = None` lists every showroom (super admin); otherwise only the
/// caller's showroom.
pub async fn find_all(pool: &SqlitePool, scope: Option<i64>) -> RepoResult<Vec<Customer>> {
    let sql = format!(
        "{CUSTOMER_SELECT} WHERE is_active = 1 AND (?1 IS NULL OR showroom_id = ?1) ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Customer>(&sql)
        .bind(scope)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn search(pool: &SqlitePool, query: &str, scope: Option<i64>) -> RepoResult<Vec<Customer>> {
    let pattern = format!("%{query}%");
    let sql = format!(
        "{CUSTOMER_SELECT} WHERE is_active = 1 AND (?1 IS NULL OR showroom_id = ?1) AND (phone LIKE ?2 OR name LIKE ?2 OR email LIKE ?2) ORDER BY created_at DESC"
    );
    let rows = sqlx::query_as::<_, Customer>(&sql)
        .bind(scope)
        .bind(&pattern)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn create(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO customer (id, name, phone, email, address, showroom_id, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(data.name)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(data.showroom_id)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: CustomerUpdate) -> RepoResult<Customer> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE customer SET name = COALESCE(?1, name), phone = COALESCE(?2, phone), email = COALESCE(?3, email), address = COALESCE(?4, address), showroom_id = COALESCE(?5, showroom_id), is_active = COALESCE(?6, is_active), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.phone)
    .bind(data.email)
    .bind(data.address)
    .bind(data.showroom_id)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE customer SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}
