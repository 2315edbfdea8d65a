//! User (account) Repository

use super::{RepoError, RepoResult};
use shared::models::{User, UserUpdate};
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, name, email, password_hash, role, showroom_id, is_approved, is_active, created_at, updated_at FROM user";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let sql = format!("{USER_SELECT} ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, User>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Insert a new account. Role and approval are decided by the caller
/// (first account becomes an approved super admin).
pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
    role: &str,
    is_approved: bool,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO user (id, name, email, password_hash, role, is_approved, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(is_approved)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}

/// Partial update. `password_hash` must already be hashed by the caller.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: UserUpdate,
    password_hash: Option<String>,
) -> RepoResult<User> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE user SET name = COALESCE(?1, name), email = COALESCE(?2, email), password_hash = COALESCE(?3, password_hash), role = COALESCE(?4, role), showroom_id = COALESCE(?5, showroom_id), is_approved = COALESCE(?6, is_approved), is_active = COALESCE(?7, is_active), updated_at = ?8 WHERE id = ?9",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(password_hash)
    .bind(data.role)
    .bind(data.showroom_id)
    .bind(data.is_approved)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE user SET is_active = 0, updated_at = ? WHERE id = ? AND is_active = 1")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
