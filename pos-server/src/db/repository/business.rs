//! Business Settings Repository
//!
//! The `business` table is a singleton; `get` returns the one row and
//! `upsert`/`update` maintain it.

use super::{RepoError, RepoResult};
use shared::models::{Business, BusinessUpdate};
use sqlx::SqlitePool;

const BUSINESS_SELECT: &str = "SELECT id, name, address, phone, currency, tax_registration_no, default_tax_id, created_at, updated_at FROM business";

pub async fn get(pool: &SqlitePool) -> RepoResult<Option<Business>> {
    let sql = format!("{BUSINESS_SELECT} LIMIT 1");
    let row = sqlx::query_as::<_, Business>(&sql)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create the settings row if it does not exist yet. Used by seeding.
pub async fn create_if_missing(
    pool: &SqlitePool,
    name: &str,
    currency: &str,
) -> RepoResult<Business> {
    if let Some(existing) = get(pool).await? {
        return Ok(existing);
    }
    let now = shared::util::now_millis();
    let id = shared::util::snowflake_id();
    sqlx::query(
        "INSERT INTO business (id, name, currency, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(id)
    .bind(name)
    .bind(currency)
    .bind(now)
    .execute(pool)
    .await?;
    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create business settings".into()))
}

pub async fn update(pool: &SqlitePool, data: BusinessUpdate) -> RepoResult<Business> {
    let existing = get(pool)
        .await?
        .ok_or_else(|| RepoError::NotFound("Business settings not initialized".into()))?;
    let now = shared::util::now_millis();
    sqlx::query(
        "UPDATE business SET name = COALESCE(?1, name), address = COALESCE(?2, address), phone = COALESCE(?3, phone), currency = COALESCE(?4, currency), tax_registration_no = COALESCE(?5, tax_registration_no), default_tax_id = COALESCE(?6, default_tax_id), updated_at = ?7 WHERE id = ?8",
    )
    .bind(data.name)
    .bind(data.address)
    .bind(data.phone)
    .bind(data.currency)
    .bind(data.tax_registration_no)
    .bind(data.default_tax_id)
    .bind(now)
    .bind(existing.id)
    .execute(pool)
    .await?;
    get(pool)
        .await?
        .ok_or_else(|| RepoError::Database("Business settings vanished during update".into()))
}
