//! Barcode Repository

use super::{RepoError, RepoResult};
use shared::models::Barcode;
use sqlx::SqlitePool;

const BARCODE_SELECT: &str = "SELECT id, product_id, code, created_at FROM barcode";

pub async fn find_by_product(pool: &SqlitePool, product_id: i64) -> RepoResult<Vec<Barcode>> {
    let sql = format!("{BARCODE_SELECT} WHERE product_id = ? ORDER BY created_at DESC");
    let rows = sqlx::query_as::<_, Barcode>(&sql)
        .bind(product_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_code(pool: &SqlitePool, code: &str) -> RepoResult<Option<Barcode>> {
    let sql = format!("{BARCODE_SELECT} WHERE code = ? LIMIT 1");
    let row = sqlx::query_as::<_, Barcode>(&sql)
        .bind(code)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert pre-generated codes for one product. Codes must already carry a
/// valid check digit; uniqueness is enforced by the table constraint.
pub async fn create_batch(
    pool: &SqlitePool,
    product_id: i64,
    codes: &[String],
) -> RepoResult<Vec<Barcode>> {
    let now = shared::util::now_millis();
    let mut tx = pool.begin().await?;
    for code in codes {
        let id = shared::util::snowflake_id();
        sqlx::query("INSERT INTO barcode (id, product_id, code, created_at) VALUES (?1, ?2, ?3, ?4)")
            .bind(id)
            .bind(product_id)
            .bind(code)
            .bind(now)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    find_by_product(pool, product_id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM barcode WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// The barcode table only ever grows through [`create_batch`]; reject
/// generation against products that don't exist.
pub async fn product_exists(pool: &SqlitePool, product_id: i64) -> RepoResult<bool> {
    let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM product WHERE id = ? AND is_active = 1")
        .bind(product_id)
        .fetch_optional(pool)
        .await?;
    if row.is_none() {
        return Err(RepoError::NotFound(format!("Product {product_id} not found")));
    }
    Ok(true)
}
