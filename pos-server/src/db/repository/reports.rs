//! Reporting queries
//!
//! Read-only aggregates over invoices, products and expenses. Voided
//! invoices are excluded from revenue but reported separately.

use super::RepoResult;
use serde::Serialize;
use sqlx::SqlitePool;

/// Sales summary over a time range
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SalesSummary {
    pub revenue: f64,
    pub invoice_count: i64,
    pub tax_total: f64,
    pub discount_total: f64,
    pub average_invoice_value: f64,
    pub voided_count: i64,
    pub voided_amount: f64,
}

/// Units and revenue for one product
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TopProduct {
    pub product_id: i64,
    pub product_name: String,
    pub units_sold: i64,
    pub revenue: f64,
}

/// Stock position and valuation for one location
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct InventoryValuation {
    pub location_type: String,
    pub location_name: String,
    pub product_count: i64,
    pub units_on_hand: i64,
    pub cost_value: f64,
    pub retail_value: f64,
}

/// Expense totals grouped by head
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ExpenseSummary {
    pub expense_head: String,
    pub entry_count: i64,
    pub total_amount: f64,
}

pub async fn sales_summary(
    pool: &SqlitePool,
    scope: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
) -> RepoResult<SalesSummary> {
    let row = sqlx::query_as::<_, SalesSummary>(
        "SELECT \
           COALESCE(SUM(CASE WHEN status = 'completed' THEN net_amount END), 0.0) AS revenue, \
           COALESCE(SUM(CASE WHEN status = 'completed' THEN 1 ELSE 0 END), 0) AS invoice_count, \
           COALESCE(SUM(CASE WHEN status = 'completed' THEN tax_amount END), 0.0) AS tax_total, \
           COALESCE(SUM(CASE WHEN status = 'completed' THEN discount_amount END), 0.0) AS discount_total, \
           COALESCE(AVG(CASE WHEN status = 'completed' THEN net_amount END), 0.0) AS average_invoice_value, \
           COALESCE(SUM(CASE WHEN status = 'voided' THEN 1 ELSE 0 END), 0) AS voided_count, \
           COALESCE(SUM(CASE WHEN status = 'voided' THEN net_amount END), 0.0) AS voided_amount \
         FROM invoice \
         WHERE (?1 IS NULL OR showroom_id = ?1) AND (?2 IS NULL OR created_at >= ?2) AND (?3 IS NULL OR created_at < ?3)",
    )
    .bind(scope)
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn top_products(
    pool: &SqlitePool,
    scope: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
    limit: i64,
) -> RepoResult<Vec<TopProduct>> {
    let rows = sqlx::query_as::<_, TopProduct>(
        "SELECT ii.product_id, ii.product_name, \
           CAST(SUM(ii.quantity) AS INTEGER) AS units_sold, \
           COALESCE(SUM(ii.line_total), 0.0) AS revenue \
         FROM invoice_item ii \
         JOIN invoice i ON ii.invoice_id = i.id \
         WHERE i.status = 'completed' \
           AND (?1 IS NULL OR i.showroom_id = ?1) \
           AND (?2 IS NULL OR i.created_at >= ?2) AND (?3 IS NULL OR i.created_at < ?3) \
         GROUP BY ii.product_id, ii.product_name \
         ORDER BY units_sold DESC \
         LIMIT ?4",
    )
    .bind(scope)
    .bind(start)
    .bind(end)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Valuation per showroom followed by per warehouse.
pub async fn inventory_valuation(pool: &SqlitePool) -> RepoResult<Vec<InventoryValuation>> {
    let rows = sqlx::query_as::<_, InventoryValuation>(
        "SELECT 'showroom' AS location_type, s.name AS location_name, \
           COUNT(p.id) AS product_count, \
           COALESCE(CAST(SUM(p.quantity) AS INTEGER), 0) AS units_on_hand, \
           COALESCE(SUM(p.quantity * p.cost_price), 0.0) AS cost_value, \
           COALESCE(SUM(p.quantity * p.selling_price), 0.0) AS retail_value \
         FROM showroom s \
         LEFT JOIN product p ON p.showroom_id = s.id AND p.is_active = 1 \
         WHERE s.is_active = 1 \
         GROUP BY s.id, s.name \
         UNION ALL \
         SELECT 'warehouse' AS location_type, w.name AS location_name, \
           COUNT(p.id) AS product_count, \
           COALESCE(CAST(SUM(p.quantity) AS INTEGER), 0) AS units_on_hand, \
           COALESCE(SUM(p.quantity * p.cost_price), 0.0) AS cost_value, \
           COALESCE(SUM(p.quantity * p.selling_price), 0.0) AS retail_value \
         FROM warehouse w \
         LEFT JOIN product p ON p.warehouse_id = w.id AND p.is_active = 1 \
         WHERE w.is_active = 1 \
         GROUP BY w.id, w.name \
         ORDER BY location_type, location_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn expense_summary(
    pool: &SqlitePool,
    scope: Option<i64>,
    start: Option<i64>,
    end: Option<i64>,
) -> RepoResult<Vec<ExpenseSummary>> {
    let rows = sqlx::query_as::<_, ExpenseSummary>(
        "SELECT expense_head, COUNT(*) AS entry_count, COALESCE(SUM(amount), 0.0) AS total_amount \
         FROM expense \
         WHERE (?1 IS NULL OR showroom_id = ?1) AND (?2 IS NULL OR incurred_on >= ?2) AND (?3 IS NULL OR incurred_on < ?3) \
         GROUP BY expense_head \
         ORDER BY total_amount DESC",
    )
    .bind(scope)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
