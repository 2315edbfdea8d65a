//! Invoice Models

use serde::{Deserialize, Serialize};

/// Invoice header
///
/// `status` is either `"completed"` or `"voided"`. Amounts are computed
/// server-side at creation and never updated afterwards; voiding restores
/// stock but keeps the row for the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i64,
    pub invoice_no: String,
    pub showroom_id: i64,
    pub customer_id: Option<i64>,
    pub created_by: i64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub net_amount: f64,
    pub paid_amount: f64,
    pub change_amount: f64,
    pub payment_method: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Invoice line item
///
/// `product_name` and `unit_price` are snapshots taken at sale time so the
/// invoice stays stable when the catalog changes later.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    pub id: i64,
    pub invoice_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
    pub tax_rate: f64,
    pub line_total: f64,
}

/// One line of a sale request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLineCreate {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub discount: f64,
}

/// Sale request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCreate {
    pub customer_id: Option<i64>,
    pub tax_id: Option<i64>,
    pub payment_method: String,
    pub paid_amount: f64,
    pub items: Vec<InvoiceLineCreate>,
}

/// Invoice with its line items (detail view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceWithItems {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}
