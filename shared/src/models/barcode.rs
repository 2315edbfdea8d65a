//! Barcode Model

use serde::{Deserialize, Serialize};

/// A printable EAN-13 code bound to a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Barcode {
    pub id: i64,
    pub product_id: i64,
    pub code: String,
    pub created_at: i64,
}

/// Batch generation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeBatchCreate {
    pub product_id: i64,
    pub count: u32,
}
