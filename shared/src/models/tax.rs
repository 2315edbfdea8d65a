//! Tax Model

use serde::{Deserialize, Serialize};

/// Tax rate (percent, e.g. `7.5` for 7.5%)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Tax {
    pub id: i64,
    pub name: String,
    pub rate: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxCreate {
    pub name: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxUpdate {
    pub name: Option<String>,
    pub rate: Option<f64>,
    pub is_active: Option<bool>,
}
