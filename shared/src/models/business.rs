//! Business Settings Model

use serde::{Deserialize, Serialize};

/// Singleton settings row describing the business itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub currency: String,
    pub tax_registration_no: Option<String>,
    pub default_tax_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub currency: Option<String>,
    pub tax_registration_no: Option<String>,
    pub default_tax_id: Option<i64>,
}
