//! Showroom Model

use serde::{Deserialize, Serialize};

/// Showroom (门店): a physical sales location that scopes products,
/// invoices and expenses for non-super-admin users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Showroom {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub invoice_prefix: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowroomCreate {
    pub name: String,
    pub code: String,
    pub invoice_prefix: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowroomUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub invoice_prefix: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub is_active: Option<bool>,
}
