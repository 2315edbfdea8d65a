//! Warehouse Model

use serde::{Deserialize, Serialize};

/// Warehouse (仓库): back-stock location, not customer-facing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub location: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseCreate {
    pub name: String,
    pub code: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseUpdate {
    pub name: Option<String>,
    pub code: Option<String>,
    pub location: Option<String>,
    pub is_active: Option<bool>,
}
