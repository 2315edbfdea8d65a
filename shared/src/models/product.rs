//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
///
/// `quantity` is the on-hand stock at the product's current location
/// (`showroom_id` or `warehouse_id`). Invoice creation decrements it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub item_code: String,
    pub product_group_id: Option<i64>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: i64,
    pub showroom_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Product with resolved lookup names (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ProductWithRefs {
    pub id: i64,
    pub name: String,
    pub item_code: String,
    pub product_group_id: Option<i64>,
    pub product_group_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub brand_id: Option<i64>,
    pub brand_name: Option<String>,
    pub supplier_id: Option<i64>,
    pub supplier_name: Option<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: i64,
    pub showroom_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub item_code: String,
    pub product_group_id: Option<i64>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: i64,
    pub showroom_id: Option<i64>,
    pub warehouse_id: Option<i64>,
    pub description: Option<String>,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub item_code: Option<String>,
    pub product_group_id: Option<i64>,
    pub category_id: Option<i64>,
    pub brand_id: Option<i64>,
    pub supplier_id: Option<i64>,
    pub cost_price: Option<f64>,
    pub selling_price: Option<f64>,
    pub quantity: Option<i64>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Stock transfer payload (move a product between locations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTransfer {
    pub showroom_id: Option<i64>,
    pub warehouse_id: Option<i64>,
}
