//! Expense Model

use serde::{Deserialize, Serialize};

/// Operating expense booked against a showroom.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub amount: f64,
    pub expense_head: String,
    pub showroom_id: Option<i64>,
    pub incurred_on: i64,
    pub notes: Option<String>,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub title: String,
    pub amount: f64,
    pub expense_head: String,
    pub showroom_id: Option<i64>,
    pub incurred_on: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseUpdate {
    pub title: Option<String>,
    pub amount: Option<f64>,
    pub expense_head: Option<String>,
    pub incurred_on: Option<i64>,
    pub notes: Option<String>,
}
