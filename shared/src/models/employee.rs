//! Employee Model

use serde::{Deserialize, Serialize};

/// Showroom staff record (distinct from [`super::User`]: employees are
/// payroll entries, not login accounts).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub designation: String,
    pub salary: f64,
    pub showroom_id: Option<i64>,
    pub joined_at: Option<i64>,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub designation: String,
    pub salary: f64,
    pub showroom_id: Option<i64>,
    pub joined_at: Option<i64>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub salary: Option<f64>,
    pub showroom_id: Option<i64>,
    pub joined_at: Option<i64>,
    pub is_active: Option<bool>,
}
