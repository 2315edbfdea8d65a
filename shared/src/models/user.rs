//! User (account) model

use serde::{Deserialize, Serialize};

/// Role names stored on the `user` row and inside JWT claims.
pub mod roles {
    /// Unrestricted access, including tax and business settings.
    pub const SUPER_ADMIN: &str = "super_admin";
    /// Full access within the assigned showroom.
    pub const MANAGER: &str = "manager";
    /// Day-to-day sales operations within the assigned showroom.
    pub const STAFF: &str = "staff";
}

/// Application account (操作员账号)
///
/// `password_hash` never leaves the server: it is skipped on serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub showroom_id: Option<i64>,
    pub is_approved: bool,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Update payload (role changes, approval and showroom assignment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub showroom_id: Option<i64>,
    pub is_approved: Option<bool>,
    pub is_active: Option<bool>,
}
