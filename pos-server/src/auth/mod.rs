//! 认证模块
//!
//! JWT + Argon2 authentication and the per-route guard chain.

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{AUTH_COOKIE, Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{
    ShowroomScope, common_auth, require_auth, require_super_admin, showroom_access,
};
pub use password::{hash_password, verify_password};
