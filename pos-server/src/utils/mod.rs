//! 工具模块
//!
//! - [`error`] - unified error and response types
//! - [`logger`] - tracing subscriber setup
//! - [`result`] - result aliases
//! - [`validation`] - input length checks

pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::{AppError, AppResponse, ok, ok_with_message};
pub use result::AppResult;
