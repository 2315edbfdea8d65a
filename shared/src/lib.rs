//! Shared types for the SparkX POS backend
//!
//! Entity models, create/update payloads and small utility helpers used by
//! both the server and any in-process test clients.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
