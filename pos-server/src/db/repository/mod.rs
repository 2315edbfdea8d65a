//! Repository Module
//!
//! Free-function CRUD repositories over the SQLite pool, one module per
//! entity. All queries use the runtime `query`/`query_as` API with `?n`
//! placeholders.

pub mod barcode;
pub mod brand;
pub mod business;
pub mod category;
pub mod customer;
pub mod employee;
pub mod expense;
pub mod invoice;
pub mod product;
pub mod product_group;
pub mod reports;
pub mod showroom;
pub mod supplier;
pub mod tax;
pub mod user;
pub mod warehouse;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Business rule violation: {0}")]
    Rule(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound("row not found".into()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepoError::Duplicate(db_err.message().to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepoError::Validation(format!("invalid reference: {}", db_err.message()))
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
