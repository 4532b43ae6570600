//! Core type definitions for bibabbrev.
//!
//! This crate defines the small, domain-agnostic types shared by the model
//! and the journal abbreviation engine:
//! - Entry identifiers (UUID v7)
//! - Field identifiers, including the well-known journal fields
//!
//! Entry storage and edit bookkeeping live in `bibabbrev-model`.

mod field;
mod ids;

pub use field::Field;
pub use ids::EntryId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid field name: {0:?}")]
    InvalidField(String),
}
