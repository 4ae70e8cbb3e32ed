//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers what can
//! go wrong while building the primitives in this crate.

use thiserror::Error;

use crate::Priority;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid priority range: min {min} is greater than max {max}")]
    InvalidRange { min: Priority, max: Priority },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bo-core`.
pub type CoreResult<T> = Result<T, CoreError>;
