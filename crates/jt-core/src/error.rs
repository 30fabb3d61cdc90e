//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `JtError` as one variant
//! via `#[from]`, so random-source and configuration failures propagate with
//! `?` unchanged.

use thiserror::Error;

/// The error type for `jt-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JtError {
    /// A probability or spread fraction outside `[0, 1]` (or NaN).
    #[error("invalid argument {name} = {value}: must be in the range 0.0 to 1.0")]
    InvalidArgument { name: &'static str, value: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `jt-core`.
pub type JtResult<T> = Result<T, JtError>;
