//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! malformed block hashes, invalid surface dimensions, out-of-range style
//! modifiers, and unparsable color strings. Every error is local to a single
//! render invocation; there is no shared state to corrupt.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid block hash: {0}")]
    InvalidHashFormat(String),

    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid modifier {name}={value}")]
    InvalidModifier { name: &'static str, value: f64 },

    #[error("invalid color string '{0}'")]
    InvalidColor(String),
}
