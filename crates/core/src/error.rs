//! Error types for timeuuid key handling
//!
//! The comparator itself is pure arithmetic and cannot fail; errors only
//! arise at the boundary, when building a [`crate::types::TimeUuid`] from
//! untyped input (byte slices, text). We use `thiserror` for automatic
//! `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for timeuuid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when decoding timeuuid keys from untyped input
#[derive(Debug, Error)]
pub enum Error {
    /// Input slice is not exactly 16 bytes
    #[error("Invalid timeuuid length: {actual} bytes (expected 16)")]
    InvalidLength {
        /// Actual input length in bytes
        actual: usize,
    },

    /// Textual form could not be parsed as a UUID
    #[error("Invalid timeuuid text: {0}")]
    Parse(#[from] uuid::Error),
}
