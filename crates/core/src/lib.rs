//! Core types for timeuuid key ordering
//!
//! This crate defines the timeuuid key type and its total order:
//! - TimeUuid: a 16-byte time-based (version 1) UUID key in its on-disk layout
//! - compare / compare_slices: timestamp-major three-way comparison
//! - Error: error type hierarchy
//!
//! The comparator sits on a storage-engine hot path (lookups, merges,
//! compaction, range scans), so everything here is pure, allocation-free,
//! and stateless.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod order;
pub mod types;

// Re-export commonly used types and functions
pub use error::{Error, Result};
pub use order::{compare, compare_slices};
pub use types::{TimeUuid, TIMEUUID_LEN};
