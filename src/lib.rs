//! timeuuid - Total-order comparison for time-based UUID storage keys
//!
//! Storage engines that key rows by time-based (version 1) UUIDs need a
//! comparator that orders keys by their embedded 60-bit timestamp first and
//! by the remaining identifier bits second, treating every byte as
//! unsigned. The raw byte layout stores the timestamp low-word first, so
//! plain lexicographic comparison gets chronology wrong; this crate
//! provides the corrected order as a [`TimeUuid`] key type with `Ord`, plus
//! slice-level entry points for callers holding raw key bytes.
//!
//! # Quick Start
//!
//! ```
//! use timeuuid::TimeUuid;
//!
//! let a: TimeUuid = "c232ab00-9414-11ec-b3c8-9f6bdeced846".parse().unwrap();
//! let b: TimeUuid = "c232ab01-9414-11ec-b3c8-9f6bdeced846".parse().unwrap();
//!
//! // One tick apart: a is earlier.
//! assert!(a < b);
//! assert!(a.timestamp_ticks() < b.timestamp_ticks());
//! ```
//!
//! # Architecture
//!
//! All semantics live in the `timeuuid-core` crate: the key type and layout
//! decoding in `types`, sort-key extraction and the three-way comparator in
//! `order`. This crate re-exports the public API.

// Re-export the public API from timeuuid-core
pub use timeuuid_core::*;
