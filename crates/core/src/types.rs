//! The timeuuid key type and its on-disk layout
//!
//! This module defines the foundational type:
//! - TimeUuid: an immutable 16-byte time-based (version 1) UUID key
//! - Field accessors for the RFC 4122 layout (network byte order)
//! - Conversions to/from `uuid::Uuid`, byte slices, and text
//!
//! ## Contract
//!
//! The 16-byte layout below is a storage-format compatibility constraint
//! shared with the key encoder and is FROZEN:
//!
//! | field               | bytes  |
//! |---------------------|--------|
//! | time_low            | 0..4   |
//! | time_mid            | 4..6   |
//! | time_hi_and_version | 6..8   |
//! | clock_seq           | 8..10  |
//! | node                | 10..16 |
//!
//! All multi-byte fields are stored big-endian.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length in bytes of a serialized timeuuid key
pub const TIMEUUID_LEN: usize = 16;

/// Offset of the Gregorian reform epoch (1582-10-15T00:00:00Z) from the
/// Unix epoch, in 100-nanosecond ticks
const GREGORIAN_UNIX_OFFSET_TICKS: i64 = 122_192_928_000_000_000;

/// Timestamp ticks per second (one tick is 100 nanoseconds)
const TICKS_PER_SECOND: i64 = 10_000_000;

/// A time-based (version 1) UUID key in its on-disk byte layout
///
/// The wrapped bytes are exactly what the storage layer persists, so a
/// `TimeUuid` can be built from and turned back into raw key bytes without
/// re-encoding. The value is immutable; comparison never mutates or retains
/// its inputs, and the type is `Copy + Send + Sync`.
///
/// # Ordering
///
/// Keys sort by the embedded 60-bit timestamp first and by the remaining
/// identifier bytes (clock_seq + node) second, with every byte interpreted
/// as unsigned. This is NOT the lexicographic order of the raw bytes: the
/// timestamp is stored low-word first, so deriving `Ord` would sort by
/// `time_low` and scramble chronology. See [`crate::order::compare`].
///
/// Equality, hashing, and ordering are all defined over the decoded sort
/// keys. The 4-bit version tag in byte 6 participates in none of them: two
/// keys that differ only in the version nibble occupy the same position in
/// the total order. Byte-exact identity is available via [`Self::as_bytes`].
#[derive(Debug, Clone, Copy)]
pub struct TimeUuid([u8; TIMEUUID_LEN]);

impl TimeUuid {
    /// The all-zero timeuuid
    pub const fn nil() -> Self {
        Self([0; TIMEUUID_LEN])
    }

    /// Create a timeuuid from its on-disk byte representation
    pub const fn from_bytes(bytes: [u8; TIMEUUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Create a timeuuid from a byte slice
    ///
    /// # Errors
    /// Returns [`Error::InvalidLength`] if the slice is not exactly 16
    /// bytes. Inputs are never truncated or padded.
    ///
    /// # Examples
    ///
    /// ```
    /// use timeuuid_core::types::TimeUuid;
    ///
    /// let key = TimeUuid::from_slice(&[0u8; 16]).unwrap();
    /// assert_eq!(key.as_bytes(), &[0u8; 16]);
    ///
    /// assert!(TimeUuid::from_slice(&[0u8; 15]).is_err());
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != TIMEUUID_LEN {
            return Err(Error::InvalidLength {
                actual: bytes.len(),
            });
        }
        let mut buf = [0u8; TIMEUUID_LEN];
        buf.copy_from_slice(bytes);
        Ok(Self(buf))
    }

    /// Get the raw bytes of this timeuuid
    pub const fn as_bytes(&self) -> &[u8; TIMEUUID_LEN] {
        &self.0
    }

    /// Consume the timeuuid, returning its raw bytes
    pub const fn into_bytes(self) -> [u8; TIMEUUID_LEN] {
        self.0
    }

    /// Low 32 bits of the timestamp (bytes 0..4, big-endian)
    pub fn time_low(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Middle 16 bits of the timestamp (bytes 4..6, big-endian)
    pub fn time_mid(&self) -> u16 {
        u16::from_be_bytes([self.0[4], self.0[5]])
    }

    /// High 12 bits of the timestamp plus the 4-bit version tag
    /// (bytes 6..8, big-endian; the version occupies the top nibble)
    pub fn time_hi_and_version(&self) -> u16 {
        u16::from_be_bytes([self.0[6], self.0[7]])
    }

    /// Clock sequence and variant bits (bytes 8..10, big-endian)
    pub fn clock_seq(&self) -> u16 {
        u16::from_be_bytes([self.0[8], self.0[9]])
    }

    /// Node identifier (bytes 10..16, big-endian, low 48 bits)
    pub fn node(&self) -> u64 {
        u64::from_be_bytes([
            0, 0, self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ])
    }

    /// The 4-bit UUID version tag (top nibble of byte 6)
    ///
    /// The version is part of the UUID's textual identity but never
    /// participates in timestamp reconstruction or ordering.
    pub fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// The reconstructed 60-bit timestamp, in 100-nanosecond ticks since
    /// the Gregorian reform epoch (1582-10-15T00:00:00Z)
    ///
    /// Reassembles `time_hi` (version nibble masked out), `time_mid`, and
    /// `time_low` in significance order.
    pub fn timestamp_ticks(&self) -> u64 {
        (u64::from(self.time_hi_and_version() & 0x0FFF) << 48)
            | (u64::from(self.time_mid()) << 32)
            | u64::from(self.time_low())
    }

    /// The embedded instant as seconds and subsecond nanoseconds relative
    /// to the Unix epoch
    ///
    /// Instants before 1970 yield negative seconds; nanoseconds are always
    /// in `0..1_000_000_000`.
    pub fn to_unix_timestamp(self) -> (i64, u32) {
        // 60-bit tick count always fits in i64.
        let ticks = self.timestamp_ticks() as i64 - GREGORIAN_UNIX_OFFSET_TICKS;
        let secs = ticks.div_euclid(TICKS_PER_SECOND);
        let nanos = ticks.rem_euclid(TICKS_PER_SECOND) as u32 * 100;
        (secs, nanos)
    }

    /// The embedded instant as a UTC datetime
    ///
    /// Returns `None` only if the instant falls outside chrono's
    /// representable range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = self.to_unix_timestamp();
        DateTime::from_timestamp(secs, nanos)
    }
}

impl Default for TimeUuid {
    fn default() -> Self {
        Self::nil()
    }
}

impl From<[u8; TIMEUUID_LEN]> for TimeUuid {
    fn from(bytes: [u8; TIMEUUID_LEN]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for TimeUuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl From<Uuid> for TimeUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.into_bytes())
    }
}

impl From<TimeUuid> for Uuid {
    fn from(uuid: TimeUuid) -> Self {
        Uuid::from_bytes(uuid.0)
    }
}

impl AsRef<[u8]> for TimeUuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for TimeUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_bytes(self.0))
    }
}

impl FromStr for TimeUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(Uuid::parse_str(s)?.into_bytes()))
    }
}

// Serde delegates to uuid::Uuid: hyphenated text in human-readable formats,
// raw bytes in binary formats.
impl Serialize for TimeUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Uuid::from_bytes(self.0).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(|uuid| Self(uuid.into_bytes()))
    }
}
