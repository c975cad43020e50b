//! Shared newtypes and utilities used across all domain modules.
//!
//! The id newtypes are serialization-transparent: they serialize/deserialize
//! identically to the raw values the backend sends, so they can be used
//! directly in wire types.

pub mod fmt;
pub mod serde_util;
pub mod time;

pub use fmt::{display_won, format_thousands};
pub use time::{format_dot_date, parse_backend_timestamp, KST_OFFSET_SECS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── GroupBuyId ──────────────────────────────────────────────────────────────

/// Numeric group-buy identifier (`groupbuyId` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GroupBuyId(u64);

impl GroupBuyId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GroupBuyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GroupBuyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for GroupBuyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(GroupBuyId)
    }
}

impl Serialize for GroupBuyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for GroupBuyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Ok(GroupBuyId(id))
    }
}

// ─── CategoryId ──────────────────────────────────────────────────────────────

/// Product category identifier used by the ranking endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ─── OrderId ─────────────────────────────────────────────────────────────────

/// Order identifier. The backend issues UUID strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for OrderId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(OrderId(s))
    }
}

// ─── Utilities ───────────────────────────────────────────────────────────────

/// Composite line-item id: `{groupbuy_option_id}-{product_option_id}`.
///
/// The backend has no id for an order or refund line, so one is synthesized
/// from the two option ids it does carry.
pub fn line_item_id(groupbuy_option_id: u64, product_option_id: u64) -> String {
    format!("{}-{}", groupbuy_option_id, product_option_id)
}

/// `true` when an optional backend string is present and non-empty.
pub(crate) fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
