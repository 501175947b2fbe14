//! Service flags advertised by a peer

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;
use thiserror::Error;

use super::common::parse_u64_literal;

/// Bitset of optional services a peer supports.
///
/// Bits without a registered name are legal; they are carried and rendered
/// as-is so newer peers can advertise capabilities this crate does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ServiceFlag(pub u64);

impl ServiceFlag {
    /// The peer is a full node.
    pub const NODE_NETWORK: ServiceFlag = ServiceFlag(1 << 0);

    pub const fn empty() -> Self {
        ServiceFlag(0)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    pub const fn contains(self, other: ServiceFlag) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Registered flags in ascending bit order; rendering walks this slice.
const SERVICE_FLAG_NAMES: &[(ServiceFlag, &str)] = &[(ServiceFlag::NODE_NETWORK, "SFNodeNetwork")];

impl fmt::Display for ServiceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0x0");
        }

        let mut remaining = self.0;
        let mut parts: Vec<String> = Vec::new();
        for (flag, name) in SERVICE_FLAG_NAMES {
            if remaining & flag.0 == flag.0 {
                parts.push((*name).to_string());
                remaining &= !flag.0;
            }
        }

        // Unknown bits go out as a single hex literal.
        if remaining != 0 {
            parts.push(format!("{:#x}", remaining));
        }

        f.write_str(&parts.join("|"))
    }
}

impl From<u64> for ServiceFlag {
    fn from(bits: u64) -> Self {
        ServiceFlag(bits)
    }
}

impl From<ServiceFlag> for u64 {
    fn from(flag: ServiceFlag) -> Self {
        flag.0
    }
}

impl BitOr for ServiceFlag {
    type Output = ServiceFlag;

    fn bitor(self, rhs: ServiceFlag) -> ServiceFlag {
        ServiceFlag(self.0 | rhs.0)
    }
}

impl BitOrAssign for ServiceFlag {
    fn bitor_assign(&mut self, rhs: ServiceFlag) {
        self.0 |= rhs.0;
    }
}

/// Error parsing a service flag bitset from its numeric form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid service flags: {0:?}")]
pub struct ParseServiceFlagError(pub String);

impl FromStr for ServiceFlag {
    type Err = ParseServiceFlagError;

    /// Accepts a decimal or `0x`-prefixed hex bitset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_u64_literal(s)
            .map(ServiceFlag)
            .ok_or_else(|| ParseServiceFlagError(s.trim().to_string()))
    }
}

// Written as a hex string: formats such as TOML cap integers at i64, and
// every bit is a legal flag.
impl Serialize for ServiceFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:#x}", self.0))
    }
}

struct ServiceFlagVisitor;

impl<'de> Visitor<'de> for ServiceFlagVisitor {
    type Value = ServiceFlag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a service flag bitset as an integer or decimal / 0x-hex string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ServiceFlag, E> {
        Ok(ServiceFlag(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ServiceFlag, E> {
        u64::try_from(v)
            .map(ServiceFlag)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ServiceFlag, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ServiceFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ServiceFlagVisitor)
    }
}
