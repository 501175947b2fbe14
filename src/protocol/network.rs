//! Network identifiers (magic numbers)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::common::parse_u64_literal;

/// Identifies which logical network a message stream belongs to.
///
/// Any 32-bit value is representable; values outside the registered set are
/// kept and rendered as unknown rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyNet(pub u32);

impl CurrencyNet {
    /// Main production network.
    pub const MAIN_NET: CurrencyNet = CurrencyNet(0xd9b4_00f9);
    /// Public test network.
    pub const TEST_NET: CurrencyNet = CurrencyNet(0x0709_000b);
    /// Regression test network.
    pub const REG_TEST: CurrencyNet = CurrencyNet(0xdab5_00fa);
    /// Simulation test network.
    pub const SIM_NET: CurrencyNet = CurrencyNet(0x1214_1c16);

    /// Registered name, if the value is one of the known networks.
    pub fn name(self) -> Option<&'static str> {
        NETWORK_NAMES
            .iter()
            .find(|(net, _)| *net == self)
            .map(|(_, name)| *name)
    }

    pub fn is_known(self) -> bool {
        self.name().is_some()
    }

    /// Magic value as it appears at the start of a frame.
    pub fn magic_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

const NETWORK_NAMES: &[(CurrencyNet, &str)] = &[
    (CurrencyNet::MAIN_NET, "MainNet"),
    (CurrencyNet::TEST_NET, "TestNet"),
    (CurrencyNet::REG_TEST, "RegNet"),
    (CurrencyNet::SIM_NET, "SimNet"),
];

impl fmt::Display for CurrencyNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Unknown CurrencyNet ({})", self.0),
        }
    }
}

impl Default for CurrencyNet {
    fn default() -> Self {
        CurrencyNet::MAIN_NET
    }
}

impl From<u32> for CurrencyNet {
    fn from(value: u32) -> Self {
        CurrencyNet(value)
    }
}

impl From<CurrencyNet> for u32 {
    fn from(net: CurrencyNet) -> Self {
        net.0
    }
}

/// Error parsing a network from its name or numeric form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid network: {0:?}")]
pub struct ParseNetError(pub String);

impl FromStr for CurrencyNet {
    type Err = ParseNetError;

    /// Accepts a registered name (case-insensitive, `regtest` included) or a
    /// decimal / `0x`-prefixed hex magic value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        match lower.as_str() {
            "mainnet" => return Ok(CurrencyNet::MAIN_NET),
            "testnet" => return Ok(CurrencyNet::TEST_NET),
            "regnet" | "regtest" => return Ok(CurrencyNet::REG_TEST),
            "simnet" => return Ok(CurrencyNet::SIM_NET),
            _ => {}
        }

        parse_u64_literal(trimmed)
            .and_then(|value| u32::try_from(value).ok())
            .map(CurrencyNet)
            .ok_or_else(|| ParseNetError(trimmed.to_string()))
    }
}

impl Serialize for CurrencyNet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_str(&format!("{:#010x}", self.0)),
        }
    }
}

impl<'de> Deserialize<'de> for CurrencyNet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_net_strings() {
        let tests = [
            (CurrencyNet::MAIN_NET, "MainNet"),
            (CurrencyNet::TEST_NET, "TestNet"),
            (CurrencyNet::REG_TEST, "RegNet"),
            (CurrencyNet::SIM_NET, "SimNet"),
            (CurrencyNet(0xffff_ffff), "Unknown CurrencyNet (4294967295)"),
            (CurrencyNet(0), "Unknown CurrencyNet (0)"),
        ];

        for (i, (net, want)) in tests.iter().enumerate() {
            assert_eq!(net.to_string(), *want, "case #{}", i);
        }
    }

    #[test]
    fn test_magic_values_are_fixed() {
        assert_eq!(CurrencyNet::MAIN_NET.0, 0xd9b400f9);
        assert_eq!(CurrencyNet::TEST_NET.0, 0x0709000b);
        assert_eq!(CurrencyNet::REG_TEST.0, 0xdab500fa);
        assert_eq!(CurrencyNet::SIM_NET.0, 0x12141c16);
        assert_eq!(CurrencyNet::MAIN_NET.magic_bytes(), [0xf9, 0x00, 0xb4, 0xd9]);
    }

    #[test]
    fn test_unknown_net_is_not_rejected() {
        let net = CurrencyNet::from(0x1234_5678);
        assert!(!net.is_known());
        assert_eq!(net.to_string(), "Unknown CurrencyNet (305419896)");
        assert_eq!(net.to_string(), net.to_string());
    }

    #[test]
    fn test_parse_currency_net() {
        assert_eq!("MainNet".parse(), Ok(CurrencyNet::MAIN_NET));
        assert_eq!("testnet".parse(), Ok(CurrencyNet::TEST_NET));
        assert_eq!("regtest".parse(), Ok(CurrencyNet::REG_TEST));
        assert_eq!("RegNet".parse(), Ok(CurrencyNet::REG_TEST));
        assert_eq!(" simnet ".parse(), Ok(CurrencyNet::SIM_NET));
        assert_eq!("0x12141c16".parse(), Ok(CurrencyNet::SIM_NET));
        assert_eq!("42".parse(), Ok(CurrencyNet(42)));
        assert!("nope".parse::<CurrencyNet>().is_err());
        assert!("+5".parse::<CurrencyNet>().is_err());
        assert!("-1".parse::<CurrencyNet>().is_err());
        assert!("0x100000000".parse::<CurrencyNet>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&CurrencyNet::SIM_NET).unwrap();
        assert_eq!(json, "\"SimNet\"");

        let unknown = serde_json::to_string(&CurrencyNet(7)).unwrap();
        assert_eq!(unknown, "\"0x00000007\"");
        let back: CurrencyNet = serde_json::from_str(&unknown).unwrap();
        assert_eq!(back, CurrencyNet(7));
    }
}
