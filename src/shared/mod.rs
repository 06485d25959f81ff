//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API expects, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for API asset identifiers (e.g. `"bitcoin"`, `"ethereum"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self(DEFAULT_ASSET.to_string())
    }
}

/// Asset selected before any snapshot has been received.
pub const DEFAULT_ASSET: &str = "bitcoin";

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for AssetId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetId(s.to_string()))
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Settlement currency prices and market caps are denominated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Mxn,
    Btc,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Mxn, Currency::Btc];

    /// Query-parameter form (`vs_currency=usd`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Mxn => "mxn",
            Self::Btc => "btc",
        }
    }

    /// Upper-case ISO-style code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Mxn => "MXN",
            Self::Btc => "BTC",
        }
    }

    /// Selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Usd => "USD - Dólar",
            Self::Eur => "EUR - Euro",
            Self::Mxn => "MXN - Peso Mexicano",
            Self::Btc => "BTC - Bitcoin",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            "mxn" => Ok(Self::Mxn),
            "btc" => Ok(Self::Btc),
            other => Err(format!("Unsupported currency: {other}")),
        }
    }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// History lookback window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "1")]
    Day1,
    #[default]
    #[serde(rename = "7")]
    Day7,
    #[serde(rename = "30")]
    Day30,
    #[serde(rename = "365")]
    Day365,
}

impl Window {
    pub const ALL: [Window; 4] = [Window::Day1, Window::Day7, Window::Day30, Window::Day365];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1",
            Self::Day7 => "7",
            Self::Day30 => "30",
            Self::Day365 => "365",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            Self::Day1 => 1,
            Self::Day7 => 7,
            Self::Day30 => 30,
            Self::Day365 => 365,
        }
    }

    /// Downsampling stride: every n-th sample is kept.
    ///
    /// The yearly window is thinned to roughly weekly points and the monthly
    /// window to every other point. Shorter windows keep every sample.
    pub fn stride(&self) -> usize {
        match self {
            Self::Day1 | Self::Day7 => 1,
            Self::Day30 => 2,
            Self::Day365 => 7,
        }
    }

    /// Selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day1 => "24 Horas",
            Self::Day7 => "7 Días",
            Self::Day30 => "30 Días",
            Self::Day365 => "1 Año",
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Day1),
            "7" => Ok(Self::Day7),
            "30" => Ok(Self::Day30),
            "365" => Ok(Self::Day365),
            other => Err(format!("Unsupported window: {other} days")),
        }
    }
}
