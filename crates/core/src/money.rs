//! Money value objects.
//!
//! Amounts travel between systems as text: gross values in minor currency
//! units ("324222" = 3242.22), tax rates in percent ("20" = 20%). Both are
//! parsed once into exact values here; every later step works on
//! `rust_decimal::Decimal` and never on floats.

use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Non-negative amount in minor currency units (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(u64);

impl MinorUnits {
    pub fn new(minor: u64) -> Self {
        Self(minor)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Amount in major units (`minor / 100`), exact.
    pub fn to_major(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }
}

impl core::fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for MinorUnits {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("minor units '{trimmed}': {e}")))
    }
}

/// A rate expressed in percent (`20` = 20%). May be zero or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percent(Decimal);

impl Percent {
    pub const ZERO: Percent = Percent(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// The percentage as a fraction (`20` -> `0.20`).
    pub fn as_rate(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl core::fmt::Display for Percent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percent {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|e| DomainError::validation(format!("percent '{trimmed}': {e}")))
    }
}
