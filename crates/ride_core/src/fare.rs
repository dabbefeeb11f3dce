//! Fare rates for every ride kind.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RideError};
use crate::ride::RideKind;

/// Per-mile rate for rides without a specific kind.
pub const FLAT_PER_MILE: f64 = 1.5;

/// Flat fee charged on every standard ride.
pub const STANDARD_BASE_FEE: f64 = 2.0;

/// Per-mile rate for standard rides.
pub const STANDARD_PER_MILE: f64 = 1.8;

/// Flat fee charged on every premium ride.
pub const PREMIUM_BASE_FEE: f64 = 5.0;

/// Per-mile rate for premium rides.
pub const PREMIUM_PER_MILE: f64 = 3.5;

/// Multiplier applied to the premium subtotal.
pub const PREMIUM_MULTIPLIER: f64 = 1.15;

/// Unchecked rate values. Missing fields fall back to the defaults when
/// deserializing. Turn into a [`FareSchedule`] with `try_from` before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FareRates {
    pub flat_per_mile: f64,
    pub standard_base_fee: f64,
    pub standard_per_mile: f64,
    pub premium_base_fee: f64,
    pub premium_per_mile: f64,
    pub premium_multiplier: f64,
}

impl Default for FareRates {
    fn default() -> Self {
        Self {
            flat_per_mile: FLAT_PER_MILE,
            standard_base_fee: STANDARD_BASE_FEE,
            standard_per_mile: STANDARD_PER_MILE,
            premium_base_fee: PREMIUM_BASE_FEE,
            premium_per_mile: PREMIUM_PER_MILE,
            premium_multiplier: PREMIUM_MULTIPLIER,
        }
    }
}

impl FareRates {
    /// Reject rates that could produce a negative or non-finite fare.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("flat_per_mile", self.flat_per_mile),
            ("standard_base_fee", self.standard_base_fee),
            ("standard_per_mile", self.standard_per_mile),
            ("premium_base_fee", self.premium_base_fee),
            ("premium_per_mile", self.premium_per_mile),
            ("premium_multiplier", self.premium_multiplier),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(RideError::InvalidFareSchedule(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// Validated rate table used to price rides. Only obtainable from rates that
/// pass [`FareRates::validate`], so every fare it produces is non-negative
/// for a non-negative distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "FareRates", into = "FareRates")]
pub struct FareSchedule {
    rates: FareRates,
}

impl TryFrom<FareRates> for FareSchedule {
    type Error = RideError;

    fn try_from(rates: FareRates) -> Result<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }
}

impl From<FareSchedule> for FareRates {
    fn from(schedule: FareSchedule) -> Self {
        schedule.rates
    }
}

impl FareSchedule {
    pub fn rates(&self) -> FareRates {
        self.rates
    }

    /// Calculate the fare for a ride of `kind` covering `distance_miles`.
    ///
    /// - Flat: `flat_per_mile * distance`
    /// - Standard: `standard_base_fee + standard_per_mile * distance`
    /// - Premium: `(premium_base_fee + premium_per_mile * distance) * premium_multiplier`
    pub fn fare(&self, kind: RideKind, distance_miles: f64) -> f64 {
        let r = &self.rates;
        match kind {
            RideKind::Flat => r.flat_per_mile * distance_miles,
            RideKind::Standard => r.standard_base_fee + r.standard_per_mile * distance_miles,
            RideKind::Premium => {
                (r.premium_base_fee + r.premium_per_mile * distance_miles) * r.premium_multiplier
            }
        }
    }
}
