use consensus_core::constants::LEOR_PER_KOBRA;
use std::fmt;
use thiserror::Error;

/// Ways of denominating an [`Amount`]. The discriminant is the exponent of
/// the decadic multiple relative to one KODA.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum AmountUnit {
    MegaKoda = 6,
    KiloKoda = 3,
    Koda = 0,
    MilliKoda = -3,
    MicroKoda = -6,
    Leor = -8,
}

impl AmountUnit {
    fn exponent(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for AmountUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AmountUnit::MegaKoda => "MKODA",
            AmountUnit::KiloKoda => "kKODA",
            AmountUnit::Koda => "KODA",
            AmountUnit::MilliKoda => "mKODA",
            AmountUnit::MicroKoda => "μKODA",
            AmountUnit::Leor => "Leor",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// The floating point input has no integer representation.
    #[error("invalid kobra amount")]
    InvalidAmount,
}

/// A quantity of leor, the base kobra monetary unit. One leor is 1e-8 KODA.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Builds an amount from a value denominated in KODA, rounding half
    /// away from zero. Fails only for NaN and the infinities; the range is
    /// deliberately unchecked because `f` may not refer to an amount held
    /// at a single moment in time.
    pub fn from_koda(f: f64) -> Result<Self, AmountError> {
        if f.is_nan() || f.is_infinite() {
            return Err(AmountError::InvalidAmount);
        }
        Ok(Self(round(f * LEOR_PER_KOBRA as f64)))
    }

    pub const fn from_leor(leor: u64) -> Self {
        Self(leor)
    }

    pub const fn leor(self) -> u64 {
        self.0
    }

    /// The amount denominated in the given unit.
    pub fn to_unit(self, unit: AmountUnit) -> f64 {
        self.0 as f64 / 10f64.powi(unit.exponent() + 8)
    }

    pub fn to_koda(self) -> f64 {
        self.to_unit(AmountUnit::Koda)
    }

    /// Formats the amount in the given unit with its label appended.
    pub fn format(self, unit: AmountUnit) -> String {
        format!("{} {}", self.to_unit(unit), unit)
    }

    /// Scales the amount by a floating point factor, rounding half away
    /// from zero. Not a consensus operation; meant for services computing
    /// e.g. percentage fees on top of amounts.
    pub fn mul_f64(self, f: f64) -> Amount {
        Self(round(self.0 as f64 * f))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(AmountUnit::Koda))
    }
}

/// Half-away-from-zero rounding to a base-unit count. Inputs pushed below
/// zero land on the saturating float-to-int conversion, i.e. zero.
fn round(f: f64) -> u64 {
    if f < 0.0 {
        (f - 0.5) as u64
    } else {
        (f + 0.5) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::{Amount, AmountError, AmountUnit};
    use consensus_core::constants::MAX_LEOR;

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Amount::from_koda(f64::NAN), Err(AmountError::InvalidAmount));
        assert_eq!(Amount::from_koda(f64::INFINITY), Err(AmountError::InvalidAmount));
        assert_eq!(Amount::from_koda(f64::NEG_INFINITY), Err(AmountError::InvalidAmount));
    }

    #[test]
    fn converts_koda_to_leor() {
        assert_eq!(Amount::from_koda(1.0).unwrap().leor(), 100_000_000);
        assert_eq!(Amount::from_koda(1.5).unwrap().leor(), 150_000_000);
        assert_eq!(Amount::from_koda(0.1).unwrap().leor(), 10_000_000);
        assert_eq!(Amount::from_koda(0.0).unwrap().leor(), 0);
    }

    #[test]
    fn round_trips_below_2_pow_53() {
        for leor in [0u64, 1, 42, 49_999_999, 100_000_000, 123_450_000, 1_234_567_890_123_456] {
            let amount = Amount::from_leor(leor);
            assert_eq!(Amount::from_koda(amount.to_koda()).unwrap(), amount);
        }
    }

    #[test]
    fn unit_conversion() {
        let amount = Amount::from_leor(123_450_000);
        assert_eq!(amount.to_koda(), 1.2345);
        assert_eq!(amount.to_unit(AmountUnit::Leor), 123_450_000.0);
        assert_eq!(amount.to_unit(AmountUnit::MegaKoda), 1.2345e-6);
    }

    #[test]
    fn formatting() {
        let amount = Amount::from_leor(123_450_000);
        assert_eq!(amount.format(AmountUnit::Koda), "1.2345 KODA");
        assert_eq!(amount.format(AmountUnit::Leor), "123450000 Leor");
        assert_eq!(amount.to_string(), "1.2345 KODA");
        assert_eq!(AmountUnit::MicroKoda.to_string(), "μKODA");
    }

    #[test]
    fn mul_f64_rounds_half_away_from_zero() {
        assert_eq!(Amount::from_leor(100).mul_f64(0.015), Amount::from_leor(2));
        assert_eq!(Amount::from_leor(100).mul_f64(0.0), Amount::from_leor(0));
        assert_eq!(Amount::from_leor(3).mul_f64(0.5), Amount::from_leor(2));
    }

    #[test]
    fn max_supply_is_representable() {
        let amount = Amount::from_leor(MAX_LEOR);
        assert_eq!(amount.leor(), 100_000_000_000_000_000);
    }
}
