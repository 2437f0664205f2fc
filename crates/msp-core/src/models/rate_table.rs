//! Rate table model
//!
//! Rate constants per service tier and base monthly cost per business size.
//! Lookups are exhaustive matches over the tier and size enums, so every
//! combination has an entry.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{BusinessType, ServiceTier};

/// Rates charged for a single service tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TierRates {
    /// Monthly price per user
    #[validate(custom(function = "rate_in_range"))]
    pub per_user: Decimal,

    /// Monthly price per workstation
    #[validate(custom(function = "rate_in_range"))]
    pub workstation: Decimal,

    /// Monthly price per server
    #[validate(custom(function = "rate_in_range"))]
    pub server: Decimal,

    /// Multiplier applied to the business-size base cost
    #[validate(custom(function = "rate_in_range"))]
    pub size_multiplier: Decimal,
}

/// Base monthly cost per business size, before the tier multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SizeBases {
    #[validate(custom(function = "rate_in_range"))]
    pub small: Decimal,

    #[validate(custom(function = "rate_in_range"))]
    pub medium: Decimal,

    #[validate(custom(function = "rate_in_range"))]
    pub large: Decimal,
}

/// Static rate table
///
/// `RateTable::standard()` holds the benchmark-derived defaults. A table
/// loaded from configuration must pass [`Validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RateTable {
    #[validate(nested)]
    pub basic: TierRates,

    #[validate(nested)]
    pub comprehensive: TierRates,

    #[validate(nested)]
    pub premium: TierRates,

    #[validate(nested)]
    pub business_size: SizeBases,
}

/// Largest accepted configured rate
///
/// `u32::MAX` units at this rate, times twelve months, stays well inside
/// `Decimal`'s range.
pub const MAX_RATE: Decimal = dec!(1_000_000_000);

/// Standard rates, also used as the fallback for unrecognized tiers
pub const STANDARD_RATES: RateTable = RateTable {
    basic: TierRates {
        per_user: dec!(75),
        workstation: dec!(40),
        server: dec!(150),
        size_multiplier: dec!(0.7),
    },
    comprehensive: TierRates {
        per_user: dec!(150),
        workstation: dec!(65),
        server: dec!(210),
        size_multiplier: dec!(1.0),
    },
    premium: TierRates {
        per_user: dec!(200),
        workstation: dec!(85),
        server: dec!(275),
        size_multiplier: dec!(1.4),
    },
    business_size: SizeBases {
        small: dec!(2500),
        medium: dec!(6000),
        large: dec!(16250),
    },
};

impl RateTable {
    /// The standard benchmark rate table
    pub const fn standard() -> Self {
        STANDARD_RATES
    }

    /// Rates for a service tier
    #[inline]
    pub fn tier(&self, tier: ServiceTier) -> &TierRates {
        match tier {
            ServiceTier::Basic => &self.basic,
            ServiceTier::Comprehensive => &self.comprehensive,
            ServiceTier::Premium => &self.premium,
        }
    }

    /// Base monthly cost for a business size
    #[inline]
    pub fn size_base(&self, business_type: BusinessType) -> Decimal {
        match business_type {
            BusinessType::Small => self.business_size.small,
            BusinessType::Medium => self.business_size.medium,
            BusinessType::Large => self.business_size.large,
        }
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn rate_in_range(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("rate must not be negative".into());
        return Err(err);
    }
    if *value > MAX_RATE {
        let mut err = ValidationError::new("rate_out_of_range");
        err.message = Some(format!("rate must not exceed {}", MAX_RATE).into());
        return Err(err);
    }
    Ok(())
}
