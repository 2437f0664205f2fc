//! Estimate input and result models
//!
//! Inputs are clamped and categories resolved at construction, so the
//! estimator only ever sees well-formed values. Results are plain values
//! produced fresh per calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BusinessType, ServiceTier};

/// Inputs to a pricing estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EstimateInput {
    /// Number of users to support
    pub user_count: u32,

    /// Number of managed devices
    pub device_count: u32,

    /// Business size category
    pub business_type: BusinessType,

    /// Requested service tier
    pub service_tier: ServiceTier,
}

impl EstimateInput {
    /// Create an input from already-typed values
    pub fn new(
        user_count: u32,
        device_count: u32,
        business_type: BusinessType,
        service_tier: ServiceTier,
    ) -> Self {
        Self {
            user_count,
            device_count,
            business_type,
            service_tier,
        }
    }

    /// Create an input from untrusted form values
    ///
    /// Counts go through [`parse_count`]; categories fall back to
    /// [`BusinessType::FALLBACK`] and [`ServiceTier::FALLBACK`].
    pub fn from_raw(users: &str, devices: &str, business_type: &str, service_tier: &str) -> Self {
        Self {
            user_count: parse_count(users),
            device_count: parse_count(devices),
            business_type: BusinessType::resolve(business_type),
            service_tier: ServiceTier::resolve(service_tier),
        }
    }

    /// At least one count is positive
    ///
    /// When false every count-driven model totals zero. What to show in
    /// that case is left to the caller.
    #[inline]
    pub fn has_meaningful_input(&self) -> bool {
        self.user_count > 0 || self.device_count > 0
    }
}

/// Parse a count the way a numeric form field is read
///
/// Takes the leading (optionally signed) integer, ignoring whatever follows:
/// `"12abc"` is 12 and `"3.7"` is 3. Non-numeric input yields 0, negative
/// values clamp to 0, and values beyond `u32::MAX` saturate.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    digits
        .bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
}

/// Per-user model result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerUserEstimate {
    /// Monthly price per user for the tier
    pub base_price: Decimal,

    /// Volume discount multiplier (1.0, 0.95 or 0.9)
    pub discount_multiplier: Decimal,

    /// Discount as a percentage, for display
    pub volume_discount_percent: Decimal,

    /// Rounded monthly total
    pub monthly_total: Decimal,
}

impl PerUserEstimate {
    /// Whether a volume discount was applied
    pub fn has_discount(&self) -> bool {
        self.volume_discount_percent > Decimal::ZERO
    }
}

/// Per-device model result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDeviceEstimate {
    /// Monthly price per workstation for the tier
    pub workstation_price: Decimal,

    /// Monthly price per server for the tier
    pub server_price: Decimal,

    /// Assumed workstation count (85% of devices, rounded)
    pub workstations: u32,

    /// Assumed server count (15% of devices, rounded)
    ///
    /// Rounded independently of `workstations`, so the two need not sum to
    /// the device count.
    pub servers: u32,

    /// Rounded monthly total
    pub monthly_total: Decimal,
}

/// Business-size model result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSizeEstimate {
    pub business_type: BusinessType,

    /// Base monthly cost for the business size
    pub base_estimate: Decimal,

    /// Tier multiplier applied to the base
    pub tier_multiplier: Decimal,

    /// Rounded monthly total
    pub monthly_total: Decimal,
}

/// Pricing model identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    PerUser,
    PerDevice,
    BusinessSize,
}

impl PricingModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::PerUser => "per-user",
            PricingModel::PerDevice => "per-device",
            PricingModel::BusinessSize => "business-size",
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended model and its monthly price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub model: PricingModel,
    pub price: Decimal,
}

/// Full result of one estimation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingEstimate {
    pub input: EstimateInput,
    pub per_user: PerUserEstimate,
    pub per_device: PerDeviceEstimate,
    pub business_size: BusinessSizeEstimate,
    pub recommended: Recommendation,
}

impl PricingEstimate {
    /// Recommended monthly price over twelve months
    pub fn annual_estimate(&self) -> Decimal {
        self.recommended.price.saturating_mul(Decimal::from(12))
    }
}
