//! Pricing estimator
//!
//! Computes three independent monthly estimates (per-user, per-device and
//! business-size) and picks a recommended one. Every call is a pure function
//! of its input and the rate table; it never fails. Totals saturate at
//! `Decimal::MAX` for rate tables that skipped validation.

use msp_core::models::{
    BusinessSizeEstimate, BusinessType, EstimateInput, PerDeviceEstimate, PerUserEstimate,
    PricingEstimate, PricingModel, RateTable, Recommendation, ServiceTier,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, instrument};

use crate::constants::{
    BUSINESS_SIZE_MIN_USERS, BUSINESS_SIZE_PROXIMITY, DEVICE_USER_RATIO_THRESHOLD,
    HIGH_DISCOUNT_MULTIPLIER, MID_DISCOUNT_MAX_USERS, MID_DISCOUNT_MULTIPLIER,
    NO_DISCOUNT_MAX_USERS, SERVER_SHARE, WORKSTATION_SHARE,
};

/// Pricing estimator over a fixed rate table
#[derive(Debug, Clone, Default)]
pub struct PricingEstimator {
    rates: RateTable,
}

impl PricingEstimator {
    /// Create an estimator over the given rate table
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Run all three models and select a recommendation
    #[instrument(skip(self), fields(
        users = input.user_count,
        devices = input.device_count,
        business_type = %input.business_type,
        tier = %input.service_tier,
    ))]
    pub fn estimate(&self, input: &EstimateInput) -> PricingEstimate {
        let per_user = self.per_user(input.user_count, input.service_tier);
        let per_device = self.per_device(input.device_count, input.service_tier);
        let business_size = self.business_size(input.business_type, input.service_tier);

        let recommended = Self::recommend(
            &per_user,
            &per_device,
            &business_size,
            input.user_count,
            input.device_count,
        );

        debug!(
            "Estimate: per-user {}, per-device {}, business-size {}, recommended {} at {}",
            per_user.monthly_total,
            per_device.monthly_total,
            business_size.monthly_total,
            recommended.model,
            recommended.price
        );

        PricingEstimate {
            input: *input,
            per_user,
            per_device,
            business_size,
            recommended,
        }
    }

    /// Per-user model: tier base price with a tiered volume discount
    pub fn per_user(&self, user_count: u32, tier: ServiceTier) -> PerUserEstimate {
        let base_price = self.rates.tier(tier).per_user;
        let discount_multiplier = volume_discount_multiplier(user_count);
        let monthly_total = round_currency(
            Decimal::from(user_count)
                .saturating_mul(base_price)
                .saturating_mul(discount_multiplier),
        );

        PerUserEstimate {
            base_price,
            discount_multiplier,
            volume_discount_percent: (Decimal::ONE - discount_multiplier) * Decimal::ONE_HUNDRED,
            monthly_total,
        }
    }

    /// Per-device model: assumed 85/15 workstation/server mix
    pub fn per_device(&self, device_count: u32, tier: ServiceTier) -> PerDeviceEstimate {
        let rates = self.rates.tier(tier);

        // Each share is rounded on its own; the two need not sum to device_count.
        let workstations = share_of(device_count, WORKSTATION_SHARE);
        let servers = share_of(device_count, SERVER_SHARE);

        let monthly_total = round_currency(
            Decimal::from(workstations)
                .saturating_mul(rates.workstation)
                .saturating_add(Decimal::from(servers).saturating_mul(rates.server)),
        );

        PerDeviceEstimate {
            workstation_price: rates.workstation,
            server_price: rates.server,
            workstations,
            servers,
            monthly_total,
        }
    }

    /// Business-size model: fixed base per size scaled by the tier multiplier
    pub fn business_size(
        &self,
        business_type: BusinessType,
        tier: ServiceTier,
    ) -> BusinessSizeEstimate {
        let base_estimate = self.rates.size_base(business_type);
        let tier_multiplier = self.rates.tier(tier).size_multiplier;

        BusinessSizeEstimate {
            business_type,
            base_estimate,
            tier_multiplier,
            monthly_total: round_currency(base_estimate.saturating_mul(tier_multiplier)),
        }
    }

    /// Select the recommended model
    ///
    /// Starts from per-user. Per-device replaces it when devices outnumber
    /// users more than two to one and it is strictly cheaper. Then, for more
    /// than 50 users, business-size replaces whatever is current when it is
    /// within 20% of it. Both rules always run, in that order.
    pub fn recommend(
        per_user: &PerUserEstimate,
        per_device: &PerDeviceEstimate,
        business_size: &BusinessSizeEstimate,
        user_count: u32,
        device_count: u32,
    ) -> Recommendation {
        let mut recommended = Recommendation {
            model: PricingModel::PerUser,
            price: per_user.monthly_total,
        };

        let device_user_ratio = Decimal::from(device_count) / Decimal::from(user_count.max(1));

        if device_user_ratio > DEVICE_USER_RATIO_THRESHOLD
            && per_device.monthly_total < recommended.price
        {
            debug!(
                "Switching to per-device: ratio {} and {} < {}",
                device_user_ratio, per_device.monthly_total, recommended.price
            );
            recommended = Recommendation {
                model: PricingModel::PerDevice,
                price: per_device.monthly_total,
            };
        }

        if user_count > BUSINESS_SIZE_MIN_USERS {
            match relative_difference(business_size.monthly_total, recommended.price) {
                Some(gap) if gap < BUSINESS_SIZE_PROXIMITY => {
                    debug!(
                        "Switching to business-size: {} within {} of {}",
                        business_size.monthly_total, gap, recommended.price
                    );
                    recommended = Recommendation {
                        model: PricingModel::BusinessSize,
                        price: business_size.monthly_total,
                    };
                }
                Some(_) => {}
                None => debug!("Skipping business-size comparison against a zero total"),
            }
        }

        recommended
    }
}

/// Volume discount multiplier for a user count
fn volume_discount_multiplier(user_count: u32) -> Decimal {
    if user_count > MID_DISCOUNT_MAX_USERS {
        HIGH_DISCOUNT_MULTIPLIER
    } else if user_count > NO_DISCOUNT_MAX_USERS {
        MID_DISCOUNT_MULTIPLIER
    } else {
        Decimal::ONE
    }
}

/// `|value - reference| / reference`, or `None` when the reference is zero
fn relative_difference(value: Decimal, reference: Decimal) -> Option<Decimal> {
    if reference.is_zero() {
        return None;
    }
    // Totals are whole amounts, so |reference| >= 1 and the division cannot overflow
    Some(value.saturating_sub(reference).abs() / reference)
}

/// Round half away from zero to a whole currency unit
#[inline]
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounded share of a count
fn share_of(count: u32, share: Decimal) -> u32 {
    // share <= 1, so the rounded result never exceeds count
    round_currency(Decimal::from(count) * share)
        .to_u32()
        .unwrap_or(count)
}
