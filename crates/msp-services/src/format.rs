//! Display formatting
//!
//! Text helpers shared by the exporters and the CLI: benchmark titles,
//! en-US currency amounts, and the estimate summary.

use msp_core::models::{PriceRange, PricingEstimate};
use msp_core::AppResult;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

use crate::export::write_error;

/// Turn a snake-case key into a display title
///
/// `"low_tier_msps"` becomes `"Low Tier MSPs"` and
/// `"service_leadership_aisp"` becomes `"Service Leadership AISP"`.
pub fn format_title(key: &str) -> String {
    let mut title = String::with_capacity(key.len());
    let mut at_word_start = true;

    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        let is_word = c.is_alphanumeric();
        if is_word && at_word_start {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        at_word_start = !is_word;
    }

    title.replace("Msps", "MSPs").replace("Aisp", "AISP")
}

/// Format an amount as en-US currency: `$14,250` or `$1,234.50`
pub fn format_currency(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    let amount = amount.abs();

    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();
    let cents = ((rounded - whole) * Decimal::ONE_HUNDRED).normalize();

    let grouped = group_thousands(&whole.normalize().to_string());

    if cents.is_zero() {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:0>2}", sign, grouped, cents.to_string())
    }
}

/// Format a benchmark range: `$2,000 - $3,000`
pub fn format_price_range(range: &PriceRange) -> String {
    format!(
        "{} - {}",
        format_currency(range.min),
        format_currency(range.max)
    )
}

/// Format a monthly amount: `$14,250/month`
pub fn format_monthly(amount: Decimal) -> String {
    format!("{}/month", format_currency(amount))
}

/// Render the estimate summary shown under the calculator
pub fn render_estimate(estimate: &PricingEstimate) -> AppResult<String> {
    let mut out = String::new();
    let input = &estimate.input;

    writeln!(out, "Pricing Estimates").map_err(write_error)?;
    writeln!(
        out,
        "  Per-User Model ({} users): {}",
        input.user_count,
        format_monthly(estimate.per_user.monthly_total)
    )
    .map_err(write_error)?;
    writeln!(
        out,
        "  Per-Device Model ({} devices): {}",
        input.device_count,
        format_monthly(estimate.per_device.monthly_total)
    )
    .map_err(write_error)?;
    writeln!(
        out,
        "  Business Size Estimate: {}",
        format_monthly(estimate.business_size.monthly_total)
    )
    .map_err(write_error)?;
    writeln!(
        out,
        "Recommended ({}): {}",
        estimate.recommended.model,
        format_monthly(estimate.recommended.price)
    )
    .map_err(write_error)?;
    writeln!(
        out,
        "Annual estimate: {}",
        format_currency(estimate.annual_estimate())
    )
    .map_err(write_error)?;

    if estimate.per_user.has_discount() {
        writeln!(
            out,
            "Volume discount applied: {}%",
            estimate.per_user.volume_discount_percent.normalize()
        )
        .map_err(write_error)?;
    }

    Ok(out)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
