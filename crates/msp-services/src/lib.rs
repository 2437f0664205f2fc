//! Business logic services for the MSP benchmark
//!
//! # Services
//!
//! - `PricingEstimator` - Per-user, per-device and business-size models plus
//!   the recommendation selector
//! - `CsvExporter`, `ReportExporter`, `JsonExporter` - Benchmark dataset exports
//! - `format` - Currency, title and estimate text formatting for display

pub mod estimator;
pub mod export;
pub mod format;

pub use estimator::PricingEstimator;
pub use export::{exporter_for, write_export, CsvExporter, JsonExporter, ReportExporter};

/// Business logic constants
pub mod constants {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    /// Users at or below this count get no volume discount
    pub const NO_DISCOUNT_MAX_USERS: u32 = 50;

    /// Users at or below this count (and above the no-discount cap) get the mid discount
    pub const MID_DISCOUNT_MAX_USERS: u32 = 100;

    /// Multiplier for 51-100 users
    pub const MID_DISCOUNT_MULTIPLIER: Decimal = dec!(0.95);

    /// Multiplier above 100 users
    pub const HIGH_DISCOUNT_MULTIPLIER: Decimal = dec!(0.9);

    /// Assumed share of devices that are workstations
    pub const WORKSTATION_SHARE: Decimal = dec!(0.85);

    /// Assumed share of devices that are servers
    pub const SERVER_SHARE: Decimal = dec!(0.15);

    /// Device/user ratio above which per-device pricing is considered
    pub const DEVICE_USER_RATIO_THRESHOLD: Decimal = dec!(2);

    /// Users above this count make business-size pricing eligible
    pub const BUSINESS_SIZE_MIN_USERS: u32 = 50;

    /// Maximum relative gap for business-size pricing to be preferred
    pub const BUSINESS_SIZE_PROXIMITY: Decimal = dec!(0.2);
}
