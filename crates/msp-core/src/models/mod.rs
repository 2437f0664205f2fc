//! Domain models for the MSP benchmark
//!
//! This module contains all the core domain models used throughout the application.

pub mod benchmark;
pub mod estimate;
pub mod export;
pub mod rate_table;
pub mod tier;

pub use benchmark::{
    BenchmarkCategory, BenchmarkDataset, BenchmarkItem, DataSource, MarketTrend, PriceRange,
    ServiceCategory, SourceStatus,
};
pub use estimate::{
    parse_count, BusinessSizeEstimate, EstimateInput, PerDeviceEstimate, PerUserEstimate,
    PricingEstimate, PricingModel, Recommendation,
};
pub use export::ExportFormat;
pub use rate_table::{RateTable, SizeBases, TierRates, MAX_RATE, STANDARD_RATES};
pub use tier::{BusinessType, ServiceTier};
