//! Static benchmark dataset
//!
//! Industry pricing ranges, the sources they were aggregated from, and the
//! 2025 market trend figures shown alongside them. The data is compiled in
//! and read-only.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::{AppError, AppResult};

/// Monthly price range observed in the market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// A single benchmark entry within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkItem {
    /// Snake-case key (e.g. "low_tier_msps")
    pub key: &'static str,

    #[serde(flatten)]
    pub range: PriceRange,

    pub description: &'static str,
}

/// Group of related benchmark entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkCategory {
    pub key: &'static str,

    /// Label used in exports (e.g. "Per-User Monthly")
    pub label: &'static str,

    pub items: &'static [BenchmarkItem],
}

/// Publishing status of a data source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Active,
}

impl SourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStatus::Active => "active",
        }
    }
}

/// Organization the benchmark figures are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DataSource {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub access_method: &'static str,
    pub key_metrics: &'static [&'static str],
    pub data_format: &'static str,
    pub coverage: &'static str,
    pub status: SourceStatus,
    pub update_frequency: &'static str,
}

/// Headline market trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketTrend {
    pub key: &'static str,

    /// Chart label
    pub label: &'static str,

    /// Figure as displayed (e.g. "91%" or "2/3")
    pub metric: &'static str,

    /// Figure as a whole percentage, for charting
    pub percentage: u8,

    /// Short caption shown next to the figure
    pub description: &'static str,

    /// Full sentence used in the text report
    pub summary: &'static str,

    /// Wording under the report's industry averages, where it differs from `summary`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<&'static str>,
}

impl MarketTrend {
    /// Sentence for the report's industry averages section
    pub fn headline(&self) -> &'static str {
        self.headline.unwrap_or(self.summary)
    }
}

/// Named bundle of services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceCategory {
    pub key: &'static str,
    pub services: &'static [&'static str],
}

/// The complete dataset behind the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BenchmarkDataset {
    /// RFC 3339 timestamp of the last data refresh
    pub last_updated: &'static str,
    pub categories: &'static [BenchmarkCategory],
    pub data_sources: &'static [DataSource],
    pub market_trends: &'static [MarketTrend],
    pub service_categories: &'static [ServiceCategory],
}

impl BenchmarkDataset {
    /// The compiled-in dataset
    pub fn current() -> &'static BenchmarkDataset {
        &BENCHMARK_DATASET
    }

    /// Parsed last-updated timestamp
    pub fn last_updated_at(&self) -> AppResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.last_updated)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                AppError::Serialization(format!(
                    "invalid last_updated timestamp {:?}: {}",
                    self.last_updated, e
                ))
            })
    }

    /// Find a category by key
    pub fn category(&self, key: &str) -> Option<&'static BenchmarkCategory> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Find an item by category key and item key
    pub fn item(&self, category: &str, key: &str) -> Option<&'static BenchmarkItem> {
        self.category(category)?.items.iter().find(|i| i.key == key)
    }

    /// Total number of benchmark items across all categories
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Find a market trend by key
    pub fn trend(&self, key: &str) -> Option<&'static MarketTrend> {
        self.market_trends.iter().find(|t| t.key == key)
    }
}

pub const PER_USER_MONTHLY: &str = "per_user_monthly";
pub const PER_DEVICE_MONTHLY: &str = "per_device_monthly";
pub const BUSINESS_SIZE_ESTIMATES: &str = "business_size_estimates";

static PER_USER_ITEMS: [BenchmarkItem; 5] = [
    BenchmarkItem {
        key: "low_tier_msps",
        range: PriceRange { min: dec!(50), max: dec!(100) },
        description: "Basic MSPs with minimal overhead",
    },
    BenchmarkItem {
        key: "mid_tier_msps",
        range: PriceRange { min: dec!(100), max: dec!(150) },
        description: "Mid-tier with broader service range",
    },
    BenchmarkItem {
        key: "top_tier_msps",
        range: PriceRange { min: dec!(125), max: dec!(250) },
        description: "Comprehensive, best-in-class MSPs",
    },
    BenchmarkItem {
        key: "industry_average",
        range: PriceRange { min: dec!(100), max: dec!(200) },
        description: "Overall industry benchmark",
    },
    BenchmarkItem {
        key: "service_leadership_aisp",
        range: PriceRange { min: dec!(100), max: dec!(250) },
        description: "AISP model for fully managed services",
    },
];

static PER_DEVICE_ITEMS: [BenchmarkItem; 4] = [
    BenchmarkItem {
        key: "workstation",
        range: PriceRange { min: dec!(30), max: dec!(100) },
        description: "Desktop/laptop management",
    },
    BenchmarkItem {
        key: "server",
        range: PriceRange { min: dec!(120), max: dec!(300) },
        description: "Server management and monitoring",
    },
    BenchmarkItem {
        key: "mobile_device",
        range: PriceRange { min: dec!(45), max: dec!(75) },
        description: "Smartphone/tablet management",
    },
    BenchmarkItem {
        key: "network_device",
        range: PriceRange { min: dec!(75), max: dec!(150) },
        description: "Switches, routers, firewalls",
    },
];

static BUSINESS_SIZE_ITEMS: [BenchmarkItem; 3] = [
    BenchmarkItem {
        key: "small_business_10_20_users",
        range: PriceRange { min: dec!(2000), max: dec!(3000) },
        description: "Monthly cost for 10-20 employee business",
    },
    BenchmarkItem {
        key: "medium_business_50_users",
        range: PriceRange { min: dec!(5000), max: dec!(7000) },
        description: "Monthly cost for 50 employee business",
    },
    BenchmarkItem {
        key: "large_business_100_users",
        range: PriceRange { min: dec!(12500), max: dec!(20000) },
        description: "Monthly cost for 100+ employee business",
    },
];

static CATEGORIES: [BenchmarkCategory; 3] = [
    BenchmarkCategory {
        key: PER_USER_MONTHLY,
        label: "Per-User Monthly",
        items: &PER_USER_ITEMS,
    },
    BenchmarkCategory {
        key: PER_DEVICE_MONTHLY,
        label: "Per-Device Monthly",
        items: &PER_DEVICE_ITEMS,
    },
    BenchmarkCategory {
        key: BUSINESS_SIZE_ESTIMATES,
        label: "Business Size",
        items: &BUSINESS_SIZE_ITEMS,
    },
];

static DATA_SOURCES: [DataSource; 4] = [
    DataSource {
        key: "service_leadership",
        name: "Service Leadership Inc.",
        description: "Leading MSP benchmarking organization with 20+ years of data",
        access_method: "Quarterly subscription ($1,999/year for reports)",
        key_metrics: &["AISP", "EBITDA", "Revenue Growth", "Gross Margin"],
        data_format: "Web app with 80+ metrics, quarterly reports",
        coverage: "Global MSPs across all business models",
        status: SourceStatus::Active,
        update_frequency: "Quarterly",
    },
    DataSource {
        key: "kaseya",
        name: "Kaseya Global MSP Benchmark Survey",
        description: "Annual survey with 1000+ MSP respondents",
        access_method: "Free white paper download",
        key_metrics: &["Revenue Growth", "Pricing Models", "Service Offerings"],
        data_format: "PDF report with survey data",
        coverage: "Global (83% Americas, 11% EMEA, 6% APAC)",
        status: SourceStatus::Active,
        update_frequency: "Annual",
    },
    DataSource {
        key: "trumethods",
        name: "TruMethods (Kaseya company)",
        description: "MSP coaching with benchmarking data",
        access_method: "Member pricing calculator and coaching",
        key_metrics: &["AISP", "MRR", "Leverage Ratio", "Reactive Support Level"],
        data_format: "Calculator tools and member data",
        coverage: "MSP clients and community members",
        status: SourceStatus::Active,
        update_frequency: "Ongoing",
    },
    DataSource {
        key: "channel_awards",
        name: "Channel Futures MSP 501/500",
        description: "Annual rankings requiring verified financial data",
        access_method: "Award submissions and published rankings",
        key_metrics: &["Revenue", "Growth Rate", "Employee Count"],
        data_format: "Published rankings and aggregated insights",
        coverage: "Top-performing MSPs globally",
        status: SourceStatus::Active,
        update_frequency: "Annual",
    },
];

static MARKET_TRENDS: [MarketTrend; 5] = [
    MarketTrend {
        key: "profitability_focus",
        label: "Profitability Focus",
        metric: "91%",
        percentage: 91,
        description: "MSPs prioritize profitability in 2025",
        summary: "91% of MSPs prioritize profitability in 2025",
        headline: Some("91% of MSPs prioritize profitability"),
    },
    MarketTrend {
        key: "revenue_growth",
        label: "Revenue Growth",
        metric: "64%",
        percentage: 64,
        description: "Reported revenue increases in 2024",
        summary: "64% reported revenue increases in 2024",
        headline: None,
    },
    MarketTrend {
        key: "future_growth_expectation",
        label: "Future Expectations",
        metric: "67%",
        percentage: 67,
        description: "Expect growth over next 3 years",
        summary: "67% expect growth over next 3 years",
        headline: Some("67% expect growth in next 3 years"),
    },
    MarketTrend {
        key: "ai_security_threats",
        label: "AI Threats",
        metric: "2/3",
        percentage: 67,
        description: "Experienced increase in AI-driven attacks",
        summary: "2/3 experienced increase in AI-driven attacks",
        headline: None,
    },
    MarketTrend {
        key: "automation_adoption",
        label: "Automation",
        metric: "90%",
        percentage: 90,
        description: "View automation as game-changing technology",
        summary: "90% view automation as game-changing technology",
        headline: None,
    },
];

static SERVICE_CATEGORIES: [ServiceCategory; 4] = [
    ServiceCategory {
        key: "basic_managed_services",
        services: &["Remote monitoring", "Basic support", "Patch management"],
    },
    ServiceCategory {
        key: "comprehensive_managed_services",
        services: &["24/7 monitoring", "Help desk", "Security services", "Backup/DR"],
    },
    ServiceCategory {
        key: "premium_services",
        services: &[
            "vCIO services",
            "Strategic consulting",
            "Compliance management",
            "Custom solutions",
        ],
    },
    ServiceCategory {
        key: "specialized_services",
        services: &["MSSP services", "Cloud migration", "DevOps", "Custom development"],
    },
];

pub static BENCHMARK_DATASET: BenchmarkDataset = BenchmarkDataset {
    last_updated: "2025-08-11T08:58:00Z",
    categories: &CATEGORIES,
    data_sources: &DATA_SOURCES,
    market_trends: &MARKET_TRENDS,
    service_categories: &SERVICE_CATEGORIES,
};
