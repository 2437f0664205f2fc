//! Service tier and business size categories
//!
//! Both are closed sets. Unrecognized strings resolve to a named fallback
//! instead of failing, so every form value maps to a defined category.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Managed service tier offered to the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    /// Remote monitoring, basic support, patch management
    Basic,
    /// 24/7 monitoring, help desk, security services, backup/DR
    #[default]
    Comprehensive,
    /// vCIO, strategic consulting, compliance management
    Premium,
}

impl ServiceTier {
    /// Tier used when the requested tier is not recognized
    pub const FALLBACK: ServiceTier = ServiceTier::Comprehensive;

    /// All tiers in display order
    pub const ALL: [ServiceTier; 3] = [
        ServiceTier::Basic,
        ServiceTier::Comprehensive,
        ServiceTier::Premium,
    ];

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(ServiceTier::Basic),
            "comprehensive" => Some(ServiceTier::Comprehensive),
            "premium" => Some(ServiceTier::Premium),
            _ => None,
        }
    }

    /// Parse from string, substituting [`ServiceTier::FALLBACK`] when unrecognized
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            debug!(tier = s, fallback = %Self::FALLBACK, "Unrecognized service tier");
            Self::FALLBACK
        })
    }

    /// Lowercase key used in forms and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceTier::Basic => "basic",
            ServiceTier::Comprehensive => "comprehensive",
            ServiceTier::Premium => "premium",
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer business size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    /// 10-20 employees
    Small,
    /// Around 50 employees
    #[default]
    Medium,
    /// 100+ employees
    Large,
}

impl BusinessType {
    /// Size used when the requested size is not recognized
    pub const FALLBACK: BusinessType = BusinessType::Medium;

    /// All sizes in display order
    pub const ALL: [BusinessType; 3] = [
        BusinessType::Small,
        BusinessType::Medium,
        BusinessType::Large,
    ];

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "small" => Some(BusinessType::Small),
            "medium" => Some(BusinessType::Medium),
            "large" => Some(BusinessType::Large),
            _ => None,
        }
    }

    /// Parse from string, substituting [`BusinessType::FALLBACK`] when unrecognized
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            debug!(business_type = s, fallback = %Self::FALLBACK, "Unrecognized business type");
            Self::FALLBACK
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Small => "small",
            BusinessType::Medium => "medium",
            BusinessType::Large => "large",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_tier_parsing() {
        assert_eq!(ServiceTier::from_str("basic"), Some(ServiceTier::Basic));
        assert_eq!(ServiceTier::from_str("PREMIUM"), Some(ServiceTier::Premium));
        assert_eq!(
            ServiceTier::from_str(" Comprehensive "),
            Some(ServiceTier::Comprehensive)
        );
        assert_eq!(ServiceTier::from_str("platinum"), None);
    }

    #[test]
    fn test_service_tier_fallback() {
        assert_eq!(ServiceTier::resolve("platinum"), ServiceTier::Comprehensive);
        assert_eq!(ServiceTier::resolve(""), ServiceTier::FALLBACK);
        assert_eq!(ServiceTier::resolve("basic"), ServiceTier::Basic);
    }

    #[test]
    fn test_business_type_fallback() {
        assert_eq!(BusinessType::resolve("enterprise"), BusinessType::Medium);
        assert_eq!(BusinessType::resolve("Large"), BusinessType::Large);
        assert_eq!(BusinessType::default(), BusinessType::FALLBACK);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tier in ServiceTier::ALL {
            assert_eq!(ServiceTier::from_str(&tier.to_string()), Some(tier));
        }
        for size in BusinessType::ALL {
            assert_eq!(BusinessType::from_str(&size.to_string()), Some(size));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ServiceTier::Premium).unwrap();
        assert_eq!(json, "\"premium\"");
        let size: BusinessType = serde_json::from_str("\"small\"").unwrap();
        assert_eq!(size, BusinessType::Small);
    }
}
