//! Integration tests for core models
//!
//! Exercises the public model API the way the services crate and the CLI use it.

#[cfg(test)]
mod tests {
    use msp_core::models::{
        BenchmarkDataset, BusinessType, EstimateInput, ExportFormat, RateTable, ServiceTier,
    };
    use msp_core::AppConfig;
    use rust_decimal_macros::dec;

    #[test]
    fn test_form_values_resolve_to_rate_table_entries() {
        let rates = RateTable::standard();
        let input = EstimateInput::from_raw("12", "30", "LARGE", "unknown-tier");

        assert_eq!(input.business_type, BusinessType::Large);
        assert_eq!(input.service_tier, ServiceTier::Comprehensive);
        assert_eq!(rates.size_base(input.business_type), dec!(16250));
        assert_eq!(rates.tier(input.service_tier).per_user, dec!(150));
    }

    #[test]
    fn test_every_tier_has_every_rate() {
        let rates = RateTable::standard();
        for tier in ServiceTier::ALL {
            let tier_rates = rates.tier(tier);
            assert!(tier_rates.per_user > dec!(0));
            assert!(tier_rates.workstation > dec!(0));
            assert!(tier_rates.server > dec!(0));
            assert!(tier_rates.size_multiplier > dec!(0));
        }
        for size in BusinessType::ALL {
            assert!(rates.size_base(size) > dec!(0));
        }
    }

    #[test]
    fn test_default_config_uses_standard_rates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rate_table(), RateTable::standard());
        assert_eq!(config.export.default_format, ExportFormat::Csv);
    }

    #[test]
    fn test_dataset_categories_have_items() {
        let dataset = BenchmarkDataset::current();
        for category in dataset.categories {
            assert!(!category.items.is_empty(), "{}", category.key);
        }
        assert!(dataset
            .data_sources
            .iter()
            .all(|s| !s.update_frequency.is_empty()));
    }
}
