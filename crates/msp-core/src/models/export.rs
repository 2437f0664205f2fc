//! Export format model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Export format for the benchmark dataset
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV rows, one per benchmark item
    #[default]
    Csv,
    /// Plain-text summary report
    Report,
    /// Full dataset as JSON
    Json,
}

impl ExportFormat {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "report" | "txt" | "text" => Some(Self::Report),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get content type header value
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Report => "text/plain; charset=utf-8",
            Self::Json => "application/json; charset=utf-8",
        }
    }

    /// Get file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Report => "txt",
            Self::Json => "json",
        }
    }

    /// File name prefix before the date
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Csv | Self::Json => "msp-pricing-benchmarks",
            Self::Report => "msp-pricing-report",
        }
    }

    /// Dated download file name, e.g. `msp-pricing-report-2025-08-11.txt`
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!(
            "{}-{}.{}",
            self.file_stem(),
            date.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Report => write!(f, "report"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format() {
        assert_eq!(ExportFormat::Csv.content_type(), "text/csv; charset=utf-8");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Report.extension(), "txt");
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
        assert_eq!(
            ExportFormat::Csv.file_name(date),
            "msp-pricing-benchmarks-2025-08-11.csv"
        );
        assert_eq!(
            ExportFormat::Report.file_name(date),
            "msp-pricing-report-2025-08-11.txt"
        );
        assert_eq!(
            ExportFormat::Json.file_name(date),
            "msp-pricing-benchmarks-2025-08-11.json"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(ExportFormat::from_str("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("txt"), Some(ExportFormat::Report));
        assert_eq!(ExportFormat::from_str("xlsx"), None);
    }
}
