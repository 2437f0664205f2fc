//! Benchmark dataset exporters
//!
//! Renders the static benchmark dataset (not an estimate) as CSV, a
//! plain-text summary report, or JSON, and writes dated export files.

use chrono::NaiveDate;
use msp_core::{
    models::{benchmark::PER_USER_MONTHLY, BenchmarkDataset, ExportFormat},
    traits::BenchmarkExporter,
    AppError, AppResult,
};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::format::format_title;

/// CSV header row
pub const CSV_HEADER: &str = "Category,Item,Min Price,Max Price,Description";

/// Date format used in the text report (en-US short date)
const REPORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// One CSV row per benchmark item
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl BenchmarkExporter for CsvExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }

    fn render(&self, dataset: &BenchmarkDataset, _generated_on: NaiveDate) -> AppResult<String> {
        let mut csv = String::new();
        writeln!(csv, "{}", CSV_HEADER).map_err(write_error)?;

        for category in dataset.categories {
            for item in category.items {
                writeln!(
                    csv,
                    "{},{},{},{},{}",
                    category.label,
                    quote(&format_title(item.key)),
                    item.range.min.normalize(),
                    item.range.max.normalize(),
                    quote(item.description)
                )
                .map_err(write_error)?;
            }
        }

        Ok(csv)
    }
}

/// Plain-text summary report
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportExporter;

impl BenchmarkExporter for ReportExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Report
    }

    fn render(&self, dataset: &BenchmarkDataset, generated_on: NaiveDate) -> AppResult<String> {
        let last_updated = dataset.last_updated_at()?;
        let mut out = String::new();

        writeln!(out, "MSP PRICING BENCHMARK REPORT").map_err(write_error)?;
        writeln!(out, "Generated: {}", generated_on.format(REPORT_DATE_FORMAT))
            .map_err(write_error)?;
        writeln!(
            out,
            "Data Last Updated: {}",
            last_updated.format(REPORT_DATE_FORMAT)
        )
        .map_err(write_error)?;
        writeln!(out).map_err(write_error)?;

        writeln!(out, "INDUSTRY AVERAGES:").map_err(write_error)?;
        if let Some(avg) = dataset.item(PER_USER_MONTHLY, "industry_average") {
            writeln!(
                out,
                "- Per-User Monthly: ${}-${}",
                avg.range.min.normalize(),
                avg.range.max.normalize()
            )
            .map_err(write_error)?;
        }
        if let Some(growth) = dataset.trend("future_growth_expectation") {
            writeln!(out, "- Market Growth: {}", growth.headline()).map_err(write_error)?;
        }
        if let Some(focus) = dataset.trend("profitability_focus") {
            writeln!(out, "- Profitability Focus: {}", focus.headline()).map_err(write_error)?;
        }
        writeln!(out).map_err(write_error)?;

        writeln!(out, "DATA SOURCES:").map_err(write_error)?;
        for source in dataset.data_sources {
            writeln!(out, "- {} ({})", source.name, source.update_frequency)
                .map_err(write_error)?;
        }
        writeln!(out).map_err(write_error)?;

        writeln!(out, "2025 MARKET TRENDS:").map_err(write_error)?;
        for trend in dataset.market_trends {
            writeln!(out, "- {}", trend.summary).map_err(write_error)?;
        }
        writeln!(out).map_err(write_error)?;

        writeln!(
            out,
            "This report is generated from aggregated industry data and should be used for benchmarking purposes only."
        )
        .map_err(write_error)?;

        Ok(out)
    }
}

/// Full dataset as pretty-printed JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl BenchmarkExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, dataset: &BenchmarkDataset, _generated_on: NaiveDate) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(dataset)?)
    }
}

/// Exporter for a format
pub fn exporter_for(format: ExportFormat) -> Box<dyn BenchmarkExporter> {
    match format {
        ExportFormat::Csv => Box::new(CsvExporter),
        ExportFormat::Report => Box::new(ReportExporter),
        ExportFormat::Json => Box::new(JsonExporter),
    }
}

/// Render the dataset and write it to a dated file in `dir`
///
/// Creates `dir` if needed and returns the path written.
#[instrument(skip(exporter, dataset), fields(format = %exporter.format()))]
pub fn write_export(
    exporter: &dyn BenchmarkExporter,
    dataset: &BenchmarkDataset,
    dir: &Path,
    generated_on: NaiveDate,
) -> AppResult<PathBuf> {
    let contents = exporter.render(dataset, generated_on)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(exporter.file_name(generated_on));
    debug!("Writing {} bytes to {}", contents.len(), path.display());
    fs::write(&path, contents)?;

    info!("Exported {} to {}", exporter.format(), path.display());
    Ok(path)
}

/// Quote a CSV field, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

pub(crate) fn write_error(err: std::fmt::Error) -> AppError {
    AppError::Export(err.to_string())
}
