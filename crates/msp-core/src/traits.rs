//! Common traits for services
//!
//! Defines the seam between the benchmark dataset and its output formats.

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{BenchmarkDataset, ExportFormat};

/// Renders the benchmark dataset into a downloadable document
pub trait BenchmarkExporter: Send + Sync {
    /// Format produced by this exporter
    fn format(&self) -> ExportFormat;

    /// Render the dataset as of `generated_on`
    fn render(
        &self,
        dataset: &BenchmarkDataset,
        generated_on: NaiveDate,
    ) -> Result<String, AppError>;

    /// Dated file name for the rendered document
    fn file_name(&self, generated_on: NaiveDate) -> String {
        self.format().file_name(generated_on)
    }
}
