//! Integration tests for benchmark exports
//!
//! Writes each export format to a temporary directory and checks the file
//! name and contents.

use chrono::NaiveDate;
use msp_core::models::{BenchmarkDataset, ExportFormat};
use msp_services::export::CSV_HEADER;
use msp_services::{exporter_for, write_export, CsvExporter};
use std::fs;

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 12).unwrap()
}

#[test]
fn test_write_csv_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(
        &CsvExporter,
        BenchmarkDataset::current(),
        dir.path(),
        export_date(),
    )
    .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "msp-pricing-benchmarks-2025-08-12.csv"
    );

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with(CSV_HEADER));
    assert!(contents.contains("\"Service Leadership AISP\",100,250"));
}

#[test]
fn test_write_every_format() {
    let dir = tempfile::tempdir().unwrap();

    for format in [ExportFormat::Csv, ExportFormat::Report, ExportFormat::Json] {
        let exporter = exporter_for(format);
        let path = write_export(
            exporter.as_ref(),
            BenchmarkDataset::current(),
            dir.path(),
            export_date(),
        )
        .unwrap();

        assert_eq!(path.extension().unwrap(), format.extension());
        assert!(!fs::read_to_string(&path).unwrap().is_empty());
    }

    assert!(dir
        .path()
        .join("msp-pricing-report-2025-08-12.txt")
        .exists());
}

#[test]
fn test_write_export_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("exports").join("2025");

    let path = write_export(
        exporter_for(ExportFormat::Report).as_ref(),
        BenchmarkDataset::current(),
        &nested,
        export_date(),
    )
    .unwrap();

    assert!(path.starts_with(&nested));
    let report = fs::read_to_string(path).unwrap();
    assert!(report.contains("Generated: 8/12/2025"));
}

#[test]
fn test_write_export_into_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "x").unwrap();

    let err = write_export(
        &CsvExporter,
        BenchmarkDataset::current(),
        &blocker,
        export_date(),
    )
    .unwrap_err();

    assert_eq!(err.error_code(), "io_error");
}
