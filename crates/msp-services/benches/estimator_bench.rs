//! Benchmarks for the pricing estimator and exporters
//!
//! Run with: cargo bench --package msp-services

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msp_core::models::{BenchmarkDataset, BusinessType, EstimateInput, RateTable, ServiceTier};
use msp_core::traits::BenchmarkExporter;
use msp_services::{CsvExporter, PricingEstimator, ReportExporter};

/// Benchmark a full estimate across user counts on either side of the discount breaks
fn bench_estimate(c: &mut Criterion) {
    let estimator = PricingEstimator::new(RateTable::standard());
    let mut group = c.benchmark_group("estimate");

    for users in [10u32, 75, 500] {
        let input = EstimateInput::new(users, users * 2, BusinessType::Medium, ServiceTier::Premium);
        group.bench_with_input(BenchmarkId::from_parameter(users), &input, |b, input| {
            b.iter(|| estimator.estimate(black_box(input)));
        });
    }

    group.finish();
}

/// Benchmark parsing untrusted form values
fn bench_from_raw(c: &mut Criterion) {
    c.bench_function("estimate_input_from_raw", |b| {
        b.iter(|| {
            EstimateInput::from_raw(
                black_box("120 users"),
                black_box("-4"),
                black_box("Large"),
                black_box("platinum"),
            )
        });
    });
}

/// Benchmark dataset exports
fn bench_exports(c: &mut Criterion) {
    let dataset = BenchmarkDataset::current();
    let date = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();

    c.bench_function("csv_export", |b| {
        b.iter(|| CsvExporter.render(black_box(dataset), date));
    });

    c.bench_function("report_export", |b| {
        b.iter(|| ReportExporter.render(black_box(dataset), date));
    });
}

criterion_group!(benches, bench_estimate, bench_from_raw, bench_exports);
criterion_main!(benches);
