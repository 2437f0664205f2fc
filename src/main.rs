//! MSP Pricing Benchmark CLI
//!
//! Presents static MSP pricing benchmark data, estimates monthly pricing
//! from user and device counts, and exports the dataset.

mod cli;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use msp_core::{
    models::{BenchmarkDataset, EstimateInput, ExportFormat},
    AppConfig, AppError,
};
use msp_services::{
    exporter_for,
    format::{format_price_range, format_title, render_estimate},
    write_export, PricingEstimator,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands};

/// Initialize tracing/logging
///
/// Logs go to stderr so exports printed to stdout stay clean.
fn init_tracing(config: &AppConfig) {
    let log_level = &config.logging.level;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "msp_benchmark={},msp_core={},msp_services={}",
            log_level, log_level, log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(&path.to_string_lossy())
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    init_tracing(&config);
    debug!("Configuration loaded: {:?}", config);

    let dataset = BenchmarkDataset::current();

    match cli.command {
        Commands::Estimate {
            users,
            devices,
            business_type,
            tier,
            json,
        } => {
            let input = EstimateInput::from_raw(&users, &devices, &business_type, &tier);
            run_estimate(&config, &input, json)
        }
        Commands::Export {
            format,
            output_dir,
            stdout,
        } => {
            let format = match format {
                Some(raw) => ExportFormat::from_str(&raw)
                    .ok_or(AppError::UnsupportedFormat(raw))?,
                None => config.export.default_format,
            };
            let exporter = exporter_for(format);
            let today = Local::now().date_naive();

            if stdout {
                debug!("Rendering {} export as {}", format, format.content_type());
                print!("{}", exporter.render(dataset, today)?);
            } else {
                let dir = output_dir.unwrap_or_else(|| config.export.output_dir.clone());
                let path = write_export(exporter.as_ref(), dataset, &dir, today)?;
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Benchmarks => {
            print_benchmarks(dataset);
            Ok(())
        }
        Commands::Sources => {
            print_sources(dataset);
            Ok(())
        }
        Commands::Trends => {
            print_trends(dataset);
            Ok(())
        }
    }
}

fn run_estimate(config: &AppConfig, input: &EstimateInput, json: bool) -> Result<()> {
    if !input.has_meaningful_input() {
        warn!("Estimate requested with no users or devices");
        println!("Please enter valid numbers for users or devices");
        return Ok(());
    }

    let estimator = PricingEstimator::new(config.rate_table());
    let estimate = estimator.estimate(input);

    info!(
        "Recommended {} at {} per month",
        estimate.recommended.model, estimate.recommended.price
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        print!("{}", render_estimate(&estimate)?);
    }
    Ok(())
}

fn print_benchmarks(dataset: &BenchmarkDataset) {
    for category in dataset.categories {
        println!("{}", category.label);
        for item in category.items {
            println!(
                "  {:<28} {:<20} {}",
                format_title(item.key),
                format_price_range(&item.range),
                item.description
            );
        }
        println!();
    }
}

fn print_sources(dataset: &BenchmarkDataset) {
    for source in dataset.data_sources {
        println!("{} [{}]", source.name, source.status.as_str());
        println!("  {}", source.description);
        println!("  Access: {}", source.access_method);
        println!("  Coverage: {}", source.coverage);
        println!("  Key metrics: {}", source.key_metrics.join(", "));
        println!("  Updates: {}", source.update_frequency);
        println!();
    }
}

fn print_trends(dataset: &BenchmarkDataset) {
    println!("2025 MSP Trends");
    for trend in dataset.market_trends {
        let bar = "#".repeat(usize::from(trend.percentage / 5));
        println!("  {:>4}  {:<20} {}", trend.metric, bar, trend.description);
    }
}
