use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "msp-benchmark",
    version,
    about = "MSP pricing benchmarks and monthly price estimates"
)]
pub struct Cli {
    /// Configuration file path (defaults to config/default and config/$RUN_MODE)
    #[arg(short, long, global = true, env = "MSP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Estimate monthly pricing under each model and recommend one
    Estimate {
        /// Number of users (non-numeric or negative values count as zero)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        users: String,

        /// Number of devices (non-numeric or negative values count as zero)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        devices: String,

        /// Business size: small, medium or large
        #[arg(short, long, default_value = "medium")]
        business_type: String,

        /// Service tier: basic, comprehensive or premium
        #[arg(short, long, default_value = "comprehensive")]
        tier: String,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export the benchmark dataset
    Export {
        /// Export format: csv, report or json (defaults to the configured format)
        #[arg(short, long)]
        format: Option<String>,

        /// Directory to write the export to (defaults to the configured directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// List benchmark price ranges
    Benchmarks,

    /// List the data sources behind the benchmarks
    Sources,

    /// List 2025 market trends
    Trends,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_estimate_args() {
        let cli = Cli::try_parse_from([
            "msp-benchmark",
            "estimate",
            "--users",
            "-5",
            "--devices",
            "40",
            "--tier",
            "premium",
        ])
        .unwrap();

        match cli.command {
            Commands::Estimate {
                users,
                devices,
                business_type,
                tier,
                json,
            } => {
                assert_eq!(users, "-5");
                assert_eq!(devices, "40");
                assert_eq!(business_type, "medium");
                assert_eq!(tier, "premium");
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_export_args() {
        let cli = Cli::try_parse_from([
            "msp-benchmark",
            "--config",
            "custom.toml",
            "export",
            "--format",
            "report",
            "--stdout",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Export {
                format,
                output_dir,
                stdout,
            } => {
                assert_eq!(format.as_deref(), Some("report"));
                assert!(output_dir.is_none());
                assert!(stdout);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
