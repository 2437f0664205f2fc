//! MSP Benchmark Core Library
//!
//! This crate provides the foundational types, traits, and error handling
//! for the MSP pricing benchmark. It includes:
//!
//! - Domain models (service tiers, business sizes, rate table, estimates)
//! - The static benchmark dataset presented by the dashboard
//! - The exporter trait implemented by the services crate
//! - Unified error handling
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
