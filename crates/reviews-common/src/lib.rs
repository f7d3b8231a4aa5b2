//! # reviews-common
//!
//! Shared utilities for the review platform backend: configuration
//! loading and tracing setup.

pub mod config;
pub mod telemetry;

pub use config::{AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
