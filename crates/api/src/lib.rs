//! HTTP API: the single place other screens and services ask what a debt is
//! worth today.

pub mod app;
pub mod config;

pub use config::{ApiConfig, ConfigError};
