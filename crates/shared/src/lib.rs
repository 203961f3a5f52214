//! Shared configuration for the currency converter.

pub mod config;

pub use config::{AppConfig, ServerConfig};
