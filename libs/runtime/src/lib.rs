//! Process-level runtime support for the faithfin server: layered
//! configuration, logging setup, and home-directory resolution.

pub mod config;
pub mod logging;
pub mod paths;

pub use config::{
    AppConfig, AuthConfig, CliArgs, DatabaseConfig, LoggingConfig, Section, ServerConfig,
};
