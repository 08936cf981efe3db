//! Configuration and logging helpers

pub mod config;
pub mod logging;

pub use config::{
    load_config, save_config, AnalysisSettings, AppConfig, ConfigError, LoggingSettings,
    ResourceSettings, SourceSettings,
};
pub use logging::setup_logging;
