//! Runtime settings read from `ROSALIND_*` environment variables.

use std::path::PathBuf;
use log::LevelFilter;
use crate::substring::ScanStrategy;

pub const LOG_LEVEL_VAR: &str = "ROSALIND_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "ROSALIND_LOG_DIR";
pub const SCAN_STRATEGY_VAR: &str = "ROSALIND_SCAN_STRATEGY";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub log_dir: PathBuf,
    pub strategy: ScanStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LevelFilter::Info,
            log_dir: default_log_dir(),
            strategy: ScanStrategy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_log_level(&level);
        }
        if let Some(dir) = lookup(LOG_DIR_VAR) {
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(strategy) = lookup(SCAN_STRATEGY_VAR) {
            match strategy.parse() {
                Ok(strategy) => config.strategy = strategy,
                Err(e) => eprintln!("{e}, defaulting to '{}'", config.strategy),
            }
        }

        config
    }
}

pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rosalind")
        .join("logs")
}

/// Parse a log level name, falling back to `info`.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        other => {
            eprintln!("Invalid log level '{other}', defaulting to 'info'");
            LevelFilter::Info
        }
    }
}
