use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};
use crate::config::{Config, LOG_DIR_VAR, LOG_LEVEL_VAR, SCAN_STRATEGY_VAR};

/// Initialize file logging under the configured log directory
pub fn init_logging(config: &Config) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(&config.log_dir)?;

    let log_file = config
        .log_dir
        .join(format!("rosalind_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    let file = OpenOptions::new().create(true).append(true).open(&log_file)?;

    Builder::new()
        .filter_module("rosalind", config.log_level)
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {:?}", config.log_dir);

    Ok(log_file)
}

/// Log system information at startup
pub fn log_system_info(config: &Config) {
    info!("=== Rosalind Toolkit Starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());
    info!("Scan strategy: {}", config.strategy);

    debug!("Environment variables:");
    for key in [LOG_LEVEL_VAR, LOG_DIR_VAR, SCAN_STRATEGY_VAR, "RUST_LOG"] {
        if let Ok(value) = std::env::var(key) {
            debug!("  {key}: {value}");
        }
    }
}

/// Log application shutdown
pub fn log_shutdown() {
    info!("=== Rosalind Toolkit Shutting Down ===");
    info!("Terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Report a fatal error to the log and to stderr
pub fn log_critical_error(error: &str, context: Option<&str>) {
    if let Some(ctx) = context {
        error!("CRITICAL ERROR [{ctx}]: {error}");
    } else {
        error!("CRITICAL ERROR: {error}");
    }

    // the log file may not exist yet
    if let Some(ctx) = context {
        eprintln!("[{}] CRITICAL ERROR [{}]: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), ctx, error);
    } else {
        eprintln!("[{}] CRITICAL ERROR: {}",
                 Utc::now().format("%Y-%m-%d %H:%M:%S UTC"), error);
    }
}
