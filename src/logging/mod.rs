mod init;
pub use init::init_logging;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Log filename used by the preview binary.
pub const LOG_FILENAME: &str = "site-counts.log";

/// Where and how the preview binary writes its logs.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl LogConfig {
    /// Path of the active log file (before rotation suffixes).
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILENAME)
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_directive(&self) -> String {
        format!("site_counts={}", self.log_level)
    }

    /// Filter for one output layer; `RUST_LOG` wins over `log_level`.
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".site-counts")
            .join("logs");
        Self {
            log_dir,
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// Parse a `--log-level` value. `warning` is accepted for `warn`.
pub fn parse_level(s: &str) -> Result<Level, String> {
    let lowered = s.trim().to_lowercase();
    let name = if lowered == "warning" { "warn" } else { lowered.as_str() };
    Level::from_str(name)
        .map_err(|_| format!("unknown log level `{s}` (expected trace, debug, info, warn or error)"))
}

/// Parse a `--log-rotation` value; anything unrecognized rotates daily.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.trim().to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
