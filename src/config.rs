//! Configuration loading from environment variables.
//!
//! All values come from `OCLOG_*` variables with defaults. Invalid values
//! fall back to defaults without failing.
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `OCLOG_LEVEL` | `debug` | Severity of exported records |
//! | `OCLOG_LOG_FORMAT` | `json` | Subscriber format (`json` or `pretty`) |
//! | `OCLOG_LOG_FILTER` | `info` | Subscriber filter directive |
//! | `OCLOG_LOG_PATH` | unset | Subscriber output file (stderr if unset) |

use std::path::PathBuf;

use crate::event::{Level, Logger};
use crate::exporter::Exporter;
use crate::telemetry::{LogConfig, LogFormat};

pub const ENV_LEVEL: &str = "OCLOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "OCLOG_LOG_FORMAT";
pub const ENV_LOG_FILTER: &str = "OCLOG_LOG_FILTER";
pub const ENV_LOG_PATH: &str = "OCLOG_LOG_PATH";

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Severity at which exported records are written.
    pub level: Level,
    pub log: LogConfig,
}

impl EnvConfig {
    /// Load from the process environment.
    pub fn load() -> Self {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn load_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let level = parse_or(&lookup, ENV_LEVEL, defaults.level, |v| v.parse().ok());
        let format = parse_or(&lookup, ENV_LOG_FORMAT, defaults.log.format, LogFormat::parse);
        let filter = lookup(ENV_LOG_FILTER)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.log.level);
        let output_path = lookup(ENV_LOG_PATH)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            level,
            log: LogConfig {
                format,
                level: filter,
                output_path,
            },
        }
    }

    /// Exporter writing through `logger` at the configured level.
    pub fn exporter(&self, logger: &Logger) -> Exporter {
        Exporter::with_logger(logger, self.level)
    }
}

fn parse_or<T, F, P>(lookup: &F, key: &str, default: T, parse: P) -> T
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    match lookup(key) {
        Some(val) => parse(&val).unwrap_or_else(|| {
            tracing::warn!(key, value = %val, "invalid value, using default");
            default
        }),
        None => default,
    }
}
