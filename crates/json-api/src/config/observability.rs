//! Logging Config

use clap::Args;

/// Crates whose chatter is capped at `warn` unless `RUST_LOG` says otherwise.
const NOISY_TARGETS: [&str; 4] = ["h2", "hyper", "sqlx", "reqwest"];

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// One JSON object per line, with the active span list.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this many milliseconds are logged at `warn`.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

impl LoggingConfig {
    /// Filter directives used when `RUST_LOG` is not set in the environment.
    #[must_use]
    pub fn filter_directives(&self) -> String {
        NOISY_TARGETS
            .iter()
            .fold(self.log_level.clone(), |mut directives, target| {
                directives.push(',');
                directives.push_str(target);
                directives.push_str("=warn");
                directives
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_directives_cap_noisy_targets() {
        let logging = LoggingConfig {
            log_level: "debug".to_string(),
            log_format: LogFormat::Json,
            slow_request_threshold_ms: 250,
        };

        assert_eq!(
            logging.filter_directives(),
            "debug,h2=warn,hyper=warn,sqlx=warn,reqwest=warn"
        );
    }
}
