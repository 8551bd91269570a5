//! Tracing subscriber initialisation.

use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{
    ServerConfig,
    observability::{LogFormat, LoggingConfig},
};

use super::{ObservabilityError, request};

/// Runtime observability state.
#[derive(Debug)]
pub(crate) struct Observability {
    log_format: LogFormat,
}

impl Observability {
    /// Initialize structured logging and request middleware settings.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        request::set_slow_request_threshold_ms(config.logging.slow_request_threshold_ms);

        match config.logging.log_format {
            LogFormat::Compact => init_with_layer(
                &config.logging,
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )?,
            LogFormat::Json => init_with_layer(
                &config.logging,
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_target(true),
            )?,
        }

        Ok(Self {
            log_format: config.logging.log_format,
        })
    }

    /// Emit a final record before the process exits.
    pub(crate) fn shutdown(self) {
        tracing::info!(log_format = ?self.log_format, "observability shut down");
    }
}

fn build_env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(logging.filter_directives()))
}

fn init_with_layer<L>(logging: &LoggingConfig, fmt_layer: L) -> Result<(), ObservabilityError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(build_env_filter(logging))
        .try_init()?;

    Ok(())
}
