//! Tracing subscriber initialisation.

use crate::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a configured level is usable.
pub const DEFAULT_FILTER: &str = "info,techshop=debug,tower_http=debug";

/// Output format of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ShopError::Configuration(format!("Unknown log format: {other}"))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Builds the env filter: `RUST_LOG` wins, then the configured level, then
/// [`DEFAULT_FILTER`].
#[must_use]
pub fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| match log_level {
            Some(level) if !level.trim().is_empty() => EnvFilter::try_new(level),
            _ => EnvFilter::try_new(DEFAULT_FILTER),
        })
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global tracing subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(log_level: Option<&str>, format: LogFormat) -> ShopResult<()> {
    let filter = build_filter(log_level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| ShopError::internal(format!("Failed to install tracing subscriber: {e}")))?;
    tracing::debug!(%format, "Tracing subscriber installed");
    Ok(())
}
