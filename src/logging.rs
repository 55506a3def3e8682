//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; embedders that already install a
//! subscriber can skip [`init`].

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

/// Install a fmt subscriber filtered by `APP_MOUNT_LOG`, then `RUST_LOG`, then `info`.
///
/// `APP_MOUNT_DEBUG=1` raises the fallback level to `debug`. An unparsable
/// `APP_MOUNT_LOG` falls back as well and is reported with a `warn` event. Installation
/// is skipped when a global subscriber already exists.
pub fn init(config: &EnvConfig) {
    let (filter, rejected) = env_filter(config);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    if let Some(err) = rejected {
        tracing::warn!(
            directive = config.log_filter.as_deref().unwrap_or_default(),
            error = %err,
            "ignoring invalid APP_MOUNT_LOG directive"
        );
    }
}

fn env_filter(config: &EnvConfig) -> (EnvFilter, Option<ParseError>) {
    let fallback = if config.debug { "debug" } else { "info" };
    match config.log_filter.as_deref() {
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(err) => (EnvFilter::new(fallback), Some(err)),
        },
        None => (
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
            None,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{env_filter, init};
    use crate::config::EnvConfig;
    use tracing_subscriber::EnvFilter;

    #[test]
    fn explicit_filter_is_used() {
        let config = EnvConfig {
            log_filter: Some("app_mount=trace".to_string()),
            ..EnvConfig::default()
        };
        let (filter, rejected) = env_filter(&config);
        assert!(filter.to_string().contains("app_mount"));
        assert!(rejected.is_none());
    }

    #[test]
    fn invalid_filter_is_reported_and_falls_back() {
        let config = EnvConfig {
            log_filter: Some("app_mount=loud".to_string()),
            debug: true,
            ..EnvConfig::default()
        };
        let (filter, rejected) = env_filter(&config);
        assert!(rejected.is_some());
        assert_eq!(filter.to_string(), EnvFilter::new("debug").to_string());
    }

    #[test]
    fn init_twice_is_harmless() {
        let config = EnvConfig::default();
        init(&config);
        init(&config);
    }
}
