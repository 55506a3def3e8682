//! Environment configuration.

use std::env;

/// Target id used when `APP_MOUNT_TARGET` is unset or blank.
pub const DEFAULT_TARGET_ID: &str = "app";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub target_id: String,
    pub log_filter: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            target_id: env_string_opt("APP_MOUNT_TARGET")
                .map(|value| value.trim().to_string())
                .unwrap_or_else(|| DEFAULT_TARGET_ID.to_string()),
            log_filter: env_string_opt("APP_MOUNT_LOG"),
            debug: env_flag("APP_MOUNT_DEBUG"),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            target_id: DEFAULT_TARGET_ID.to_string(),
            log_filter: None,
            debug: false,
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{EnvConfig, DEFAULT_TARGET_ID};
    use std::env;
    use std::sync::{Mutex, OnceLock};

    pub(crate) struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn env_defaults() {
        let _lock = env_lock();
        let _g1 = set_env_guard("APP_MOUNT_TARGET", None);
        let _g2 = set_env_guard("APP_MOUNT_LOG", None);
        let _g3 = set_env_guard("APP_MOUNT_DEBUG", None);

        let config = EnvConfig::from_env();
        assert_eq!(config.target_id, DEFAULT_TARGET_ID);
        assert!(config.log_filter.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn env_values_are_read() {
        let _lock = env_lock();
        let _g1 = set_env_guard("APP_MOUNT_TARGET", Some(" root "));
        let _g2 = set_env_guard("APP_MOUNT_LOG", Some("app_mount=trace"));
        let _g3 = set_env_guard("APP_MOUNT_DEBUG", Some("1"));

        let config = EnvConfig::from_env();
        assert_eq!(config.target_id, "root");
        assert_eq!(config.log_filter.as_deref(), Some("app_mount=trace"));
        assert!(config.debug);
    }

    #[test]
    fn blank_target_falls_back_to_default() {
        let _lock = env_lock();
        let _g1 = set_env_guard("APP_MOUNT_TARGET", Some("   "));
        let _g2 = set_env_guard("APP_MOUNT_DEBUG", Some("yes"));

        let config = EnvConfig::from_env();
        assert_eq!(config.target_id, DEFAULT_TARGET_ID);
        assert!(!config.debug);
    }
}
