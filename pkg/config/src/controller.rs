use pkg_constants::config::{
    CONTROLLER_CONFIG_NAME, DEFAULT_IMPORT_WITHOUT_TEMPLATE,
    DEFAULT_WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_SECS, DEFAULT_WARM_IMPORT_MAX_FAILURES,
    DEFAULT_WARM_IMPORT_SUCCESSFUL_DELAY_SECS, IMPORT_WITHOUT_TEMPLATE_KEY,
    OS_CONFIG_MAP_NAME_KEY, OS_CONFIG_MAP_NAMESPACE_KEY, WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_KEY,
    WARM_IMPORT_MAX_FAILURES_KEY, WARM_IMPORT_SUCCESSFUL_DELAY_KEY,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

use crate::provider::{BareConfig, BareConfigProvider};

/// Typed view of the `vm-import-controller-config` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
    /// Name of the record mapping source operating systems to templates.
    #[serde(default)]
    pub os_config_map_name: Option<String>,
    #[serde(default)]
    pub os_config_map_namespace: Option<String>,
    pub warm_import_max_failures: u32,
    pub warm_import_consecutive_failure_delay_secs: u64,
    pub warm_import_successful_delay_secs: u64,
    pub import_without_template: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            os_config_map_name: None,
            os_config_map_namespace: None,
            warm_import_max_failures: DEFAULT_WARM_IMPORT_MAX_FAILURES,
            warm_import_consecutive_failure_delay_secs:
                DEFAULT_WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_SECS,
            warm_import_successful_delay_secs: DEFAULT_WARM_IMPORT_SUCCESSFUL_DELAY_SECS,
            import_without_template: DEFAULT_IMPORT_WITHOUT_TEMPLATE,
        }
    }
}

impl ControllerConfig {
    /// Build a config from raw record data. Missing or unparseable values
    /// fall back to their defaults, so this never fails.
    pub fn from_bare(data: &BareConfig) -> Self {
        let defaults = Self::default();
        Self {
            os_config_map_name: non_empty(data, OS_CONFIG_MAP_NAME_KEY),
            os_config_map_namespace: non_empty(data, OS_CONFIG_MAP_NAMESPACE_KEY),
            warm_import_max_failures: parse_or(
                data,
                WARM_IMPORT_MAX_FAILURES_KEY,
                defaults.warm_import_max_failures,
            ),
            warm_import_consecutive_failure_delay_secs: parse_or(
                data,
                WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_KEY,
                defaults.warm_import_consecutive_failure_delay_secs,
            ),
            warm_import_successful_delay_secs: parse_or(
                data,
                WARM_IMPORT_SUCCESSFUL_DELAY_KEY,
                defaults.warm_import_successful_delay_secs,
            ),
            import_without_template: parse_or(
                data,
                IMPORT_WITHOUT_TEMPLATE_KEY,
                defaults.import_without_template,
            ),
        }
    }

    /// `(namespace, name)` of the OS mapping record, when both are set.
    pub fn os_config_map(&self) -> Option<(&str, &str)> {
        match (&self.os_config_map_namespace, &self.os_config_map_name) {
            (Some(ns), Some(name)) => Some((ns.as_str(), name.as_str())),
            _ => None,
        }
    }

    pub fn warm_import_consecutive_failure_delay(&self) -> Duration {
        Duration::from_secs(self.warm_import_consecutive_failure_delay_secs)
    }

    pub fn warm_import_successful_delay(&self) -> Duration {
        Duration::from_secs(self.warm_import_successful_delay_secs)
    }
}

fn non_empty(data: &BareConfig, key: &str) -> Option<String> {
    data.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_or<T: FromStr + std::fmt::Display>(data: &BareConfig, key: &str, default: T) -> T {
    let Some(raw) = data.get(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(v) => v,
        Err(_) => {
            warn!(
                "Invalid value '{}' for controller config key {}, using default {}",
                raw, key, default
            );
            default
        }
    }
}

/// Access to the current controller configuration.
pub trait ControllerConfigProvider {
    /// The most recently observed configuration. An error from the underlying
    /// record watcher is returned alongside a best-effort snapshot.
    fn get_config(&self) -> (ControllerConfig, Option<anyhow::Error>);
}

/// Reads the controller configuration from the watched
/// `vm-import-controller-config` record.
pub struct ConfigMapControllerConfigProvider<P> {
    provider: P,
}

impl<P: BareConfigProvider> ConfigMapControllerConfigProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: BareConfigProvider> ControllerConfigProvider for ConfigMapControllerConfigProvider<P> {
    fn get_config(&self) -> (ControllerConfig, Option<anyhow::Error>) {
        let (bare, err) = self.provider.get_bare_config(CONTROLLER_CONFIG_NAME);
        (ControllerConfig::from_bare(&bare), err)
    }
}
