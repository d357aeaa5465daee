//! Controller configuration record constants.

/// Name of the watched config record holding the controller configuration.
pub const CONTROLLER_CONFIG_NAME: &str = "vm-import-controller-config";

// ─── Keys ─────────────────────────────────────────────────────────────────

/// Name of the config record that maps source operating systems to templates.
pub const OS_CONFIG_MAP_NAME_KEY: &str = "osConfigMap.name";

/// Namespace of the OS mapping config record.
pub const OS_CONFIG_MAP_NAMESPACE_KEY: &str = "osConfigMap.namespace";

/// Number of consecutive warm-import failures tolerated before giving up.
pub const WARM_IMPORT_MAX_FAILURES_KEY: &str = "warmImport.maxFailures";

/// Delay in seconds before retrying after a failed warm-import iteration.
pub const WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_KEY: &str = "warmImport.consecutiveFailureDelay";

/// Delay in seconds between successful warm-import iterations.
pub const WARM_IMPORT_SUCCESSFUL_DELAY_KEY: &str = "warmImport.successfulDelay";

/// Whether a VM may be imported when no matching template is found.
pub const IMPORT_WITHOUT_TEMPLATE_KEY: &str = "importWithoutTemplate";

// ─── Defaults ─────────────────────────────────────────────────────────────

pub const DEFAULT_WARM_IMPORT_MAX_FAILURES: u32 = 5;

pub const DEFAULT_WARM_IMPORT_CONSECUTIVE_FAILURE_DELAY_SECS: u64 = 900;

pub const DEFAULT_WARM_IMPORT_SUCCESSFUL_DELAY_SECS: u64 = 3600;

pub const DEFAULT_IMPORT_WITHOUT_TEMPLATE: bool = false;

/// Default config record file read by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "/etc/vm-import/controller-config.yaml";
