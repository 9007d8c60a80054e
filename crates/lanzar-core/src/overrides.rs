//! Per-platform override values.

use serde::{Deserialize, Serialize};

use crate::types::DaemonMethod;

/// Platform-specific configuration values.
///
/// A plain field bag: every field is independently optional and `None`
/// means "not configured" (never an empty-string sentinel), so callers can
/// distinguish an explicitly empty value from an absent one. All fallback
/// policy lives in [`LaunchConfig`](crate::config::LaunchConfig), which
/// lets the fallback rule differ per field without duplicating logic here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformOverride {
    /// Daemonization mechanism. Only meaningful for daemon launchers.
    #[serde(default)]
    pub daemon_method: Option<DaemonMethod>,

    /// User the installed daemon runs as.
    #[serde(default)]
    pub user: Option<String>,

    /// Group the installed daemon runs as.
    #[serde(default)]
    pub group: Option<String>,

    /// Install path prefix (e.g. `/opt`).
    #[serde(default)]
    pub prefix_dir: Option<String>,

    /// Platform-specific run directory. Unset means "no override"; the
    /// caller applies the global default itself.
    #[serde(default)]
    pub run_dir: Option<String>,

    /// Platform-specific log directory. Unset means "no override".
    #[serde(default)]
    pub log_dir: Option<String>,
}
