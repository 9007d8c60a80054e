//! Launcher configuration model and per-platform resolution.
//!
//! [`LaunchConfig`] holds the global defaults for one generation run plus a
//! map of per-platform overrides, and exposes read-only queries that resolve
//! one value at a time for a target platform. Resolution is a pure function
//! of current state: no caching, no mutation.
//!
//! Four override fields (`daemon_method`, `user`, `group`, `prefix_dir`)
//! fall back MAC_OSX → LINUX when macOS leaves them unconfigured; the two
//! directory overrides (`log_dir`, `run_dir`) deliberately do not. The
//! asymmetry is declared per query via [`Fallback`] so it reads as policy,
//! not as an accident of near-identical methods.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tracing::debug;

use crate::error::{LauncherError, Result};
use crate::overrides::PlatformOverride;
use crate::platform::{IntoPlatform, Platform};
use crate::types::{DaemonMethod, LauncherType, WorkingDirMode};

/// Declarative description of the launcher(s) to generate.
///
/// Constructed once with the required fields, populated by an external
/// loader, then treated as immutable input for the rest of the run. The
/// downstream renderer must read per-platform values through the resolution
/// queries rather than through [`platform_overrides`](Self::platform_overrides)
/// directly, or it loses the fallback behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Unique launcher identifier. Required.
    pub name: String,

    /// Human-friendly name. Defaults to `name` via [`display_name`](Self::display_name).
    #[serde(default)]
    pub display_name: Option<String>,

    /// Reverse-DNS-style namespace (e.g. `com.example`). Required.
    pub domain: String,

    /// One-line description. Required at validation time.
    #[serde(default)]
    pub short_description: String,

    /// Longer description for service metadata.
    #[serde(default)]
    pub long_description: Option<String>,

    /// Directory name for launcher scripts.
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,

    /// Directory name for pid/runtime files.
    #[serde(default = "default_run_dir")]
    pub run_dir: String,

    /// Directory name for shared resources and helpers.
    #[serde(default = "default_share_dir")]
    pub share_dir: String,

    /// Directory name for log output.
    #[serde(default = "default_log_dir")]
    pub log_dir: String,

    /// Directory name for jars.
    #[serde(default = "default_lib_dir")]
    pub lib_dir: String,

    /// Fully-qualified Java class whose `main` is invoked. Required.
    pub main_class: String,

    /// Console or daemon launcher. Required.
    #[serde(rename = "type")]
    pub launcher_type: LauncherType,

    /// Explicit working-directory mode. When unset, derived from
    /// `launcher_type` by [`working_dir_mode`](Self::working_dir_mode).
    #[serde(default)]
    pub working_dir_mode: Option<WorkingDirMode>,

    /// Application argument template.
    #[serde(default)]
    pub app_args: String,

    /// JVM argument template.
    #[serde(default)]
    pub java_args: String,

    /// Extra application arguments, settable independently of `app_args`.
    #[serde(default)]
    pub extra_app_args: String,

    /// Extra JVM arguments, settable independently of `java_args`.
    #[serde(default)]
    pub extra_java_args: String,

    /// Minimum Java version the launcher accepts.
    #[serde(default = "default_min_java_version")]
    pub min_java_version: String,

    /// Maximum Java version the launcher accepts, if any.
    #[serde(default)]
    pub max_java_version: Option<String>,

    /// Minimum heap size in megabytes.
    #[serde(default)]
    pub min_java_memory: Option<u32>,

    /// Maximum heap size in megabytes.
    #[serde(default)]
    pub max_java_memory: Option<u32>,

    /// Minimum heap size as a percentage of system memory.
    #[serde(default)]
    pub min_java_memory_pct: Option<u32>,

    /// Maximum heap size as a percentage of system memory.
    #[serde(default)]
    pub max_java_memory_pct: Option<u32>,

    /// Pass `-Xrs` to daemon JVMs. Without it, service managers observe
    /// signal-triggered exit codes (e.g. 143 under systemd) on shutdown.
    #[serde(default = "default_true")]
    pub include_java_xrs: bool,

    /// Symlink the java binary to `<name>-java` so the process carries a
    /// friendly name. Only safe when the app name is unique among daemons.
    #[serde(default)]
    pub symlink_java: bool,

    /// Ship the java-detect helper script alongside the launcher.
    #[serde(default)]
    pub include_java_detect_helper: bool,

    /// How long a daemon pid must survive after launch before it counts as
    /// started successfully.
    #[serde(default = "default_daemon_min_lifetime")]
    #[serde(with = "humantime_serde")]
    pub daemon_min_lifetime: Duration,

    /// Platforms to generate launchers for. Must be non-empty at
    /// validation time.
    #[serde(default)]
    pub platforms: BTreeSet<Platform>,

    /// Raw `[Service]` section text merged verbatim into generated systemd
    /// units. Not interpreted here.
    #[serde(default)]
    pub systemd_service_section: Option<String>,

    /// Per-platform overrides. Seeded by [`default_platform_overrides`];
    /// a loaded file that supplies this key replaces the seeds. Independent
    /// of `platforms`: an entry for an unselected platform is tolerated and
    /// simply unused, and a selected platform without an entry resolves
    /// through defaults and fallback.
    #[serde(default = "default_platform_overrides")]
    pub platform_overrides: BTreeMap<Platform, PlatformOverride>,
}

fn default_bin_dir() -> String {
    "bin".to_string()
}

fn default_run_dir() -> String {
    "run".to_string()
}

fn default_share_dir() -> String {
    "share".to_string()
}

fn default_log_dir() -> String {
    "log".to_string()
}

fn default_lib_dir() -> String {
    "lib".to_string()
}

fn default_min_java_version() -> String {
    "1.6".to_string()
}

fn default_true() -> bool {
    true
}

fn default_daemon_min_lifetime() -> Duration {
    Duration::from_secs(5)
}

/// Built-in per-platform override seeds.
///
/// LINUX daemonizes with nohup and installs under `/opt`; WINDOWS uses the
/// JSLWIN service wrapper. MAC_OSX deliberately has no entry so its values
/// inherit from LINUX through the fallback chain.
#[must_use]
pub fn default_platform_overrides() -> BTreeMap<Platform, PlatformOverride> {
    let mut overrides = BTreeMap::new();
    overrides.insert(
        Platform::Linux,
        PlatformOverride {
            daemon_method: Some(DaemonMethod::Nohup),
            prefix_dir: Some("/opt".to_string()),
            ..PlatformOverride::default()
        },
    );
    overrides.insert(
        Platform::Windows,
        PlatformOverride {
            daemon_method: Some(DaemonMethod::Jslwin),
            ..PlatformOverride::default()
        },
    );
    overrides
}

/// Fallback policy for one per-platform field.
///
/// Declared per query in [`LaunchConfig`] rather than hardcoded in the
/// resolver, so the per-field asymmetry is a visible rule. A future
/// platform that inherits from another would add a variant here instead of
/// new per-field methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// MAC_OSX reads the LINUX value when its own is unconfigured.
    LinuxForMacOsx,
    /// The platform's own value or nothing.
    None,
}

impl LaunchConfig {
    /// Creates a configuration with the required fields; everything else
    /// takes its documented default, and the built-in LINUX/WINDOWS
    /// override seeds are installed.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        main_class: impl Into<String>,
        launcher_type: LauncherType,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            domain: domain.into(),
            short_description: String::new(),
            long_description: None,
            bin_dir: default_bin_dir(),
            run_dir: default_run_dir(),
            share_dir: default_share_dir(),
            log_dir: default_log_dir(),
            lib_dir: default_lib_dir(),
            main_class: main_class.into(),
            launcher_type,
            working_dir_mode: None,
            app_args: String::new(),
            java_args: String::new(),
            extra_app_args: String::new(),
            extra_java_args: String::new(),
            min_java_version: default_min_java_version(),
            max_java_version: None,
            min_java_memory: None,
            max_java_memory: None,
            min_java_memory_pct: None,
            max_java_memory_pct: None,
            include_java_xrs: true,
            symlink_java: false,
            include_java_detect_helper: false,
            daemon_min_lifetime: default_daemon_min_lifetime(),
            platforms: BTreeSet::new(),
            systemd_service_section: None,
            platform_overrides: default_platform_overrides(),
        }
    }

    /// Loads a configuration from a TOML file and validates it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if a
    /// required field is missing.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| LauncherError::config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        debug!(name = %config.name, platforms = config.platforms.len(), "loaded launcher config");
        Ok(config)
    }

    /// Validates required fields and the non-empty platform set.
    ///
    /// # Errors
    /// Returns [`LauncherError::MissingField`] for an absent required field
    /// and [`LauncherError::Config`] for structural problems.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LauncherError::MissingField("name"));
        }
        // The name ends up in file names and process names.
        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LauncherError::config(
                "name must contain only alphanumeric characters, hyphens, and underscores",
            ));
        }
        if self.domain.is_empty() {
            return Err(LauncherError::MissingField("domain"));
        }
        if self.short_description.is_empty() {
            return Err(LauncherError::MissingField("short_description"));
        }
        if self.main_class.is_empty() {
            return Err(LauncherError::MissingField("main_class"));
        }
        if self.platforms.is_empty() {
            return Err(LauncherError::config(
                "at least one target platform must be selected",
            ));
        }
        Ok(())
    }

    /// Returns the display name, defaulting to `name` when unset.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the working-directory mode: the explicit value when one was
    /// set, otherwise derived from the launcher type (console launchers
    /// retain the invoking directory, daemons run from the app home).
    #[must_use]
    pub fn working_dir_mode(&self) -> WorkingDirMode {
        self.working_dir_mode.unwrap_or(match self.launcher_type {
            LauncherType::Console => WorkingDirMode::Retain,
            LauncherType::Daemon => WorkingDirMode::AppHome,
        })
    }

    /// Returns the override entry for a platform. Direct lookup, never
    /// falls back.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn platform_override(
        &self,
        platform: impl IntoPlatform,
    ) -> Result<Option<&PlatformOverride>> {
        let platform = platform.into_platform()?;
        Ok(self.platform_overrides.get(&platform))
    }

    /// Resolves the daemon method for a platform. Falls back
    /// MAC_OSX → LINUX.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn daemon_method(&self, platform: impl IntoPlatform) -> Result<Option<DaemonMethod>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::LinuxForMacOsx, |o| o.daemon_method))
    }

    /// Resolves the run-as user for a platform. Falls back MAC_OSX → LINUX.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn user(&self, platform: impl IntoPlatform) -> Result<Option<&str>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::LinuxForMacOsx, |o| o.user.as_deref()))
    }

    /// Resolves the run-as group for a platform. Falls back MAC_OSX → LINUX.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn group(&self, platform: impl IntoPlatform) -> Result<Option<&str>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::LinuxForMacOsx, |o| o.group.as_deref()))
    }

    /// Resolves the install prefix directory for a platform. Falls back
    /// MAC_OSX → LINUX.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn prefix_dir(&self, platform: impl IntoPlatform) -> Result<Option<&str>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::LinuxForMacOsx, |o| o.prefix_dir.as_deref()))
    }

    /// Resolves the log-directory override for a platform. No fallback:
    /// macOS does not inherit Linux's directory override, unlike
    /// [`prefix_dir`](Self::prefix_dir). `None` means the caller applies
    /// the global default.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn platform_log_dir(&self, platform: impl IntoPlatform) -> Result<Option<&str>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::None, |o| o.log_dir.as_deref()))
    }

    /// Resolves the run-directory override for a platform. No fallback,
    /// like [`platform_log_dir`](Self::platform_log_dir).
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] for an unknown string
    /// platform name.
    pub fn platform_run_dir(&self, platform: impl IntoPlatform) -> Result<Option<&str>> {
        let platform = platform.into_platform()?;
        Ok(self.resolve(platform, Fallback::None, |o| o.run_dir.as_deref()))
    }

    /// Single resolution path for every per-platform field: the platform's
    /// own value, then the declared fallback.
    fn resolve<'a, T>(
        &'a self,
        platform: Platform,
        fallback: Fallback,
        get: impl Fn(&'a PlatformOverride) -> Option<T>,
    ) -> Option<T> {
        match self.platform_overrides.get(&platform).and_then(&get) {
            Some(value) => Some(value),
            None => match fallback {
                Fallback::LinuxForMacOsx if platform == Platform::MacOsx => {
                    self.platform_overrides.get(&Platform::Linux).and_then(&get)
                }
                _ => None,
            },
        }
    }
}

/// Serde helper for humantime durations.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    /// Serializes a duration as a human-readable string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&humantime::format_duration(*duration).to_string())
    }

    /// Deserializes a duration from a human-readable string.
    ///
    /// # Errors
    /// Returns an error if the string cannot be parsed.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
