//! Enumerated launch-behavior types.
//!
//! Wire names match the external configuration format: `CONSOLE`/`DAEMON`,
//! `RETAIN`/`APP_HOME`, `NOHUP`/`JSLWIN`/`WINSW`.

use serde::{Deserialize, Serialize};

/// How the generated launcher runs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LauncherType {
    /// Foreground process attached to the invoking terminal.
    Console,
    /// Background process managed by a daemon method.
    Daemon,
}

impl LauncherType {
    /// Returns the wire name of this launcher type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Console => "CONSOLE",
            Self::Daemon => "DAEMON",
        }
    }
}

impl std::fmt::Display for LauncherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Working directory the launcher runs the application from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkingDirMode {
    /// Keep the directory the launcher was invoked from.
    Retain,
    /// Change to the application home directory before launch.
    AppHome,
}

impl WorkingDirMode {
    /// Returns the wire name of this working-directory mode.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Retain => "RETAIN",
            Self::AppHome => "APP_HOME",
        }
    }
}

impl std::fmt::Display for WorkingDirMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// OS mechanism used to background and supervise a daemon.
///
/// Only meaningful for [`LauncherType::Daemon`] launchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DaemonMethod {
    /// Detach with nohup and redirect output (Unix).
    Nohup,
    /// Java Service Launcher for Windows.
    Jslwin,
    /// WinSW service wrapper for Windows.
    Winsw,
}

impl DaemonMethod {
    /// Returns the wire name of this daemon method.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nohup => "NOHUP",
            Self::Jslwin => "JSLWIN",
            Self::Winsw => "WINSW",
        }
    }
}

impl std::fmt::Display for DaemonMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
