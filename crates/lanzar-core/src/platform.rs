//! Target platforms and platform-name handling.
//!
//! Configuration files identify platforms by case-insensitive names
//! matching `LINUX`, `MAC_OSX`, and `WINDOWS`. Resolution queries accept
//! either the typed [`Platform`] or one of those names via the
//! [`IntoPlatform`] trait; an unknown name is a hard input error, never
//! silently ignored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LauncherError, Result};

/// A target platform a launcher can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    /// Linux (shell scripts, optional systemd units).
    Linux,
    /// macOS (shell scripts, launchd).
    MacOsx,
    /// Windows (batch scripts, service wrappers).
    Windows,
}

impl Platform {
    /// All supported platforms, in canonical order.
    pub const ALL: [Self; 3] = [Self::Linux, Self::MacOsx, Self::Windows];

    /// Returns the canonical platform name as used in configuration files.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Linux => "LINUX",
            Self::MacOsx => "MAC_OSX",
            Self::Windows => "WINDOWS",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Platform {
    type Err = LauncherError;

    /// Parses a case-insensitive platform name.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "LINUX" => Ok(Self::Linux),
            "MAC_OSX" => Ok(Self::MacOsx),
            "WINDOWS" => Ok(Self::Windows),
            _ => Err(LauncherError::invalid_platform_name(s)),
        }
    }
}

impl Serialize for Platform {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Argument conversion for resolution queries.
///
/// Implemented for [`Platform`] itself (infallible) and for string names
/// (fails with [`LauncherError::InvalidPlatformName`] on an unknown name),
/// so both forms go through identical resolution logic.
pub trait IntoPlatform {
    /// Resolves the argument to a typed platform.
    ///
    /// # Errors
    /// Returns [`LauncherError::InvalidPlatformName`] if the argument is a
    /// string that does not name a known platform.
    fn into_platform(self) -> Result<Platform>;
}

impl IntoPlatform for Platform {
    fn into_platform(self) -> Result<Platform> {
        Ok(self)
    }
}

impl IntoPlatform for &Platform {
    fn into_platform(self) -> Result<Platform> {
        Ok(*self)
    }
}

impl IntoPlatform for &str {
    fn into_platform(self) -> Result<Platform> {
        self.parse()
    }
}

impl IntoPlatform for &String {
    fn into_platform(self) -> Result<Platform> {
        self.as_str().parse()
    }
}

impl IntoPlatform for String {
    fn into_platform(self) -> Result<Platform> {
        self.as_str().parse()
    }
}
