//! Error types for lanzar-core.
//!
//! Absence of a per-platform value is not an error: resolution queries
//! return `Ok(None)` and the caller applies its own default. Errors are
//! reserved for invalid input (unknown platform names) and invalid
//! configurations (missing required fields).

/// Result type alias for launcher-configuration operations.
pub type Result<T> = std::result::Result<T, LauncherError>;

/// Error type for launcher-configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    /// A string platform identifier does not name a known platform.
    #[error("invalid platform name: {name:?} (expected LINUX, MAC_OSX, or WINDOWS)")]
    InvalidPlatformName {
        /// The identifier that failed to parse.
        name: String,
    },

    /// A required configuration field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// Configuration is structurally invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error while reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LauncherError {
    /// Creates an invalid-platform-name error.
    #[must_use]
    pub fn invalid_platform_name(name: impl Into<String>) -> Self {
        Self::InvalidPlatformName { name: name.into() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
