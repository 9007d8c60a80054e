// Allow unwrap/expect in tests for clear failure messages.
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # lanzar-core
//!
//! Configuration model for the Lanzar cross-platform launcher generator.
//!
//! Given a declarative description of a Java application (entry class,
//! memory settings, argument templates, daemon behavior), this crate
//! resolves a complete per-platform launch specification for the script
//! renderers to consume:
//!
//! - [`LaunchConfig`] — global defaults plus the per-platform override map,
//!   with read-only resolution queries
//! - [`PlatformOverride`] — the per-platform field bag
//! - [`Platform`], [`LauncherType`], [`WorkingDirMode`], [`DaemonMethod`] —
//!   the enumerated vocabulary of the configuration format
//!
//! Resolution is side-effect-free and total over valid input: queries
//! return `Ok(None)` for unconfigured values, and only an unknown string
//! platform name is an error. Four fields fall back MAC_OSX → LINUX when
//! macOS leaves them unset; the directory overrides deliberately do not
//! (see [`Fallback`]).
//!
//! ## Example
//!
//! ```rust
//! use lanzar_core::{DaemonMethod, LaunchConfig, LauncherType, Platform};
//!
//! let config = LaunchConfig::new(
//!     "hello-server",
//!     "com.example",
//!     "com.example.Main",
//!     LauncherType::Daemon,
//! );
//!
//! // Built-in seeds: Linux daemonizes with nohup under /opt, and macOS
//! // inherits the Linux values until it gets its own override.
//! assert_eq!(config.daemon_method(Platform::Linux)?, Some(DaemonMethod::Nohup));
//! assert_eq!(config.daemon_method("MAC_OSX")?, Some(DaemonMethod::Nohup));
//! # Ok::<(), lanzar_core::LauncherError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod overrides;
pub mod platform;
#[cfg(test)]
mod tests;
pub mod types;

pub use config::{Fallback, LaunchConfig, default_platform_overrides};
pub use error::{LauncherError, Result};
pub use overrides::PlatformOverride;
pub use platform::{IntoPlatform, Platform};
pub use types::{DaemonMethod, LauncherType, WorkingDirMode};
