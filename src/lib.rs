//! Lanzar: cross-platform launcher generator for Java applications.
//!
//! This facade re-exports the configuration core. The script renderers,
//! file-layout writer, and CLI build on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use lanzar::prelude::*;
//!
//! let config = LaunchConfig::new(
//!     "hello-server",
//!     "com.example",
//!     "com.example.Main",
//!     LauncherType::Daemon,
//! );
//! assert_eq!(config.working_dir_mode(), WorkingDirMode::AppHome);
//! ```

pub use lanzar_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use lanzar_core::{
        DaemonMethod, IntoPlatform, LaunchConfig, LauncherError, LauncherType, Platform,
        PlatformOverride, WorkingDirMode,
    };
}
