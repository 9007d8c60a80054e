//! Cross-cutting resolution tests.
//!
//! Per-module unit tests live next to their modules; this module holds the
//! tests that exercise the full fallback matrix across platforms and the
//! property tests for query idempotence and enum/string agreement.

mod properties;

use crate::config::LaunchConfig;
use crate::overrides::PlatformOverride;
use crate::platform::Platform;
use crate::types::LauncherType;

/// A daemon configuration with every Linux override field populated, so
/// fallback behavior is observable from macOS.
fn linux_heavy_config() -> LaunchConfig {
    let mut config = LaunchConfig::new(
        "hello-server",
        "com.example",
        "com.example.Main",
        LauncherType::Daemon,
    );
    config.short_description = "an example daemon".to_string();
    config.platforms.extend(Platform::ALL);
    let linux = config
        .platform_overrides
        .entry(Platform::Linux)
        .or_insert_with(PlatformOverride::default);
    linux.user = Some("appuser".to_string());
    linux.group = Some("appgroup".to_string());
    linux.run_dir = Some("/var/run/hello".to_string());
    linux.log_dir = Some("/var/log/hello".to_string());
    config
}
