//! Property tests for resolution queries.

use proptest::prelude::*;

use crate::config::LaunchConfig;
use crate::overrides::PlatformOverride;
use crate::platform::Platform;
use crate::types::{DaemonMethod, LauncherType};

fn arb_platform() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

fn arb_override() -> impl Strategy<Value = PlatformOverride> {
    (
        prop::option::of(prop::sample::select(vec![
            DaemonMethod::Nohup,
            DaemonMethod::Jslwin,
            DaemonMethod::Winsw,
        ])),
        prop::option::of("[a-z]{1,8}"),
        prop::option::of("[a-z]{1,8}"),
        prop::option::of("/[a-z]{1,8}"),
        prop::option::of("/[a-z]{1,8}"),
        prop::option::of("/[a-z]{1,8}"),
    )
        .prop_map(
            |(daemon_method, user, group, prefix_dir, run_dir, log_dir)| PlatformOverride {
                daemon_method,
                user,
                group,
                prefix_dir,
                run_dir,
                log_dir,
            },
        )
}

fn arb_config() -> impl Strategy<Value = LaunchConfig> {
    prop::collection::btree_map(arb_platform(), arb_override(), 0..=3).prop_map(|overrides| {
        let mut config = LaunchConfig::new(
            "prop-daemon",
            "com.example",
            "com.example.Main",
            LauncherType::Daemon,
        );
        config.platform_overrides = overrides;
        config
    })
}

proptest! {
    /// Repeated queries over unchanged state return identical results.
    #[test]
    fn prop_queries_idempotent(config in arb_config(), platform in arb_platform()) {
        prop_assert_eq!(
            config.daemon_method(platform).unwrap(),
            config.daemon_method(platform).unwrap()
        );
        prop_assert_eq!(config.user(platform).unwrap(), config.user(platform).unwrap());
        prop_assert_eq!(config.group(platform).unwrap(), config.group(platform).unwrap());
        prop_assert_eq!(
            config.prefix_dir(platform).unwrap(),
            config.prefix_dir(platform).unwrap()
        );
        prop_assert_eq!(
            config.platform_log_dir(platform).unwrap(),
            config.platform_log_dir(platform).unwrap()
        );
        prop_assert_eq!(
            config.platform_run_dir(platform).unwrap(),
            config.platform_run_dir(platform).unwrap()
        );
    }

    /// The typed-enum and string-name forms of every query agree.
    #[test]
    fn prop_enum_and_string_forms_agree(config in arb_config(), platform in arb_platform()) {
        let name = platform.name();
        prop_assert_eq!(
            config.daemon_method(name).unwrap(),
            config.daemon_method(platform).unwrap()
        );
        prop_assert_eq!(config.user(name).unwrap(), config.user(platform).unwrap());
        prop_assert_eq!(config.group(name).unwrap(), config.group(platform).unwrap());
        prop_assert_eq!(
            config.prefix_dir(name).unwrap(),
            config.prefix_dir(platform).unwrap()
        );
        prop_assert_eq!(
            config.platform_log_dir(name).unwrap(),
            config.platform_log_dir(platform).unwrap()
        );
        prop_assert_eq!(
            config.platform_run_dir(name).unwrap(),
            config.platform_run_dir(platform).unwrap()
        );
    }

    /// Removing a platform's override entry yields None for every query on
    /// that platform, except macOS, which may still read Linux's values.
    #[test]
    fn prop_fallback_only_for_macos(mut config in arb_config(), platform in arb_platform()) {
        config.platform_overrides.remove(&platform);
        if platform != Platform::MacOsx {
            prop_assert!(config.daemon_method(platform).unwrap().is_none());
            prop_assert!(config.user(platform).unwrap().is_none());
            prop_assert!(config.group(platform).unwrap().is_none());
            prop_assert!(config.prefix_dir(platform).unwrap().is_none());
        }
        // The directory overrides never fall back, for any platform.
        prop_assert!(config.platform_log_dir(platform).unwrap().is_none());
        prop_assert!(config.platform_run_dir(platform).unwrap().is_none());
    }

    /// Platform names parse regardless of casing.
    #[test]
    fn prop_platform_parse_case_insensitive(
        platform in arb_platform(),
        mask in prop::collection::vec(any::<bool>(), 8),
    ) {
        let scrambled: String = platform
            .name()
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| {
                if *upper {
                    c.to_ascii_uppercase()
                } else {
                    c.to_ascii_lowercase()
                }
            })
            .collect();
        prop_assert_eq!(scrambled.parse::<Platform>().unwrap(), platform);
    }

    /// Strings that are not platform names always fail to parse.
    #[test]
    fn prop_unknown_platform_names_error(name in "[A-Z]{3,10}") {
        prop_assume!(name != "LINUX" && name != "WINDOWS");
        prop_assert!(name.parse::<Platform>().is_err());
    }
}
