//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::ingest::InputMode;
use proptest::prelude::*;

fn mode_strategy() -> impl Strategy<Value = InputMode> {
    prop_oneof![Just(InputMode::Compiler), Just(InputMode::StandardJson)]
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Human),
        Just(OutputFormat::Json),
        Just(OutputFormat::Yaml)
    ]
}

fn remapping_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{0,4}", "[a-z]{0,6}", "[a-z]{1,6}/?")
        .prop_map(|(context, prefix, target)| {
            if context.is_empty() {
                format!("{prefix}={target}")
            } else {
                format!("{context}:{prefix}={target}")
            }
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of("[a-z]{1,12}"),
        prop::option::of(any::<bool>()),
        prop::option::of(mode_strategy()),
        prop::option::of(prop::collection::vec(remapping_strategy(), 0..4)),
        prop::option::of(format_strategy()),
    )
        .prop_map(
            |(base_path, ignore_missing, mode, remappings, output_format)| Config {
                base_path,
                ignore_missing,
                mode,
                remappings,
                output_format,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // A set field in the higher layer always wins; an unset one never clobbers
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.base_path, high.base_path.or(low.base_path));
        prop_assert_eq!(result.ignore_missing, high.ignore_missing.or(low.ignore_missing));
        prop_assert_eq!(result.mode, high.mode.or(low.mode));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Remapping lists are concatenated, lower layer first
    #[test]
    fn config_merge_remappings_concatenate(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        let expected: Option<Vec<String>> = match (low.remappings, high.remappings) {
            (None, None) => None,
            (Some(l), None) => Some(l),
            (None, Some(h)) => Some(h),
            (Some(mut l), Some(h)) => {
                l.extend(h);
                Some(l)
            }
        };
        prop_assert_eq!(result.remappings, expected);
    }

    // Merging an empty layer is the identity
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Generated compiler-mode configs always validate
    #[test]
    fn compiler_mode_configs_validate(config in config_strategy()) {
        let config = Config { mode: Some(InputMode::Compiler), ..config };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }

    // Configs survive a YAML round trip unchanged
    #[test]
    fn config_yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
