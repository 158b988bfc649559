use cargokit_core::args::{build_args, ExecutionContext, PackageKind};
use cargokit_core::options::CargoOptions;
use proptest::prelude::*;

fn gen_value() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z0-9_,-]{1,12}")
}

fn gen_options() -> impl Strategy<Value = CargoOptions> {
    (
        (gen_value(), gen_value(), gen_value(), gen_value()),
        proptest::collection::vec(any::<bool>(), 9),
    )
        .prop_map(|((features, target, target_dir, message_format), flags)| CargoOptions {
            toolchain: None,
            features,
            no_default_features: flags[0],
            target,
            release: flags[1],
            target_dir,
            out_dir: None,
            verbose: flags[2],
            very_verbose: flags[3],
            quiet: flags[4],
            message_format,
            locked: flags[5],
            frozen: flags[6],
            offline: flags[7],
            watch: flags[8],
            args: Vec::new(),
        })
}

fn gen_ctx() -> impl Strategy<Value = ExecutionContext> {
    (
        "[a-z][a-z0-9-]{0,10}",
        prop_oneof![
            Just("build"),
            Just("test"),
            Just("lint"),
            Just("run"),
            Just("nextest")
        ],
        prop_oneof![Just(PackageKind::Application), Just(PackageKind::Library)],
    )
        .prop_map(|(name, action, kind)| ExecutionContext::new(name, action, kind))
}

proptest! {
    #[test]
    fn test_no_toolchain_token_without_toolchain_or_out_dir(
        options in gen_options(),
        ctx in gen_ctx(),
    ) {
        let out = build_args(&options, &ctx).unwrap();
        prop_assert!(out.tokens.iter().all(|t| !t.starts_with('+')));
        prop_assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_out_dir_always_leads_with_nightly(
        options in gen_options(),
        ctx in gen_ctx(),
        toolchain in proptest::option::of(prop_oneof![Just("stable"), Just("beta"), Just("1.79.0")]),
    ) {
        let options = CargoOptions {
            toolchain: toolchain.map(str::to_string),
            out_dir: Some("dist".to_string()),
            ..options
        };
        let out = build_args(&options, &ctx).unwrap();
        prop_assert_eq!(out.tokens[0].as_str(), "+nightly");
        prop_assert_eq!(out.tokens.iter().filter(|t| t.starts_with('+')).count(), 1);
        prop_assert_eq!(out.warnings.len(), usize::from(options.toolchain.is_some()));
    }

    #[test]
    fn test_output_is_deterministic(options in gen_options(), ctx in gen_ctx()) {
        let first = build_args(&options, &ctx).unwrap();
        let second = build_args(&options, &ctx).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_missing_package_name_always_errors(options in gen_options(), ctx in gen_ctx()) {
        let ctx = ExecutionContext { package_name: None, ..ctx };
        prop_assert!(build_args(&options, &ctx).is_err());
    }
}
