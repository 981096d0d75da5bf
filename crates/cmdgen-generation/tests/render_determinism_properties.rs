//! Property-based tests for command rendering
//!
//! Rendering must be a pure function of the descriptor, every toggle must be
//! honored independently, and the output must always be structurally sound.

use cmdgen_generation::descriptor::{Action, ResourceDescriptor};
use cmdgen_generation::syntax;
use cmdgen_generation::TemplateEngine;
use proptest::prelude::*;

/// Strategy for resource types, optionally hyphenated
fn resource_type_strategy() -> impl Strategy<Value = String> {
    "[a-z]{3,8}(-[a-z]{3,6})?".prop_filter("`Self` is reserved", |rt| rt != "self")
}

/// Strategy for generating valid descriptors
fn descriptor_strategy() -> impl Strategy<Value = ResourceDescriptor> {
    (
        resource_type_strategy(),
        "([a-z]{3,6})?",
        proptest::sample::subsequence(Action::ALL.to_vec(), 0..=5),
        any::<[bool; 16]>(),
        prop_oneof![
            Just(""),
            Just("Scope"),
            Just("AuthMethod"),
            Just("HostCatalog")
        ],
    )
        .prop_flat_map(|(rt, prefix, actions, toggles, container)| {
            let n = actions.len();
            (
                Just((rt, prefix, actions.clone(), toggles, container)),
                proptest::sample::subsequence(actions.clone(), 0..=n),
                proptest::sample::subsequence(actions, 0..=n),
            )
        })
        .prop_map(
            |((rt, prefix, actions, toggles, container), required, versioned)| {
                let package_path = format!("api::{}_api", rt.replace('-', "_"));
                ResourceDescriptor {
                    sub_action_prefix: prefix,
                    std_actions: actions,
                    custom_action_flags: toggles[0],
                    extra_command_vars: toggles[1],
                    extra_synopsis_func: toggles[2],
                    extra_actions: toggles[3],
                    extra_flags_func: toggles[4],
                    skip_normal_help: toggles[5],
                    extra_help_func: toggles[6],
                    example_cli_output: toggles[7],
                    abstract_type: toggles[8],
                    extra_flag_handling_func: toggles[9],
                    has_id: toggles[10],
                    has_name: toggles[11],
                    has_description: toggles[12],
                    has_scope_name: toggles[13],
                    has_recursive_listing: toggles[14],
                    extra_actions_output: toggles[15],
                    container: container.to_string(),
                    container_required_actions: required,
                    versioned_actions: versioned,
                    ..ResourceDescriptor::new(rt, package_path)
                }
            },
        )
}

proptest! {
    /// Property: rendering the same descriptor twice, with the same or a
    /// fresh engine, produces identical output
    #[test]
    fn prop_render_is_deterministic(descriptor in descriptor_strategy()) {
        let engine = TemplateEngine::new();
        let first = engine.render(&descriptor).unwrap();
        let second = engine.render(&descriptor).unwrap();
        let fresh = TemplateEngine::new().render(&descriptor.clone()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, fresh);
    }

    /// Property: every valid descriptor renders into balanced source with
    /// no placeholder left behind
    #[test]
    fn prop_render_output_is_sound(descriptor in descriptor_strategy()) {
        let result = TemplateEngine::new().render(&descriptor).unwrap();

        prop_assert_eq!(result.content.find("${"), None);
        prop_assert!(syntax::check(&result.content).is_ok());
        prop_assert_eq!(result.key, descriptor.key());
    }

    /// Property: each toggle decides the presence of its own fragment
    #[test]
    fn prop_toggles_select_fragments(descriptor in descriptor_strategy()) {
        let result = TemplateEngine::new().render(&descriptor).unwrap();
        let has = |name: &str| result.fragments.contains(&name);

        prop_assert_eq!(has("id_guard"), descriptor.has_id);
        prop_assert_eq!(has("name_option"), descriptor.has_name);
        prop_assert_eq!(has("description_option"), descriptor.has_description);
        prop_assert_eq!(has("recursive_option"), descriptor.has_recursive_listing);
        prop_assert_eq!(has("scope_name_option"), descriptor.has_scope_name);
        prop_assert_eq!(has("extra_command_vars"), descriptor.extra_command_vars);
        prop_assert_eq!(has("extra_flags"), descriptor.extra_flags_func);
        prop_assert_eq!(has("extra_actions"), descriptor.extra_actions);
        prop_assert_eq!(has("example_output"), descriptor.example_cli_output);
        prop_assert_eq!(
            has("container_guards"),
            !descriptor.container_required_actions.is_empty()
        );
        prop_assert_eq!(has("versioning"), !descriptor.versioned_actions.is_empty());
    }

    /// Property: the flag map has exactly one entry per standard action, in
    /// declaration order
    #[test]
    fn prop_flag_map_covers_std_actions(descriptor in descriptor_strategy()) {
        let content = TemplateEngine::new().render(&descriptor).unwrap().content;

        let inserted: Vec<&str> = content
            .lines()
            .filter_map(|line| line.trim().strip_prefix("map.insert(\""))
            .filter_map(|rest| rest.split('"').next())
            .collect();
        let expected: Vec<&str> = descriptor.std_actions.iter().map(Action::as_str).collect();

        prop_assert_eq!(inserted, expected);
    }
}
