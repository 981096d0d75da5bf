//! Fragment builders for generated command files
//!
//! Each builder inspects the descriptor and returns a piece of source text,
//! or `None` when its feature is switched off. Text may reference
//! `${placeholder}` names from [`Identifiers::resolver`]; the engine expands
//! them after composition. [`file_fragments`] fixes the order in which pieces
//! are concatenated.
//!
//! [`Identifiers::resolver`]: crate::templates::identifiers::Identifiers::resolver

use std::fmt::Write;

use crate::descriptor::{Action, ResourceDescriptor};
use crate::templates::flags::FlagTable;
use crate::templates::identifiers::Identifiers;

/// Everything a fragment may look at
#[derive(Debug, Clone, Copy)]
pub struct FragmentContext<'a> {
    /// Descriptor being rendered
    pub descriptor: &'a ResourceDescriptor,
    /// Names derived from the descriptor
    pub ids: &'a Identifiers,
    /// Per-action flag table
    pub flags: &'a FlagTable,
}

/// A fragment builder
pub type Fragment = fn(&FragmentContext<'_>) -> Option<String>;

/// Every fragment of a generated file, in output order
pub fn file_fragments() -> Vec<(&'static str, Fragment)> {
    vec![
        ("header", header),
        ("imports", imports),
        ("command_struct", command_struct),
        ("extra_command_vars", extra_command_vars),
        ("command_struct_end", command_struct_end),
        ("flags_map", flags_map),
        ("custom_action_flags", custom_action_flags),
        ("flags_map_end", flags_map_end),
        ("synopsis", synopsis),
        ("extra_synopsis", extra_synopsis),
        ("synopsis_end", synopsis_end),
        ("standard_help", standard_help),
        ("help_default", help_default),
        ("help_end", help_end),
        ("autocomplete", autocomplete),
        ("flags_builder", flags_builder),
        ("extra_flags", extra_flags),
        ("flags_builder_end", flags_builder_end),
        ("run", run),
        ("example_output", example_output),
        ("help_short_circuit", help_short_circuit),
        ("plural", plural),
        ("parse_flags", parse_flags),
        ("id_guard", id_guard),
        ("container_guards", container_guards),
        ("client", client),
        ("name_option", name_option),
        ("description_option", description_option),
        ("recursive_option", recursive_option),
        ("scope_name_option", scope_name_option),
        ("versioning", versioning),
        ("extra_flag_handling", extra_flag_handling),
        ("dispatch", dispatch),
        ("extra_actions", extra_actions),
        ("error_report", error_report),
        ("extra_actions_output", extra_actions_output),
        ("action_output", action_output),
        ("item_output", item_output),
    ]
}

fn when(enabled: bool, text: &str) -> Option<String> {
    enabled.then(|| text.to_string())
}

// ---------------------------------------------------------------------------
// File preamble and command struct
// ---------------------------------------------------------------------------

fn header(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"// Code generated by cmdgen; DO NOT EDIT.
// Descriptor: ${key} (API module ${package_path})

#![allow(unused_imports, unused_mut, unused_variables, clippy::all)]

"#
        .to_string(),
    )
}

fn imports(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"use std::collections::BTreeMap;

${api_import}

use super::*;
use crate::api;
use crate::base;
use crate::cli;
use crate::cli::Command as _;
use crate::common;
use crate::complete;

"#
        .to_string(),
    )
}

fn command_struct(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"#[derive(Debug, Default)]
pub struct ${command} {
    pub base: base::Command,

    pub func: String,

    // Used for delete operations
    existed: bool,
    // Used in some output
    plural: String,
"#
        .to_string(),
    )
}

fn extra_command_vars(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_command_vars,
        "\n    extra: ${extra_vars},\n",
    )
}

fn command_struct_end(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some("}\n\n".to_string())
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

fn flags_map(ctx: &FragmentContext<'_>) -> Option<String> {
    let mut out = String::from(
        r#"impl ${command} {
    /// Flags accepted by each action
    pub fn flags_map() -> BTreeMap<&'static str, Vec<&'static str>> {
        let mut map: BTreeMap<&'static str, Vec<&'static str>> = BTreeMap::new();
"#,
    );

    for (action, flags) in ctx.flags.entries() {
        let quoted: Vec<String> = flags.iter().map(|flag| format!("\"{flag}\"")).collect();
        let _ = writeln!(
            out,
            "        map.insert(\"{action}\", vec![{}]);",
            quoted.join(", ")
        );
    }

    Some(out)
}

fn custom_action_flags(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.custom_action_flags,
        r#"
        for &(action, flags) in Self::extra_actions_flags() {
            map.entry(action).or_default().extend_from_slice(flags);
        }
"#,
    )
}

fn flags_map_end(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some("\n        map\n    }\n}\n\n".to_string())
}

fn flags_builder(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"    fn flags(&self) -> base::FlagSets {
        let flags_map = Self::flags_map();
        let action_flags = flags_map.get(self.func.as_str()).cloned().unwrap_or_default();
        if action_flags.is_empty() {
            return self.base.flag_set(&[]);
        }

        let mut set = self.base.flag_set(&[
            base::FlagSetKind::Http,
            base::FlagSetKind::Client,
            base::FlagSetKind::OutputFormat,
        ]);
        let f = set.new_flag_set("Command Options");
        common::populate_common_flags(f, "${label}", &action_flags);
"#
        .to_string(),
    )
}

fn extra_flags(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_flags_func,
        "\n        self.extra_flags(f);\n",
    )
}

fn flags_builder_end(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some("\n        set\n    }\n\n".to_string())
}

// ---------------------------------------------------------------------------
// Synopsis and help
// ---------------------------------------------------------------------------

fn synopsis(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"impl cli::Command for ${command} {
    fn synopsis(&self) -> String {
"#
        .to_string(),
    )
}

fn extra_synopsis(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_synopsis_func,
        r#"        if let Some(extra) = self.extra_synopsis().filter(|extra| !extra.is_empty()) {
            return extra;
        }
"#,
    )
}

fn synopsis_end(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        common::synopsis(&self.func, "${resource_type}")
    }

    fn help(&self) -> String {
        let help_map = common::help_map("${resource_type}");
        match self.func.as_str() {
"#
        .to_string(),
    )
}

fn standard_help(ctx: &FragmentContext<'_>) -> Option<String> {
    let descriptor = ctx.descriptor;
    if descriptor.skip_normal_help || descriptor.std_actions.is_empty() {
        return None;
    }

    let arms: Vec<String> = descriptor
        .std_actions
        .iter()
        .map(|action| format!("\"{action}\""))
        .collect();

    Some(format!(
        r#"            {} => {{
                let usage = help_map
                    .get(self.func.as_str())
                    .map(|usage| usage())
                    .unwrap_or_default();
                usage + &self.flags().help()
            }}
"#,
        arms.join(" | ")
    ))
}

fn help_default(ctx: &FragmentContext<'_>) -> Option<String> {
    if ctx.descriptor.extra_help_func {
        Some("            _ => self.extra_help(&help_map),\n".to_string())
    } else {
        Some("            _ => String::new(),\n".to_string())
    }
}

fn help_end(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some("        }\n    }\n\n".to_string())
}

fn autocomplete(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"    fn autocomplete_args(&self) -> complete::Predictor {
        complete::Predictor::Anything
    }

    fn autocomplete_flags(&self) -> complete::Flags {
        self.flags().completions()
    }

"#
        .to_string(),
    )
}

// ---------------------------------------------------------------------------
// Run: preparation
// ---------------------------------------------------------------------------

fn example_output(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.example_cli_output,
        r#"        if std::env::var_os("${example_env}").is_some_and(|value| !value.is_empty()) {
            self.base.ui.output(&example_output());
            return 0;
        }

"#,
    )
}

fn run(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some("    fn run(&mut self, args: &[String]) -> i32 {\n".to_string())
}

fn help_short_circuit(ctx: &FragmentContext<'_>) -> Option<String> {
    let mut out = String::from(
        "        match self.func.as_str() {\n            \"\" => return cli::RUN_RESULT_HELP,\n",
    );
    if ctx.descriptor.abstract_type {
        out.push_str("            \"create\" | \"update\" => return cli::RUN_RESULT_HELP,\n");
    }
    out.push_str("            _ => {}\n        }\n\n");
    Some(out)
}

fn plural(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        self.plural = match self.func.as_str() {
            "list" => "${plural}",
            _ => "${label}",
        }
        .to_string();

"#
        .to_string(),
    )
}

fn parse_flags(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        let mut flags = self.flags();
        if let Err(err) = flags.parse(&mut self.base, args) {
            self.base.ui.error(&err.to_string());
            return 1;
        }

        let flags_map = Self::flags_map();
        let action_flags = flags_map.get(self.func.as_str()).cloned().unwrap_or_default();

        let mut version: u32 = 0;

"#
        .to_string(),
    )
}

fn id_guard(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.has_id,
        r#"        if action_flags.contains(&"id") && self.base.flag_id.is_empty() {
            self.base.ui.error("ID is required but not passed in via -id");
            return 1;
        }

"#,
    )
}

fn container_guards(ctx: &FragmentContext<'_>) -> Option<String> {
    let required = &ctx.descriptor.container_required_actions;
    if required.is_empty() {
        return None;
    }

    let mut out = String::from("        match self.func.as_str() {\n");
    for action in required {
        let _ = write!(
            out,
            r#"            "{action}" => {{
                if self.base.${{container_field}}.is_empty() {{
                    self.base
                        .ui
                        .error("${{container_label}} must be passed in via -${{container_flag}} or ${{container_env}}");
                    return 1;
                }}
            }}
"#
        );
    }
    out.push_str("            _ => {}\n        }\n\n");
    Some(out)
}

fn client(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        let mut opts: Vec<${api}::Option> = Vec::new();

        let client = match self.base.client() {
            Ok(client) => client,
            Err(err) => {
                self.base.ui.error(&format!("Error creating API client: {err}"));
                return 2;
            }
        };
        let ${client} = ${api}::Client::new(client);

"#
        .to_string(),
    )
}

fn name_option(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.has_name,
        r#"        match self.base.flag_name.as_str() {
            "" => {}
            "null" => opts.push(${api}::default_name()),
            name => opts.push(${api}::with_name(name)),
        }

"#,
    )
}

fn description_option(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.has_description,
        r#"        match self.base.flag_description.as_str() {
            "" => {}
            "null" => opts.push(${api}::default_description()),
            description => opts.push(${api}::with_description(description)),
        }

"#,
    )
}

fn recursive_option(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.has_recursive_listing,
        r#"        if self.base.flag_recursive {
            opts.push(${api}::with_recursive(true));
        }

"#,
    )
}

fn scope_name_option(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.has_scope_name,
        r#"        if !self.base.flag_scope_name.is_empty() {
            opts.push(${api}::with_scope_name(&self.base.flag_scope_name));
        }

"#,
    )
}

fn versioning(ctx: &FragmentContext<'_>) -> Option<String> {
    let descriptor = ctx.descriptor;
    let actions: Vec<String> = descriptor
        .versioned_actions
        .iter()
        .map(ToString::to_string)
        .chain(descriptor.extra_versioned_actions.iter().cloned())
        .collect();
    if actions.is_empty() {
        return None;
    }

    let mut out = String::from("        match self.func.as_str() {\n");
    for action in actions {
        let _ = write!(
            out,
            r#"            "{action}" => match self.base.flag_version {{
                0 => opts.push(${{api}}::with_automatic_versioning(true)),
                explicit => version = explicit,
            }},
"#
        );
    }
    out.push_str("            _ => {}\n        }\n\n");
    Some(out)
}

fn extra_flag_handling(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_flag_handling_func,
        r#"        let ret = self.extra_flag_handling(&mut opts);
        if ret != 0 {
            return ret;
        }

"#,
    )
}

// ---------------------------------------------------------------------------
// Run: dispatch and output
// ---------------------------------------------------------------------------

fn dispatch(ctx: &FragmentContext<'_>) -> Option<String> {
    let descriptor = ctx.descriptor;
    let mut out = String::from(
        "        self.existed = true;\n        let mut result: Option<api::GenericResult> = None;\n",
    );
    if descriptor.has_std_action(Action::List) {
        out.push_str("        let mut list_result: Option<api::GenericListResult> = None;\n");
    }
    out.push_str("\n        let outcome: Result<(), api::Error> = match self.func.as_str() {\n");

    for action in &descriptor.std_actions {
        out.push_str(&dispatch_arm(descriptor, *action));
    }

    out.push_str("            _ => Ok(()),\n        };\n\n");
    Some(out)
}

fn dispatch_arm(descriptor: &ResourceDescriptor, action: Action) -> String {
    match action {
        Action::Create => {
            let prefix_arg = if descriptor.sub_action_prefix.is_empty() {
                ""
            } else {
                "\"${prefix}\", "
            };
            format!(
                r#"            "create" => ${{client}}
                .create(&self.base.context, {prefix_arg}&self.base.${{container_field}}, &opts)
                .map(|item| result = Some(item)),
"#
            )
        }
        Action::Read => r#"            "read" => ${client}
                .read(&self.base.context, &self.base.flag_id, &opts)
                .map(|item| result = Some(item)),
"#
        .to_string(),
        Action::Update => r#"            "update" => ${client}
                .update(&self.base.context, &self.base.flag_id, version, &opts)
                .map(|item| result = Some(item)),
"#
        .to_string(),
        Action::Delete => r#"            "delete" => match ${client}.delete(&self.base.context, &self.base.flag_id, &opts) {
                Ok(_) => Ok(()),
                Err(err) if err.response_status() == Some(404) => {
                    self.existed = false;
                    Ok(())
                }
                Err(err) => Err(err),
            },
"#
        .to_string(),
        Action::List => r#"            "list" => ${client}
                .list(&self.base.context, &self.base.${container_field}, &opts)
                .map(|items| list_result = Some(items)),
"#
        .to_string(),
    }
}

fn extra_actions(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_actions,
        r#"        let outcome = self.execute_extra_actions(outcome, &mut result, &${client}, version, &opts);

"#,
    )
}

fn error_report(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        if let Err(err) = outcome {
            if let Some(api_err) = err.as_server_error() {
                self.base.ui.error(&format!(
                    "Error from controller when performing {} on {}: {}",
                    self.func,
                    self.plural,
                    base::print_api_error(api_err)
                ));
                return 1;
            }
            self.base
                .ui
                .error(&format!("Error trying to {} {}: {}", self.func, self.plural, err));
            return 2;
        }

"#
        .to_string(),
    )
}

fn extra_actions_output(ctx: &FragmentContext<'_>) -> Option<String> {
    when(
        ctx.descriptor.extra_actions_output,
        r#"        match self.print_custom_action_output() {
            Ok(true) => return 0,
            Ok(false) => {}
            Err(err) => {
                self.base.ui.error(&err.to_string());
                return 1;
            }
        }

"#,
    )
}

const DELETE_OUTPUT: &str = r#"            "delete" => {
                match base::format(&self.base.ui) {
                    base::Format::Json => {
                        self.base
                            .ui
                            .output(&format!("{{ \"existed\": {} }}", self.existed));
                    }
                    base::Format::Table => {
                        let mut output = String::from("The delete operation completed successfully");
                        if self.existed {
                            output.push('.');
                        } else {
                            output.push_str(", however the resource did not exist at the time.");
                        }
                        self.base.ui.output(&output);
                    }
                }
                return 0;
            }
"#;

const LIST_OUTPUT: &str = r#"            "list" => {
                let listed_items: Vec<${api}::${item}> = list_result
                    .map(|listed| listed.into_items())
                    .unwrap_or_default();
                match base::format(&self.base.ui) {
                    base::Format::Json => {
                        if listed_items.is_empty() {
                            self.base.ui.output("null");
                        } else {
                            match base::JsonFormatter.format(&listed_items) {
                                Ok(bytes) => self.base.ui.output(&String::from_utf8_lossy(&bytes)),
                                Err(err) => {
                                    self.base.ui.error(&format!("Error formatting as JSON: {err}"));
                                    return 1;
                                }
                            }
                        }
                    }
                    base::Format::Table => {
                        let table = self.print_list_table(&listed_items);
                        self.base.ui.output(&table);
                    }
                }
                return 0;
            }
"#;

fn action_output(ctx: &FragmentContext<'_>) -> Option<String> {
    let descriptor = ctx.descriptor;
    let delete = descriptor.has_std_action(Action::Delete);
    let list = descriptor.has_std_action(Action::List);
    if !delete && !list {
        return None;
    }

    let mut out = String::from("        match self.func.as_str() {\n");
    for action in &descriptor.std_actions {
        match action {
            Action::Delete => out.push_str(DELETE_OUTPUT),
            Action::List => out.push_str(LIST_OUTPUT),
            _ => {}
        }
    }
    out.push_str("            _ => {}\n        }\n\n");
    Some(out)
}

fn item_output(_ctx: &FragmentContext<'_>) -> Option<String> {
    Some(
        r#"        let Some(item) = result.map(|result| result.into_item::<${api}::${item}>()) else {
            return 0;
        };
        match base::format(&self.base.ui) {
            base::Format::Table => self.base.ui.output(&print_item_table(&item)),
            base::Format::Json => match base::JsonFormatter.format(&item) {
                Ok(bytes) => self.base.ui.output(&String::from_utf8_lossy(&bytes)),
                Err(err) => {
                    self.base.ui.error(&format!("Error formatting as JSON: {err}"));
                    return 1;
                }
            },
        }

        0
    }
}

"#
        .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(descriptor: &ResourceDescriptor, fragment: Fragment) -> Option<String> {
        let ids = Identifiers::derive(descriptor).unwrap();
        let flags = FlagTable::build(descriptor);
        let ctx = FragmentContext {
            descriptor,
            ids: &ids,
            flags: &flags,
        };
        fragment(&ctx).map(|text| ids.resolver().expand(&text).unwrap())
    }

    fn widget() -> ResourceDescriptor {
        ResourceDescriptor {
            std_actions: vec![Action::Read, Action::List],
            has_id: true,
            container: "Scope".to_string(),
            container_required_actions: vec![Action::List],
            ..ResourceDescriptor::new("widget", "api::widgets")
        }
    }

    #[test]
    fn test_fragment_names_are_unique() {
        let fragments = file_fragments();
        for (i, (name, _)) in fragments.iter().enumerate() {
            assert!(
                !fragments[..i].iter().any(|(other, _)| other == name),
                "{name} listed twice"
            );
        }
    }

    #[test]
    fn test_flag_gated_fragments_follow_their_flag() {
        let gated: [(Fragment, fn(&mut ResourceDescriptor)); 13] = [
            (extra_command_vars, |d| d.extra_command_vars = true),
            (custom_action_flags, |d| d.custom_action_flags = true),
            (extra_flags, |d| d.extra_flags_func = true),
            (extra_synopsis, |d| d.extra_synopsis_func = true),
            (example_output, |d| d.example_cli_output = true),
            (id_guard, |d| d.has_id = true),
            (name_option, |d| d.has_name = true),
            (description_option, |d| d.has_description = true),
            (recursive_option, |d| d.has_recursive_listing = true),
            (scope_name_option, |d| d.has_scope_name = true),
            (extra_flag_handling, |d| d.extra_flag_handling_func = true),
            (extra_actions, |d| d.extra_actions = true),
            (extra_actions_output, |d| d.extra_actions_output = true),
        ];

        for (fragment, enable) in gated {
            let mut descriptor = ResourceDescriptor {
                std_actions: vec![Action::Read],
                ..ResourceDescriptor::new("widget", "api::widgets")
            };
            assert!(render(&descriptor, fragment).is_none());
            enable(&mut descriptor);
            assert!(render(&descriptor, fragment).is_some());
        }
    }

    #[test]
    fn test_flags_map_lists_table_entries() {
        let text = render(&widget(), flags_map).unwrap();
        assert!(text.contains("map.insert(\"read\", vec![\"id\"]);"));
        assert!(text.contains("map.insert(\"list\", vec![\"scope-id\", \"recursive\"]);"));
        assert!(text.find("\"read\"").unwrap() < text.find("\"list\"").unwrap());
    }

    #[test]
    fn test_extra_flags_calls_out() {
        let mut descriptor = widget();
        descriptor.extra_flags_func = true;
        let text = render(&descriptor, extra_flags).unwrap();
        assert_eq!(text.trim(), "self.extra_flags(f);");
    }

    #[test]
    fn test_abstract_type_short_circuits_create_and_update() {
        let mut descriptor = widget();
        let text = render(&descriptor, help_short_circuit).unwrap();
        assert!(text.contains("\"\" => return cli::RUN_RESULT_HELP"));
        assert!(!text.contains("\"create\""));

        descriptor.abstract_type = true;
        let text = render(&descriptor, help_short_circuit).unwrap();
        assert!(text.contains("\"create\" | \"update\" => return cli::RUN_RESULT_HELP"));
    }

    #[test]
    fn test_standard_help_skipped_when_requested() {
        let mut descriptor = widget();
        let text = render(&descriptor, standard_help).unwrap();
        assert!(text.contains("\"read\" | \"list\" =>"));

        descriptor.skip_normal_help = true;
        assert!(render(&descriptor, standard_help).is_none());
    }

    #[test]
    fn test_help_default_without_extra_help_is_empty() {
        let mut descriptor = widget();
        let text = render(&descriptor, help_default).unwrap();
        assert_eq!(text.trim(), "_ => String::new(),");

        descriptor.extra_help_func = true;
        let text = render(&descriptor, help_default).unwrap();
        assert_eq!(text.trim(), "_ => self.extra_help(&help_map),");
    }

    #[test]
    fn test_container_guard_per_required_action() {
        let mut descriptor = widget();
        let text = render(&descriptor, container_guards).unwrap();
        assert!(text.contains("\"list\" => {"));
        assert!(!text.contains("\"read\" => {"));
        assert!(text.contains("self.base.flag_scope_id.is_empty()"));
        assert!(text.contains("Scope ID must be passed in via -scope-id or BOUNDARY_SCOPE_ID"));

        descriptor.container_required_actions.clear();
        assert!(render(&descriptor, container_guards).is_none());
    }

    #[test]
    fn test_container_guard_for_custom_container() {
        let descriptor = ResourceDescriptor {
            std_actions: vec![Action::Create],
            container: "AuthMethod".to_string(),
            container_required_actions: vec![Action::Create],
            ..ResourceDescriptor::new("account", "api::accounts")
        };
        let text = render(&descriptor, container_guards).unwrap();
        assert!(text.contains("self.base.flag_auth_method_id.is_empty()"));
        assert!(text.contains(
            "Auth Method ID must be passed in via -auth-method-id or BOUNDARY_AUTH_METHOD_ID"
        ));
    }

    #[test]
    fn test_versioning_arm_per_action() {
        let descriptor = ResourceDescriptor {
            std_actions: vec![Action::Update],
            versioned_actions: vec![Action::Update],
            extra_versioned_actions: vec!["add-members".to_string()],
            ..ResourceDescriptor::new("group", "api::groups")
        };
        let text = render(&descriptor, versioning).unwrap();
        assert!(text.contains("\"update\" => match self.base.flag_version {"));
        assert!(text.contains("\"add-members\" => match self.base.flag_version {"));
        assert!(text.contains("0 => opts.push(groups::with_automatic_versioning(true)),"));
        assert!(text.contains("explicit => version = explicit,"));

        assert!(render(&widget(), versioning).is_none());
    }

    #[test]
    fn test_delete_not_found_is_success() {
        let descriptor = ResourceDescriptor {
            std_actions: vec![Action::Delete],
            has_id: true,
            ..ResourceDescriptor::new("widget", "api::widgets")
        };
        let text = render(&descriptor, dispatch).unwrap();
        assert!(text.contains("Err(err) if err.response_status() == Some(404) => {"));
        assert!(text.contains("self.existed = false;"));
        assert!(!text.contains("list_result"));

        let output = render(&descriptor, action_output).unwrap();
        assert!(output.contains("\\\"existed\\\": {}"));
        assert!(output.contains("however the resource did not exist at the time."));
    }

    #[test]
    fn test_create_passes_sub_action_prefix() {
        let descriptor = ResourceDescriptor {
            std_actions: vec![Action::Create],
            sub_action_prefix: "tcp".to_string(),
            ..ResourceDescriptor::new("target", "api::targets")
        };
        let text = render(&descriptor, dispatch).unwrap();
        assert!(text.contains(
            ".create(&self.base.context, \"tcp\", &self.base.flag_scope_id, &opts)"
        ));
    }

    #[test]
    fn test_list_output_prints_null_for_empty() {
        let text = render(&widget(), action_output).unwrap();
        assert!(text.contains("self.base.ui.output(\"null\");"));
        assert!(text.contains("let table = self.print_list_table(&listed_items);"));
        assert!(text.contains("Vec<widgets::Widget>"));
        assert!(!text.contains("\"delete\" =>"));
    }

    #[test]
    fn test_action_output_absent_without_delete_or_list() {
        let descriptor = ResourceDescriptor {
            std_actions: vec![Action::Read],
            ..ResourceDescriptor::new("widget", "api::widgets")
        };
        assert!(render(&descriptor, action_output).is_none());
    }
}
