//! Names derived from a descriptor and spliced into generated source

use crate::descriptor::{DescriptorKey, ResourceDescriptor};
use crate::error::{GenerationError, GenerationResult};
use crate::naming::{is_rust_identifier, pascal_case, shouty_snake_case, snake_case, title_case};
use crate::templates::flags::container_flag;
use crate::templates::resolver::PlaceholderResolver;

/// Prefix of environment variables read by generated commands
pub const ENV_PREFIX: &str = "BOUNDARY";

/// Every identifier and literal a fragment may reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    /// Descriptor identity, e.g. `tcp_target`
    pub key: DescriptorKey,
    /// Path of the resource API module
    pub package_path: String,
    /// Local name of the resource API module, e.g. `targets`
    pub api: String,
    /// Command struct, e.g. `TcpCommand`
    pub command: String,
    /// Extra command variables struct, e.g. `ExtraTcpCmdVars`
    pub extra_vars: String,
    /// Resource item type, e.g. `Target`
    pub item: String,
    /// Client binding, e.g. `target_client`
    pub client: String,
    /// User-facing resource label, e.g. `tcp-type target`
    pub label: String,
    /// User-facing plural for list output, e.g. `targets`
    pub plural: String,
    /// Container flag, e.g. `scope-id`
    pub container_flag: String,
    /// Field of the runtime command holding the container id
    pub container_field: String,
    /// Container name used in messages, e.g. `Auth Method ID`
    pub container_label: String,
    /// Environment variable that can supply the container id
    pub container_env: String,
}

impl Identifiers {
    /// Derive all names for `descriptor`, rejecting any that would not expand
    /// into valid source.
    pub fn derive(descriptor: &ResourceDescriptor) -> GenerationResult<Self> {
        let key = descriptor.key();
        let resource_type = &descriptor.resource_type;
        let prefix = &descriptor.sub_action_prefix;
        let container = descriptor.effective_container();

        for (what, value) in [
            ("resource type", resource_type.as_str()),
            ("sub-action prefix", prefix.as_str()),
            ("container", container),
        ] {
            if !is_literal_safe(value) {
                return Err(GenerationError::render(
                    &key,
                    format!("{what} {value:?} cannot be embedded in a string literal"),
                ));
            }
        }

        let Some(package_path) = canonical_path(&descriptor.package_path) else {
            return Err(GenerationError::render(
                &key,
                format!("package path {:?} is not a Rust path", descriptor.package_path),
            ));
        };

        let command_prefix = pascal_case(prefix);
        let container_snake = snake_case(container);
        let ids = Self {
            key: key.clone(),
            package_path,
            api: format!("{}s", snake_case(resource_type)),
            command: format!("{command_prefix}Command"),
            extra_vars: format!("Extra{command_prefix}CmdVars"),
            item: pascal_case(resource_type),
            client: format!("{}_client", snake_case(resource_type)),
            label: if prefix.is_empty() {
                resource_type.clone()
            } else {
                format!("{prefix}-type {resource_type}")
            },
            plural: format!("{resource_type}s"),
            container_flag: container_flag(descriptor),
            container_field: format!("flag_{container_snake}_id"),
            container_label: format!("{} ID", title_case(container)),
            container_env: format!("{ENV_PREFIX}_{}_ID", shouty_snake_case(container)),
        };

        for (what, ident) in [
            ("module alias", &ids.api),
            ("command type", &ids.command),
            ("extra variables type", &ids.extra_vars),
            ("item type", &ids.item),
            ("client binding", &ids.client),
            ("container field", &ids.container_field),
        ] {
            if !is_rust_identifier(ident) {
                return Err(GenerationError::render(
                    &key,
                    format!("derived {what} {ident:?} is not a valid identifier"),
                ));
            }
        }

        Ok(ids)
    }

    /// `use` item importing the resource API under [`Identifiers::api`]
    pub fn api_import(&self) -> String {
        let last = self.package_path.rsplit("::").next().unwrap_or_default();
        if last == self.api {
            format!("use {};", self.package_path)
        } else {
            format!("use {} as {};", self.package_path, self.api)
        }
    }

    /// Placeholder values for fragment expansion
    pub fn resolver(&self) -> PlaceholderResolver {
        let mut resolver = PlaceholderResolver::new();
        resolver.add_value("key", self.key.to_string());
        resolver.add_value("package_path", &self.package_path);
        resolver.add_value("api_import", self.api_import());
        resolver.add_value("api", &self.api);
        resolver.add_value("command", &self.command);
        resolver.add_value("extra_vars", &self.extra_vars);
        resolver.add_value("item", &self.item);
        resolver.add_value("client", &self.client);
        resolver.add_value("resource_type", &self.key.resource_type);
        resolver.add_value("prefix", &self.key.sub_action_prefix);
        resolver.add_value("label", &self.label);
        resolver.add_value("plural", &self.plural);
        resolver.add_value("container_flag", &self.container_flag);
        resolver.add_value("container_field", &self.container_field);
        resolver.add_value("container_label", &self.container_label);
        resolver.add_value("container_env", &self.container_env);
        resolver.add_value("example_env", format!("{ENV_PREFIX}_EXAMPLE_CLI_OUTPUT"));
        resolver
    }
}

fn is_literal_safe(value: &str) -> bool {
    !value.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}

/// `path` as a plain module path, normalized to `a::b::c` form.
///
/// Generic arguments are rejected. `crate`, `self` and `super` may only lead
/// the path and the final segment must be an ordinary identifier.
fn canonical_path(path: &str) -> Option<String> {
    let parsed = syn::parse_str::<syn::Path>(path).ok()?;
    let last = parsed.segments.len().checked_sub(1)?;

    let mut segments = Vec::with_capacity(parsed.segments.len());
    for (i, segment) in parsed.segments.iter().enumerate() {
        if !segment.arguments.is_none() {
            return None;
        }
        let ident = segment.ident.to_string();
        let leads = parsed.leading_colon.is_none()
            && i < last
            && match ident.as_str() {
                "crate" | "self" => i == 0,
                "super" => segments.iter().all(|prev| prev == "self" || prev == "super"),
                _ => false,
            };
        if !leads && !is_rust_identifier(&ident) {
            return None;
        }
        segments.push(ident);
    }

    let joined = segments.join("::");
    Some(match parsed.leading_colon {
        Some(_) => format!("::{joined}"),
        None => joined,
    })
}
