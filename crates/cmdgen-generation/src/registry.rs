//! Ordered registry of descriptors grouped by package
//!
//! Entries keep their declaration order; generation walks them in exactly
//! that order on every run.

use std::collections::HashMap;

use tracing::debug;

use crate::descriptor::{Action, DescriptorKey, ResourceDescriptor};
use crate::error::{GenerationError, GenerationResult};

/// Descriptors belonging to one output package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// Package name; output lands in `{name}cmd`
    pub name: String,
    /// Descriptors in declaration order
    pub descriptors: Vec<ResourceDescriptor>,
}

/// Validated, read-only set of descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    packages: Vec<PackageEntry>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Validate and wrap an ordered list of packages
    pub fn new(packages: Vec<PackageEntry>) -> GenerationResult<Self> {
        let mut seen_packages: Vec<&str> = Vec::with_capacity(packages.len());
        let mut seen_keys: HashMap<DescriptorKey, &str> = HashMap::new();

        for package in &packages {
            validate_package_name(&package.name)?;
            if seen_packages.contains(&package.name.as_str()) {
                return Err(GenerationError::InvalidPackage {
                    package: package.name.clone(),
                    reason: "package is declared twice".to_string(),
                });
            }
            seen_packages.push(&package.name);

            for descriptor in &package.descriptors {
                descriptor.validate()?;

                let key = descriptor.key();
                if let Some(first) = seen_keys.get(&key) {
                    return Err(GenerationError::DuplicateDescriptor {
                        key,
                        first: (*first).to_string(),
                        second: package.name.clone(),
                    });
                }
                seen_keys.insert(key, &package.name);
            }
        }

        debug!(
            "Registry built with {} packages and {} descriptors",
            packages.len(),
            seen_keys.len()
        );

        Ok(Self { packages })
    }

    /// Packages in declaration order
    pub fn packages(&self) -> &[PackageEntry] {
        &self.packages
    }

    /// Every (package, descriptor) pair in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResourceDescriptor)> + '_ {
        self.packages.iter().flat_map(|package| {
            package
                .descriptors
                .iter()
                .map(move |descriptor| (package.name.as_str(), descriptor))
        })
    }

    /// Total number of descriptors
    pub fn len(&self) -> usize {
        self.packages.iter().map(|p| p.descriptors.len()).sum()
    }

    /// Whether the registry holds no descriptors
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates packages before validation
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    packages: Vec<PackageEntry>,
}

impl RegistryBuilder {
    /// Append a package and its descriptors
    pub fn package(
        mut self,
        name: impl Into<String>,
        descriptors: impl IntoIterator<Item = ResourceDescriptor>,
    ) -> Self {
        self.packages.push(PackageEntry {
            name: name.into(),
            descriptors: descriptors.into_iter().collect(),
        });
        self
    }

    /// Validate and produce the registry
    pub fn build(self) -> GenerationResult<Registry> {
        Registry::new(self.packages)
    }
}

fn validate_package_name(name: &str) -> GenerationResult<()> {
    let reason = if name.is_empty() {
        "package name is empty"
    } else if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        "package name may only contain lowercase letters, digits and underscores"
    } else {
        return Ok(());
    };

    Err(GenerationError::InvalidPackage {
        package: name.to_string(),
        reason: reason.to_string(),
    })
}

/// The compiled-in command configuration
pub fn builtin() -> GenerationResult<Registry> {
    Registry::builder()
        .package(
            "accounts",
            [
                ResourceDescriptor {
                    std_actions: vec![Action::Read, Action::Delete, Action::List],
                    custom_action_flags: true,
                    extra_command_vars: true,
                    extra_synopsis_func: true,
                    extra_actions: true,
                    extra_flags_func: true,
                    extra_help_func: true,
                    abstract_type: true,
                    extra_flag_handling_func: true,
                    container: "AuthMethod".to_string(),
                    has_id: true,
                    has_name: true,
                    has_description: true,
                    container_required_actions: vec![Action::List],
                    extra_versioned_actions: strings(&["change-password", "set-password"]),
                    ..ResourceDescriptor::new("account", "api::accounts")
                },
                ResourceDescriptor {
                    std_actions: vec![Action::Create, Action::Update],
                    custom_action_flags: true,
                    sub_action_prefix: "password".to_string(),
                    extra_command_vars: true,
                    extra_synopsis_func: true,
                    skip_normal_help: true,
                    extra_help_func: true,
                    extra_flags_func: true,
                    extra_flag_handling_func: true,
                    has_id: true,
                    has_name: true,
                    container: "AuthMethod".to_string(),
                    container_required_actions: vec![Action::Create],
                    has_description: true,
                    versioned_actions: vec![Action::Update],
                    ..ResourceDescriptor::new("account", "api::accounts")
                },
            ],
        )
        .package(
            "groups",
            [ResourceDescriptor {
                std_actions: vec![
                    Action::Create,
                    Action::Read,
                    Action::Update,
                    Action::Delete,
                    Action::List,
                ],
                custom_action_flags: true,
                extra_command_vars: true,
                extra_synopsis_func: true,
                extra_actions: true,
                extra_flags_func: true,
                extra_help_func: true,
                extra_flag_handling_func: true,
                has_id: true,
                container: "Scope".to_string(),
                container_required_actions: vec![Action::Create, Action::List],
                has_name: true,
                has_description: true,
                has_recursive_listing: true,
                versioned_actions: vec![Action::Update],
                extra_versioned_actions: strings(&["add-members", "remove-members", "set-members"]),
                ..ResourceDescriptor::new("group", "api::groups")
            }],
        )
        .package(
            "targets",
            [
                ResourceDescriptor {
                    std_actions: vec![Action::Read, Action::Delete, Action::List],
                    custom_action_flags: true,
                    extra_command_vars: true,
                    extra_synopsis_func: true,
                    extra_actions: true,
                    extra_flags_func: true,
                    extra_help_func: true,
                    example_cli_output: true,
                    abstract_type: true,
                    extra_flag_handling_func: true,
                    has_name: true,
                    has_description: true,
                    has_recursive_listing: true,
                    container: "Scope".to_string(),
                    container_required_actions: vec![Action::List],
                    extra_versioned_actions: strings(&[
                        "add-host-sets",
                        "remove-host-sets",
                        "set-host-sets",
                    ]),
                    extra_actions_output: true,
                    ..ResourceDescriptor::new("target", "api::targets")
                },
                ResourceDescriptor {
                    std_actions: vec![Action::Create, Action::Update],
                    custom_action_flags: true,
                    sub_action_prefix: "tcp".to_string(),
                    extra_command_vars: true,
                    extra_synopsis_func: true,
                    skip_normal_help: true,
                    extra_help_func: true,
                    extra_flags_func: true,
                    extra_flag_handling_func: true,
                    has_id: true,
                    has_name: true,
                    container: "Scope".to_string(),
                    container_required_actions: vec![Action::Create],
                    has_description: true,
                    versioned_actions: vec![Action::Update],
                    ..ResourceDescriptor::new("target", "api::targets")
                },
            ],
        )
        .build()
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}
