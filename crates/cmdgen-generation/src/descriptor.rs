//! Resource descriptors: the static description of one generated command

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, GenerationResult, ParseActionError};
use crate::naming::has_action;

/// Standard action a generated command can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Create a resource inside its container
    Create,
    /// Read a resource by id
    Read,
    /// Update a resource by id
    Update,
    /// Delete a resource by id
    Delete,
    /// List resources in a container
    List,
}

impl Action {
    /// Every standard action, in canonical order
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::List,
    ];

    /// Name used on the command line and in generated match arms
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::List => "list",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ParseActionError(s.to_string()))
    }
}

/// Identity of a descriptor: resource type plus optional sub-action prefix.
///
/// Displays the same way the output file stem is built
/// (`tcp_target`, `account`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DescriptorKey {
    /// Resource type
    pub resource_type: String,
    /// Sub-action prefix, empty when unset
    pub sub_action_prefix: String,
}

impl DescriptorKey {
    /// Create a key from its parts
    pub fn new(resource_type: impl Into<String>, sub_action_prefix: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            sub_action_prefix: sub_action_prefix.into(),
        }
    }
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sub_action_prefix.is_empty() {
            f.write_str(&self.resource_type)
        } else {
            write!(f, "{}_{}", self.sub_action_prefix, self.resource_type)
        }
    }
}

/// Declarative description of one generated resource command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// The type of the resource, e.g. "target"
    pub resource_type: String,

    /// Rust path of the resource's API bindings, e.g. `api::targets`
    pub package_path: String,

    /// Standard actions (with standard flags) used by this resource
    pub std_actions: Vec<Action>,

    /// Distinguishes sub-type commands sharing a resource type
    /// (e.g. "targets update tcp")
    pub sub_action_prefix: String,

    /// Merge externally supplied per-action flags into the flag map
    pub custom_action_flags: bool,

    /// Embed a struct of extra command variables
    pub extra_command_vars: bool,

    /// Consult an extra synopsis routine before the common one
    pub extra_synopsis_func: bool,

    /// Route results through an extra-actions executor
    pub extra_actions: bool,

    /// Call out to an extra flag-augmentation routine
    pub extra_flags_func: bool,

    /// Skip the standard help arms (sub-type commands with custom help only)
    pub skip_normal_help: bool,

    /// Chain unmatched help requests to an extra help routine
    pub extra_help_func: bool,

    /// Print canned example output when the example env var is set
    pub example_cli_output: bool,

    /// Create and update only exist as sub-type commands
    pub abstract_type: bool,

    /// Call out to an extra flag-handling routine before dispatch
    pub extra_flag_handling_func: bool,

    /// Require a non-empty id for actions taking `-id`.
    ///
    /// Commands that accept name/scope lookups instead may leave this off in
    /// favor of custom logic.
    pub has_id: bool,

    /// Add name options
    pub has_name: bool,

    /// Add description options
    pub has_description: bool,

    /// Add scope name options
    pub has_scope_name: bool,

    /// Add recursive listing options
    pub has_recursive_listing: bool,

    /// Call a custom output routine after extra actions
    pub extra_actions_output: bool,

    /// Required parent container (e.g. "Scope", "AuthMethod"); empty for none
    pub container: String,

    /// Actions that require a non-empty container id
    pub container_required_actions: Vec<Action>,

    /// Standard actions that take an optimistic-concurrency version
    pub versioned_actions: Vec<Action>,

    /// Resource-specific actions that take a version, e.g. "add-members"
    pub extra_versioned_actions: Vec<String>,
}

impl ResourceDescriptor {
    /// Start a descriptor with everything else switched off
    pub fn new(resource_type: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            package_path: package_path.into(),
            ..Self::default()
        }
    }

    /// Identity of this descriptor within a registry
    pub fn key(&self) -> DescriptorKey {
        DescriptorKey::new(&self.resource_type, &self.sub_action_prefix)
    }

    /// Whether this descriptor lists `action` among its standard actions
    pub fn has_std_action(&self, action: Action) -> bool {
        has_action(&self.std_actions, &action)
    }

    /// Whether `action` takes a version argument
    pub fn is_versioned(&self, action: Action) -> bool {
        has_action(&self.versioned_actions, &action)
    }

    /// Container name with the scope default applied
    pub fn effective_container(&self) -> &str {
        if self.container.is_empty() {
            "Scope"
        } else {
            &self.container
        }
    }

    /// Check the descriptor invariants
    pub fn validate(&self) -> GenerationResult<()> {
        let key = self.key();

        if self.resource_type.is_empty() {
            return Err(GenerationError::invalid(&key, "resource type is empty"));
        }

        for (i, action) in self.std_actions.iter().enumerate() {
            if has_action(&self.std_actions[..i], action) {
                return Err(GenerationError::invalid(
                    &key,
                    format!("standard action {action} is listed twice"),
                ));
            }
        }

        for (what, actions) in [
            ("container-required", &self.container_required_actions),
            ("versioned", &self.versioned_actions),
        ] {
            for (i, action) in actions.iter().enumerate() {
                if has_action(&actions[..i], action) {
                    return Err(GenerationError::invalid(
                        &key,
                        format!("{what} action {action} is listed twice"),
                    ));
                }
            }
        }

        if let Some(action) = self
            .container_required_actions
            .iter()
            .find(|action| !self.has_std_action(**action))
        {
            return Err(GenerationError::invalid(
                &key,
                format!("container-required action {action} is not a standard action of this descriptor"),
            ));
        }

        if let Some(action) = self
            .versioned_actions
            .iter()
            .find(|action| !self.has_std_action(**action))
        {
            return Err(GenerationError::invalid(
                &key,
                format!("versioned action {action} is not a standard action of this descriptor"),
            ));
        }

        for (i, name) in self.extra_versioned_actions.iter().enumerate() {
            if !is_action_name(name) {
                return Err(GenerationError::invalid(
                    &key,
                    format!("extra versioned action {name:?} is not a lowercase kebab-case name"),
                ));
            }
            if name.parse::<Action>().is_ok() {
                return Err(GenerationError::invalid(
                    &key,
                    format!("extra versioned action {name} is a standard action; use versioned_actions"),
                ));
            }
            if self.extra_versioned_actions[..i].contains(name) {
                return Err(GenerationError::invalid(
                    &key,
                    format!("extra versioned action {name} is listed twice"),
                ));
            }
        }

        Ok(())
    }
}

fn is_action_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

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
    fn test_action_round_trips_through_str() {
        for action in Action::ALL {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
        let err = "change-password".parse::<Action>().unwrap_err();
        assert_eq!(err, ParseActionError("change-password".to_string()));
        assert_eq!(err.to_string(), "unknown standard action: change-password");
    }

    #[test]
    fn test_key_display() {
        assert_eq!(DescriptorKey::new("target", "").to_string(), "target");
        assert_eq!(DescriptorKey::new("target", "tcp").to_string(), "tcp_target");
    }

    #[test]
    fn test_valid_descriptor() {
        assert!(widget().validate().is_ok());
    }

    #[test]
    fn test_empty_resource_type_rejected() {
        let descriptor = ResourceDescriptor::new("", "api::widgets");
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_duplicate_std_action_rejected() {
        let mut descriptor = widget();
        descriptor.std_actions.push(Action::Read);
        let err = descriptor.validate().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_container_required_must_be_std_action() {
        let mut descriptor = widget();
        descriptor.container_required_actions.push(Action::Create);
        let err = descriptor.validate().unwrap_err();
        assert!(err.to_string().contains("container-required action create"));
    }

    #[test]
    fn test_versioned_must_be_std_action() {
        let mut descriptor = widget();
        descriptor.versioned_actions.push(Action::Update);
        let err = descriptor.validate().unwrap_err();
        assert!(err.to_string().contains("versioned action update"));
    }

    #[test]
    fn test_duplicate_container_required_action_rejected() {
        let mut descriptor = widget();
        descriptor.container_required_actions = vec![Action::List, Action::List];
        let err = descriptor.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err
            .to_string()
            .contains("container-required action list is listed twice"));
    }

    #[test]
    fn test_duplicate_versioned_action_rejected() {
        let mut descriptor = widget();
        descriptor.versioned_actions = vec![Action::Read, Action::List, Action::Read];
        let err = descriptor.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("versioned action read is listed twice"));
    }

    #[test]
    fn test_extra_versioned_actions_checked() {
        let mut descriptor = widget();
        descriptor.extra_versioned_actions = vec!["add-members".to_string()];
        assert!(descriptor.validate().is_ok());

        descriptor.extra_versioned_actions = vec!["update".to_string()];
        assert!(descriptor.validate().is_err());

        descriptor.extra_versioned_actions = vec!["Add Members".to_string()];
        assert!(descriptor.validate().is_err());

        descriptor.extra_versioned_actions =
            vec!["set-members".to_string(), "set-members".to_string()];
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_effective_container_defaults_to_scope() {
        let mut descriptor = widget();
        descriptor.container.clear();
        assert_eq!(descriptor.effective_container(), "Scope");
    }

    #[test]
    fn test_deserialize_from_json() {
        let descriptor: ResourceDescriptor = serde_json::from_str(
            r#"{
                "resource_type": "widget",
                "package_path": "api::widgets",
                "std_actions": ["read", "list"],
                "has_id": true,
                "container": "Scope",
                "container_required_actions": ["list"]
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor, widget());
    }
}
