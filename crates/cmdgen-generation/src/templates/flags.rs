//! Per-action flag table

use crate::descriptor::{Action, ResourceDescriptor};
use crate::naming::kebab_case;

/// Flag name of the default (scope) container
pub const SCOPE_ID_FLAG: &str = "scope-id";

/// Flags accepted by each standard action of one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTable {
    entries: Vec<(Action, Vec<String>)>,
}

impl FlagTable {
    /// Build the table in `std_actions` order
    pub fn build(descriptor: &ResourceDescriptor) -> Self {
        let container_flag = container_flag(descriptor);
        let custom_container = container_flag != SCOPE_ID_FLAG;

        let entries = descriptor
            .std_actions
            .iter()
            .map(|&action| {
                let flags: Vec<&str> = match action {
                    Action::Create => vec![container_flag.as_str(), "name", "description"],
                    Action::Read | Action::Delete => vec!["id"],
                    Action::Update if descriptor.is_versioned(Action::Update) => {
                        vec!["id", "name", "description", "version"]
                    }
                    Action::Update => vec!["id", "name", "description"],
                    Action::List if custom_container => vec![container_flag.as_str()],
                    Action::List => vec![SCOPE_ID_FLAG, "recursive"],
                };
                (action, flags.into_iter().map(str::to_string).collect())
            })
            .collect();

        Self { entries }
    }

    /// Flags of one action, if the descriptor has that action
    pub fn get(&self, action: Action) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == action)
            .map(|(_, flags)| flags.as_slice())
    }

    /// Entries in `std_actions` order
    pub fn entries(&self) -> &[(Action, Vec<String>)] {
        &self.entries
    }
}

/// Flag carrying the container id: `scope-id` for the scope container,
/// otherwise the kebab-cased container name with an `-id` suffix
pub fn container_flag(descriptor: &ResourceDescriptor) -> String {
    format!("{}-id", kebab_case(descriptor.effective_container()))
}
