//! Generator configuration read from the environment

use std::path::PathBuf;

/// Environment variable holding the output base path
pub const BASE_PATH_ENV: &str = "CLI_GEN_BASEPATH";

/// Settings for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory under which package directories are created. Empty means
    /// the current working directory.
    pub base_path: PathBuf,
}

impl GeneratorConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// An unset variable and an empty one both yield an empty base path.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_path = lookup(BASE_PATH_ENV).map(PathBuf::from).unwrap_or_default();
        Self { base_path }
    }
}
