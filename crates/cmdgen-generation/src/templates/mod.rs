//! Template engine module for command generation
//!
//! Provides identifier derivation, the per-action flag table, fragment
//! builders, placeholder expansion and the engine composing them.

pub mod engine;
pub mod flags;
pub mod fragments;
pub mod identifiers;
pub mod resolver;

// Re-export public API
pub use engine::{RenderResult, TemplateEngine};
pub use flags::{container_flag, FlagTable, SCOPE_ID_FLAG};
pub use fragments::{file_fragments, Fragment, FragmentContext};
pub use identifiers::{Identifiers, ENV_PREFIX};
pub use resolver::PlaceholderResolver;
