#![warn(missing_docs)]

//! Descriptor-driven generator for CLI resource subcommands
//!
//! A static registry of resource descriptors is rendered, one descriptor at a
//! time, into Rust source files implementing the standard create, read,
//! update, delete and list subcommands of each resource. Optional behavior is
//! switched on per descriptor and composed from independent fragments.

pub mod config;
pub mod descriptor;
pub mod driver;
pub mod error;
pub mod naming;
pub mod output_writer;
pub mod registry;
pub mod syntax;
pub mod templates;

// Re-export public API
pub use config::{GeneratorConfig, BASE_PATH_ENV};
pub use descriptor::{Action, DescriptorKey, ResourceDescriptor};
pub use driver::{GenerationDriver, GenerationReport};
pub use error::{ErrorKind, GenerationError, GenerationResult, ParseActionError};
pub use naming::{
    has_action, is_rust_identifier, kebab_case, pascal_case, shouty_snake_case, snake_case,
    title_case, CaseTransform,
};
pub use output_writer::{FileWriteResult, OutputWriter, WriteStatus, GENERATED_SUFFIX};
pub use registry::{builtin, PackageEntry, Registry, RegistryBuilder};
pub use syntax::SyntaxIssue;
pub use templates::{FlagTable, RenderResult, TemplateEngine};
