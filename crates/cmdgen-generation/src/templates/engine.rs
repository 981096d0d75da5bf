//! Template engine turning one descriptor into one generated source file
//!
//! Rendering is pure: validate the descriptor, derive identifiers and the
//! flag table, compose the fragments in file order, expand placeholders,
//! check the result for structural soundness and parse it as a Rust file.

use std::fmt;

use tracing::{debug, warn};

use crate::descriptor::{DescriptorKey, ResourceDescriptor};
use crate::error::{GenerationError, GenerationResult};
use crate::syntax;
use crate::templates::flags::FlagTable;
use crate::templates::fragments::{file_fragments, Fragment, FragmentContext};
use crate::templates::identifiers::Identifiers;

/// Result of rendering one descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Descriptor that was rendered
    pub key: DescriptorKey,
    /// Rendered content
    pub content: String,
    /// Fragments that contributed text, in file order
    pub fragments: Vec<&'static str>,
}

/// Renders descriptors into command source files
#[derive(Clone)]
pub struct TemplateEngine {
    fragments: Vec<(&'static str, Fragment)>,
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        Self {
            fragments: file_fragments(),
        }
    }

    /// Render a descriptor
    ///
    /// # Errors
    ///
    /// `InvalidDescriptor` when the descriptor breaks an invariant, `Render`
    /// when the expanded text would not be sound source.
    pub fn render(&self, descriptor: &ResourceDescriptor) -> GenerationResult<RenderResult> {
        descriptor.validate()?;
        let key = descriptor.key();

        if descriptor.skip_normal_help && !descriptor.extra_help_func {
            warn!(
                descriptor = %key,
                "skip_normal_help without extra_help_func leaves every action without help"
            );
        }

        let ids = Identifiers::derive(descriptor)?;
        let flags = FlagTable::build(descriptor);
        let ctx = FragmentContext {
            descriptor,
            ids: &ids,
            flags: &flags,
        };

        let mut template = String::new();
        let mut used = Vec::new();
        for (name, fragment) in &self.fragments {
            if let Some(text) = fragment(&ctx) {
                template.push_str(&text);
                used.push(*name);
            }
        }
        debug!(descriptor = %key, fragments = ?used, "Composed fragments");

        let content = ids
            .resolver()
            .expand(&template)
            .map_err(|message| GenerationError::render(&key, message))?;

        syntax::check(&content).map_err(|issue| {
            GenerationError::render(&key, format!("generated source is malformed: {issue}"))
        })?;
        syn::parse_file(&content).map_err(|err| {
            GenerationError::render(&key, format!("generated source does not parse: {err}"))
        })?;

        Ok(RenderResult {
            key,
            content,
            fragments: used,
        })
    }
}

impl fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fragments.iter().map(|(name, _)| *name).collect();
        f.debug_struct("TemplateEngine")
            .field("fragments", &names)
            .finish()
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
