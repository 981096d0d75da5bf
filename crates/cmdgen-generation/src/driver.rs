//! Generation driver: renders and writes every registered descriptor
//!
//! Processing is sequential in registry order and stops at the first
//! failure. Files written before the failure stay on disk.

use tracing::{debug, info};

use crate::error::{GenerationError, GenerationResult};
use crate::output_writer::{FileWriteResult, OutputWriter, WriteStatus};
use crate::registry::Registry;
use crate::templates::TemplateEngine;

/// Files produced by a completed run, in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// One entry per descriptor
    pub files: Vec<FileWriteResult>,
}

impl GenerationReport {
    /// Number of files with the given status
    pub fn count(&self, status: WriteStatus) -> usize {
        self.files.iter().filter(|file| file.status == status).count()
    }

    /// Total bytes written
    pub fn bytes_written(&self) -> usize {
        self.files.iter().map(|file| file.bytes_written).sum()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} files ({} created, {} updated, {} unchanged)",
            self.files.len(),
            self.count(WriteStatus::Created),
            self.count(WriteStatus::Updated),
            self.count(WriteStatus::Unchanged)
        )
    }
}

/// Drives one generation run
#[derive(Debug)]
pub struct GenerationDriver {
    registry: Registry,
    engine: TemplateEngine,
    writer: OutputWriter,
}

impl GenerationDriver {
    /// Create a driver
    pub fn new(registry: Registry, engine: TemplateEngine, writer: OutputWriter) -> Self {
        Self {
            registry,
            engine,
            writer,
        }
    }

    /// Render and write every descriptor.
    ///
    /// The first failure aborts the run with a
    /// [`GenerationError::Descriptor`] naming the package and descriptor.
    pub fn run(&self) -> GenerationResult<GenerationReport> {
        info!(
            descriptors = self.registry.len(),
            base_path = %self.writer.base_path().display(),
            "Generating commands"
        );

        let mut report = GenerationReport::default();
        for (package, descriptor) in self.registry.iter() {
            let key = descriptor.key();
            debug!(package, descriptor = %key, "Rendering");

            let written = self
                .engine
                .render(descriptor)
                .and_then(|rendered| self.writer.write(package, descriptor, &rendered.content))
                .map_err(|source| GenerationError::Descriptor {
                    package: package.to_string(),
                    key,
                    source: Box::new(source),
                })?;
            report.files.push(written);
        }

        info!("Generation complete: {}", report.summary());
        Ok(report)
    }
}
