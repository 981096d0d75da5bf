//! Output writer for generated command files
//!
//! Each descriptor lands at `{base}/{package}cmd/{[prefix_]resource_type}.gen.rs`.
//! Directories are created on demand and existing files are overwritten
//! unconditionally; the previous contents are only read to report whether
//! anything changed.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::descriptor::ResourceDescriptor;
use crate::error::{GenerationError, GenerationResult};

/// Suffix of every generated file
pub const GENERATED_SUFFIX: &str = ".gen.rs";

/// Suffix appended to the package name to form its output directory
pub const PACKAGE_DIR_SUFFIX: &str = "cmd";

/// What a write did to the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteStatus {
    /// The file did not exist before
    Created,
    /// The file existed with different contents
    Updated,
    /// The file already held exactly these contents
    Unchanged,
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// Result of writing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteResult {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes_written: usize,
    /// Effect of the write
    pub status: WriteStatus,
}

/// Writes rendered command files below a base directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    base_path: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `base_path`; an empty path means the
    /// current working directory
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Configured base path, as given
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Absolute destination of the file for `descriptor` in `package`
    pub fn destination(
        &self,
        package: &str,
        descriptor: &ResourceDescriptor,
    ) -> GenerationResult<PathBuf> {
        check_component(package, "package name")?;
        let stem = descriptor.key().to_string();
        check_component(&stem, "file name")?;

        let base = if self.base_path.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.base_path.as_path()
        };
        let base = std::path::absolute(base).map_err(|e| GenerationError::Path {
            path: self.base_path.clone(),
            message: format!("cannot make base path absolute: {e}"),
        })?;

        let path = base
            .join(format!("{package}{PACKAGE_DIR_SUFFIX}"))
            .join(format!("{stem}{GENERATED_SUFFIX}"));
        debug!(path = %path.display(), "Resolved output path");
        Ok(path)
    }

    /// Write `content` as the file for `descriptor` in `package`
    pub fn write(
        &self,
        package: &str,
        descriptor: &ResourceDescriptor,
        content: &str,
    ) -> GenerationResult<FileWriteResult> {
        let path = self.destination(package, descriptor)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| GenerationError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let status = match fs::read(&path) {
            Ok(previous) if previous == content.as_bytes() => WriteStatus::Unchanged,
            Ok(_) => WriteStatus::Updated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => WriteStatus::Created,
            Err(source) => return Err(GenerationError::Write { path, source }),
        };

        fs::write(&path, content).map_err(|source| GenerationError::Write {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), %status, "Wrote command file");
        Ok(FileWriteResult {
            path,
            bytes_written: content.len(),
            status,
        })
    }
}

fn check_component(value: &str, what: &str) -> GenerationResult<()> {
    let message = if value.is_empty() {
        Some(format!("{what} is empty"))
    } else if value.contains(['/', '\\']) {
        Some(format!("{what} {value:?} contains a path separator"))
    } else if value == "." || value == ".." {
        Some(format!("{what} {value:?} is not a plain file name"))
    } else {
        None
    };

    match message {
        Some(message) => Err(GenerationError::Path {
            path: PathBuf::from(value),
            message,
        }),
        None => Ok(()),
    }
}
