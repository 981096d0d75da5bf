//! Error types for command generation

use std::path::PathBuf;

use thiserror::Error;

use crate::descriptor::DescriptorKey;

/// A string that names none of the standard actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown standard action: {0}")]
pub struct ParseActionError(pub String);

/// Errors that can occur while generating commands
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A descriptor violates one of its invariants
    #[error("Invalid descriptor {key}: {reason}")]
    InvalidDescriptor {
        /// Offending descriptor
        key: DescriptorKey,
        /// What is wrong with it
        reason: String,
    },

    /// A registry package name cannot be used as an output directory
    #[error("Invalid package {package:?}: {reason}")]
    InvalidPackage {
        /// Package name as configured
        package: String,
        /// What is wrong with it
        reason: String,
    },

    /// Two descriptors would be written to the same file
    #[error("Duplicate descriptor {key} in packages {first} and {second}")]
    DuplicateDescriptor {
        /// Colliding key
        key: DescriptorKey,
        /// Package holding the first occurrence
        first: String,
        /// Package holding the second occurrence
        second: String,
    },

    /// The descriptor could not be expanded into valid source text
    #[error("Render error for {key}: {message}")]
    Render {
        /// Descriptor being rendered
        key: DescriptorKey,
        /// Error message
        message: String,
    },

    /// The base path or output path could not be resolved
    #[error("Path error for {}: {message}", path.display())]
    Path {
        /// Path that failed to resolve
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// Directory creation or file persistence failed
    #[error("Write failed for {}: {source}", path.display())]
    Write {
        /// File or directory being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Failure while processing one registry entry
    #[error("Failed to generate {package}/{key}: {source}")]
    Descriptor {
        /// Package of the failing descriptor
        package: String,
        /// Failing descriptor
        key: DescriptorKey,
        /// Underlying failure
        #[source]
        source: Box<GenerationError>,
    },
}

/// Broad classification of a [`GenerationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Static configuration is inconsistent
    Config,
    /// Rendering failed
    Render,
    /// Path resolution failed
    Path,
    /// Writing failed
    Write,
}

impl GenerationError {
    /// Classify this error, looking through driver context
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDescriptor { .. }
            | Self::InvalidPackage { .. }
            | Self::DuplicateDescriptor { .. } => ErrorKind::Config,
            Self::Render { .. } => ErrorKind::Render,
            Self::Path { .. } => ErrorKind::Path,
            Self::Write { .. } => ErrorKind::Write,
            Self::Descriptor { source, .. } => source.kind(),
        }
    }

    pub(crate) fn render(key: &DescriptorKey, message: impl Into<String>) -> Self {
        Self::Render {
            key: key.clone(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid(key: &DescriptorKey, reason: impl Into<String>) -> Self {
        Self::InvalidDescriptor {
            key: key.clone(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_looks_through_descriptor_context() {
        let key = DescriptorKey::new("target", "tcp");
        let err = GenerationError::Descriptor {
            package: "targets".to_string(),
            key: key.clone(),
            source: Box::new(GenerationError::render(&key, "unbalanced braces")),
        };

        assert_eq!(err.kind(), ErrorKind::Render);
        assert_eq!(
            err.to_string(),
            "Failed to generate targets/tcp_target: Render error for tcp_target: unbalanced braces"
        );
    }

    #[test]
    fn test_write_error_display() {
        let err = GenerationError::Write {
            path: PathBuf::from("/tmp/out/accountscmd"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(err.to_string().contains("/tmp/out/accountscmd"));
    }
}
