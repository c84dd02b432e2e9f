//! Error types for the documentation rendering pipeline.
//!
//! [`RenderError`] is returned by every fallible operation in this crate. The
//! one deliberate exception is malformed metadata under the default
//! [`MalformedMetadata::Abort`](crate::MalformedMetadata::Abort) policy, which
//! ends the process instead of returning.

use std::io;
use std::path::PathBuf;

/// Boxed error produced by the schema and signature Markdown collaborators.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for template compilation, context building and rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template text is not syntactically valid.
    #[error("unable to parse template {name} {text:?}: {source}")]
    Parse {
        name: String,
        text: String,
        #[source]
        source: minijinja::Error,
    },

    /// Template references a name that is neither a helper nor a context field.
    #[error("template {name} references unknown name `{reference}`")]
    UnknownReference { name: String, reference: String },

    /// Template failed while executing against its context.
    #[error("unable to execute template {name}: {source}")]
    Execute {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// The schema Markdown renderer failed.
    #[error("unable to render schema: {0}")]
    Schema(#[source] CollaboratorError),

    /// The function signature renderer failed.
    #[error("unable to render function signature: {0}")]
    Signature(#[source] CollaboratorError),

    /// The function arguments renderer failed.
    #[error("unable to render function arguments: {0}")]
    Arguments(#[source] CollaboratorError),

    /// The variadic argument renderer failed.
    #[error("unable to render variadic argument: {0}")]
    VariadicArgument(#[source] CollaboratorError),

    /// The metadata file could not be loaded.
    #[error("unable to load metadata: {0}")]
    Metadata(#[from] MetadataError),

    /// Writing the rendered document failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised by the metadata loader.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The file exists but could not be read.
    #[error("unable to read content from metadata file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a flat string-to-string JSON object.
    #[error("failed to unmarshal metadata file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl MetadataError {
    /// Returns true for the malformed-content kind, which callers treat as fatal
    /// under the default policy.
    pub fn is_malformed(&self) -> bool {
        matches!(self, MetadataError::Malformed { .. })
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
