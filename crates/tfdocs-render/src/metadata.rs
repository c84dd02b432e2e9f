//! Optional key-value metadata attached to resource and function pages.
//!
//! Metadata lives in a JSON file holding a flat object of string values:
//!
//! ```json
//! { "subcategory": "Networking", "since": "v1.4.0" }
//! ```
//!
//! A missing file is not an error and yields an empty map, as does a file with
//! no content. A file that cannot be decoded yields
//! [`MetadataError::Malformed`], which the rendering pipeline treats according
//! to its [`MalformedMetadata`] policy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::context::file_exists;
use crate::error::MetadataError;

/// Metadata key-value pairs, ordered by key.
pub type Metadata = BTreeMap<String, String>;

/// Loads the metadata file at `path`.
///
/// Returns an empty map when `path` is empty or does not name an existing file.
pub fn load_metadata(path: impl AsRef<Path>) -> Result<Metadata, MetadataError> {
    let path = path.as_ref();
    if !file_exists(path) {
        tracing::debug!(path = %path.display(), "no metadata file");
        return Ok(Metadata::new());
    }

    let content = fs::read_to_string(path).map_err(|source| MetadataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let metadata: Option<Metadata> =
        serde_json::from_str(&content).map_err(|source| MetadataError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let metadata = metadata.unwrap_or_default();
    tracing::debug!(path = %path.display(), keys = metadata.len(), "loaded metadata");
    Ok(metadata)
}

/// What to do when a metadata file exists but cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedMetadata {
    /// Log the error and terminate the process with exit status 1.
    ///
    /// This aborts the whole documentation batch on the first bad file and is
    /// the default, matching the established fail-fast behaviour.
    #[default]
    Abort,
    /// Return [`MetadataError::Malformed`] to the caller like any other error.
    Propagate,
}

impl MalformedMetadata {
    /// Loads metadata, applying this policy to a malformed file.
    pub fn load(self, path: impl AsRef<Path>) -> Result<Metadata, MetadataError> {
        match load_metadata(path) {
            Err(err) if err.is_malformed() && self == MalformedMetadata::Abort => {
                tracing::error!(error = %err, "aborting on malformed metadata");
                std::process::exit(1);
            }
            result => result,
        }
    }
}
