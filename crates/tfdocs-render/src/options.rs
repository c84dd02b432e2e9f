//! Render options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::metadata::MalformedMetadata;

/// Options shared by every render performed through a [`DocRenderer`](crate::DocRenderer).
///
/// Options can be built in code or loaded from YAML:
///
/// ```rust
/// use tfdocs_render::{MalformedMetadata, RenderOptions};
///
/// let options = RenderOptions::from_yaml(r#"
/// provider_dir: ./terraform-provider-example
/// malformed_metadata: propagate
/// "#).unwrap();
///
/// assert_eq!(options.malformed_metadata(), MalformedMetadata::Propagate);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Base directory for relative paths given to `codefile` and `tffile`.
    provider_dir: PathBuf,
    /// Policy for metadata files that exist but cannot be decoded.
    malformed_metadata: MalformedMetadata,
}

impl RenderOptions {
    pub fn new(provider_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider_dir: provider_dir.into(),
            malformed_metadata: MalformedMetadata::default(),
        }
    }

    /// Parses options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn with_malformed_metadata(mut self, policy: MalformedMetadata) -> Self {
        self.malformed_metadata = policy;
        self
    }

    pub fn provider_dir(&self) -> &Path {
        &self.provider_dir
    }

    pub fn malformed_metadata(&self) -> MalformedMetadata {
        self.malformed_metadata
    }
}
