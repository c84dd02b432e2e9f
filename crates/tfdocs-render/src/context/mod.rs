//! Render contexts, one per document kind.
//!
//! Each context is a flat, serializable record assembled fresh for a single
//! render. File-backed fields come in pairs: a `has_*` flag and the raw path.
//! The flag is true only when the path is non-empty and names an existing
//! file at the moment the context is built.
//!
//! Pre-rendered Markdown fields always start with a marker comment line so
//! downstream tooling can recognise generated regions, even when the body is
//! empty.

mod function;
mod provider;
mod resource;

use std::path::Path;

pub use function::{FunctionContext, FunctionInput};
pub use provider::{ProviderContext, ProviderInput};
pub use resource::{ResourceContext, ResourceInput};

use crate::error::{RenderError, Result};
use crate::markdown::SchemaMarkdown;
use crate::schema::Schema;

pub const SCHEMA_COMMENT: &str = "<!-- schema generated by tfplugindocs -->";
pub const SIGNATURE_COMMENT: &str = "<!-- signature generated by tfplugindocs -->";
pub const ARGUMENT_COMMENT: &str = "<!-- arguments generated by tfplugindocs -->";
pub const VARIADIC_COMMENT: &str = "<!-- variadic argument generated by tfplugindocs -->";

const PROVIDER_PREFIX: &str = "terraform-provider-";

/// Strips the conventional `terraform-provider-` prefix from a provider name.
///
/// Names without the prefix are returned unchanged.
///
/// ```rust
/// use tfdocs_render::context::provider_short_name;
///
/// assert_eq!(provider_short_name("terraform-provider-example"), "example");
/// assert_eq!(provider_short_name("example"), "example");
/// ```
pub fn provider_short_name(name: &str) -> &str {
    name.strip_prefix(PROVIDER_PREFIX).unwrap_or(name)
}

/// True when `path` is non-empty and names an existing regular file.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && path.is_file()
}

// Flag and display path for an optional side file.
fn probe(path: Option<&Path>) -> (bool, String) {
    match path {
        Some(path) => (file_exists(path), path.display().to_string()),
        None => (false, String::new()),
    }
}

fn marked(marker: &str, body: &str) -> String {
    format!("{}\n{}", marker, body)
}

fn render_schema(schema: &Schema, markdown: &dyn SchemaMarkdown) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    markdown
        .render(schema, &mut buf)
        .map_err(RenderError::Schema)?;
    let body = String::from_utf8(buf).map_err(|err| RenderError::Schema(Box::new(err)))?;
    Ok(marked(SCHEMA_COMMENT, &body))
}
