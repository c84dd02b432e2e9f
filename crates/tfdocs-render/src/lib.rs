//! # tfdocs-render - Reference page rendering for plugin schemas
//!
//! `tfdocs-render` turns a provider schema or a function signature, plus a few
//! optional side files, into a Markdown reference page by executing a template
//! against a typed context.
//!
//! ## Core Concepts
//!
//! - [`DocRenderer`]: entry point; owns the [`RenderOptions`] and the Markdown
//!   collaborators and renders one page per call
//! - [`ProviderTemplate`], [`ResourceTemplate`], [`FunctionTemplate`],
//!   [`DocTemplate`]: template text per document kind, defaulting to the
//!   built-in pages in [`defaults`]
//! - [`context`]: the per-kind context records templates are executed against
//! - [`helpers`]: the closed set of functions and filters templates may call
//! - [`SchemaMarkdown`] / [`SignatureMarkdown`]: seams for the schema table and
//!   function signature renderers
//!
//! ## Rendering a Resource Page
//!
//! ```rust
//! use std::io::Write;
//! use tfdocs_render::{
//!     CollaboratorError, DocRenderer, FunctionSignature, MalformedMetadata, RenderOptions,
//!     ResourceInput, ResourceTemplate, Schema, SignatureMarkdown,
//! };
//!
//! struct NoFunctions;
//!
//! impl SignatureMarkdown for NoFunctions {
//!     fn signature(&self, _: &str, _: &FunctionSignature) -> Result<String, CollaboratorError> {
//!         Ok(String::new())
//!     }
//!     fn arguments(&self, _: &FunctionSignature) -> Result<String, CollaboratorError> {
//!         Ok(String::new())
//!     }
//!     fn variadic_argument(&self, _: &FunctionSignature) -> Result<String, CollaboratorError> {
//!         Ok(String::new())
//!     }
//! }
//!
//! let table = |_: &Schema, out: &mut dyn Write| -> Result<(), CollaboratorError> {
//!     out.write_all(b"### Required\n\n- `name` (String)\n")?;
//!     Ok(())
//! };
//!
//! let options = RenderOptions::new(".").with_malformed_metadata(MalformedMetadata::Propagate);
//! let renderer = DocRenderer::new(options, table, NoFunctions);
//!
//! let mut schema = Schema::default();
//! schema.block.description = "Manages a widget.".into();
//!
//! let page = renderer
//!     .render_resource(
//!         &ResourceTemplate::default(),
//!         &ResourceInput {
//!             name: "example_widget",
//!             type_name: "Resource",
//!             provider_name: "terraform-provider-example",
//!             rendered_provider_name: "Example",
//!             example_file: None,
//!             import_file: None,
//!             metadata_file: None,
//!             schema: &schema,
//!         },
//!     )
//!     .unwrap();
//!
//! assert!(page.contains("# example_widget (Resource)"));
//! assert!(!page.contains("## Import"));
//! ```
//!
//! ## Failure Handling
//!
//! Every failure is returned as a [`RenderError`] naming the template, file or
//! stage involved, with one exception: a metadata file that exists but cannot
//! be decoded ends the process under the default
//! [`MalformedMetadata::Abort`] policy. Choose
//! [`MalformedMetadata::Propagate`] to receive it as an error instead.

pub mod context;
pub mod defaults;
mod document;
mod error;
pub mod helpers;
mod markdown;
pub mod metadata;
mod options;
pub mod schema;
pub mod template;

// Error types
pub use error::{CollaboratorError, MetadataError, RenderError, Result};

// Entry points
pub use document::{DocRenderer, DocTemplate, FunctionTemplate, ProviderTemplate, ResourceTemplate};
pub use options::RenderOptions;

// Contexts and their inputs
pub use context::{
    provider_short_name, FunctionContext, FunctionInput, ProviderContext, ProviderInput,
    ResourceContext, ResourceInput,
};

// Collaborator seams and data model
pub use markdown::{SchemaMarkdown, SignatureMarkdown};
pub use metadata::{load_metadata, MalformedMetadata, Metadata};
pub use schema::{FunctionParameter, FunctionSignature, Schema, SchemaAttribute, SchemaBlock, SchemaBlockType};
