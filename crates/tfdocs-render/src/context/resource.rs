use std::path::Path;

use serde::Serialize;

use super::{probe, provider_short_name, render_schema};
use crate::error::Result;
use crate::markdown::SchemaMarkdown;
use crate::metadata::{MalformedMetadata, Metadata};
use crate::schema::Schema;

/// Inputs for a resource, data source or ephemeral resource page.
#[derive(Debug, Clone, Copy)]
pub struct ResourceInput<'a> {
    /// Resource name, e.g. `example_widget`.
    pub name: &'a str,
    /// Type label, e.g. `Resource` or `Data Source`.
    pub type_name: &'a str,
    pub provider_name: &'a str,
    pub rendered_provider_name: &'a str,
    pub example_file: Option<&'a Path>,
    pub import_file: Option<&'a Path>,
    pub metadata_file: Option<&'a Path>,
    pub schema: &'a Schema,
}

/// Context for resource templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceContext {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub description: String,
    pub has_example: bool,
    pub example_file: String,
    pub has_import: bool,
    pub import_file: String,
    pub provider_name: String,
    pub provider_short_name: String,
    pub schema_markdown: String,
    pub rendered_provider_name: String,
    pub has_metadata: bool,
    pub metadata_file: String,
    pub metadata: Metadata,
}

impl ResourceContext {
    /// Field names available to resource templates.
    pub const FIELDS: &'static [&'static str] = &[
        "type",
        "name",
        "description",
        "has_example",
        "example_file",
        "has_import",
        "import_file",
        "provider_name",
        "provider_short_name",
        "schema_markdown",
        "rendered_provider_name",
        "has_metadata",
        "metadata_file",
        "metadata",
    ];

    /// Builds the context, rendering the schema and loading metadata.
    ///
    /// A malformed metadata file is handled according to `policy`.
    pub fn build(
        input: &ResourceInput<'_>,
        schema_markdown: &dyn SchemaMarkdown,
        policy: MalformedMetadata,
    ) -> Result<Self> {
        let schema_md = render_schema(input.schema, schema_markdown)?;
        let (has_example, example_file) = probe(input.example_file);
        let (has_import, import_file) = probe(input.import_file);
        let (has_metadata, metadata_file) = probe(input.metadata_file);
        let metadata = match input.metadata_file {
            Some(path) => policy.load(path)?,
            None => Metadata::new(),
        };

        Ok(Self {
            type_name: input.type_name.to_string(),
            name: input.name.to_string(),
            description: input.schema.block.description.clone(),
            has_example,
            example_file,
            has_import,
            import_file,
            provider_name: input.provider_name.to_string(),
            provider_short_name: provider_short_name(input.provider_name).to_string(),
            schema_markdown: schema_md,
            rendered_provider_name: input.rendered_provider_name.to_string(),
            has_metadata,
            metadata_file,
            metadata,
        })
    }
}
