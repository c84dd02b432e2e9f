use std::path::Path;

use serde::Serialize;

use super::{marked, probe, provider_short_name, ARGUMENT_COMMENT, SIGNATURE_COMMENT, VARIADIC_COMMENT};
use crate::error::{RenderError, Result};
use crate::markdown::SignatureMarkdown;
use crate::metadata::{MalformedMetadata, Metadata};
use crate::schema::FunctionSignature;

/// Inputs for a provider-defined function page.
#[derive(Debug, Clone, Copy)]
pub struct FunctionInput<'a> {
    pub name: &'a str,
    /// Type label, usually `function`.
    pub type_name: &'a str,
    pub provider_name: &'a str,
    pub rendered_provider_name: &'a str,
    pub example_file: Option<&'a Path>,
    pub metadata_file: Option<&'a Path>,
    pub signature: &'a FunctionSignature,
}

/// Context for function templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionContext {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub description: String,
    pub summary: String,
    pub has_example: bool,
    pub example_file: String,
    pub provider_name: String,
    pub provider_short_name: String,
    pub function_signature_markdown: String,
    pub function_arguments_markdown: String,
    pub has_variadic: bool,
    pub function_variadic_argument_markdown: String,
    pub rendered_provider_name: String,
    pub has_metadata: bool,
    pub metadata_file: String,
    pub metadata: Metadata,
}

impl FunctionContext {
    /// Field names available to function templates.
    pub const FIELDS: &'static [&'static str] = &[
        "type",
        "name",
        "description",
        "summary",
        "has_example",
        "example_file",
        "provider_name",
        "provider_short_name",
        "function_signature_markdown",
        "function_arguments_markdown",
        "has_variadic",
        "function_variadic_argument_markdown",
        "rendered_provider_name",
        "has_metadata",
        "metadata_file",
        "metadata",
    ];

    /// Builds the context from the three signature fragments and the metadata file.
    ///
    /// `has_variadic` reflects the signature, not any file on disk.
    pub fn build(
        input: &FunctionInput<'_>,
        markdown: &dyn SignatureMarkdown,
        policy: MalformedMetadata,
    ) -> Result<Self> {
        let signature = input.signature;
        let signature_md = markdown
            .signature(input.name, signature)
            .map_err(RenderError::Signature)?;
        let arguments_md = markdown
            .arguments(signature)
            .map_err(RenderError::Arguments)?;
        let variadic_md = markdown
            .variadic_argument(signature)
            .map_err(RenderError::VariadicArgument)?;

        let (has_example, example_file) = probe(input.example_file);
        let (has_metadata, metadata_file) = probe(input.metadata_file);
        let metadata = match input.metadata_file {
            Some(path) => policy.load(path)?,
            None => Metadata::new(),
        };

        Ok(Self {
            type_name: input.type_name.to_string(),
            name: input.name.to_string(),
            description: signature.description.clone(),
            summary: signature.summary.clone(),
            has_example,
            example_file,
            provider_name: input.provider_name.to_string(),
            provider_short_name: provider_short_name(input.provider_name).to_string(),
            function_signature_markdown: marked(SIGNATURE_COMMENT, &signature_md),
            function_arguments_markdown: marked(ARGUMENT_COMMENT, &arguments_md),
            has_variadic: signature.has_variadic(),
            function_variadic_argument_markdown: marked(VARIADIC_COMMENT, &variadic_md),
            rendered_provider_name: input.rendered_provider_name.to_string(),
            has_metadata,
            metadata_file,
            metadata,
        })
    }
}
