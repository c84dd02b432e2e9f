use std::path::Path;

use serde::Serialize;

use super::{probe, provider_short_name, render_schema};
use crate::error::Result;
use crate::markdown::SchemaMarkdown;
use crate::schema::Schema;

/// Inputs for a provider index page.
#[derive(Debug, Clone, Copy)]
pub struct ProviderInput<'a> {
    /// Full provider name, e.g. `terraform-provider-example`.
    pub provider_name: &'a str,
    /// Display name, e.g. `Example`.
    pub rendered_provider_name: &'a str,
    pub example_file: Option<&'a Path>,
    pub schema: &'a Schema,
}

/// Context for provider templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderContext {
    pub description: String,
    pub has_example: bool,
    pub example_file: String,
    pub provider_name: String,
    pub provider_short_name: String,
    pub schema_markdown: String,
    pub rendered_provider_name: String,
}

impl ProviderContext {
    /// Field names available to provider templates.
    pub const FIELDS: &'static [&'static str] = &[
        "description",
        "has_example",
        "example_file",
        "provider_name",
        "provider_short_name",
        "schema_markdown",
        "rendered_provider_name",
    ];

    /// Builds the context, rendering the schema through `schema_markdown`.
    pub fn build(input: &ProviderInput<'_>, schema_markdown: &dyn SchemaMarkdown) -> Result<Self> {
        let schema_md = render_schema(input.schema, schema_markdown)?;
        let (has_example, example_file) = probe(input.example_file);

        Ok(Self {
            description: input.schema.block.description.clone(),
            has_example,
            example_file,
            provider_name: input.provider_name.to_string(),
            provider_short_name: provider_short_name(input.provider_name).to_string(),
            schema_markdown: schema_md,
            rendered_provider_name: input.rendered_provider_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::{AttributeList, FailingSchema};
    use crate::context::SCHEMA_COMMENT;
    use crate::error::RenderError;
    use crate::schema::{SchemaAttribute, SchemaBlock};
    use std::fs;

    fn schema() -> Schema {
        Schema {
            version: 0,
            block: SchemaBlock {
                description: "The example provider.".into(),
                attributes: [("endpoint".to_string(), SchemaAttribute::default())].into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_build() {
        let dir = tempfile::tempdir().unwrap();
        let example = dir.path().join("provider.tf");
        fs::write(&example, "provider \"example\" {}").unwrap();
        let schema = schema();

        let ctx = ProviderContext::build(
            &ProviderInput {
                provider_name: "terraform-provider-example",
                rendered_provider_name: "Example",
                example_file: Some(&example),
                schema: &schema,
            },
            &AttributeList,
        )
        .unwrap();

        assert_eq!(ctx.description, "The example provider.");
        assert!(ctx.has_example);
        assert_eq!(ctx.example_file, example.display().to_string());
        assert_eq!(ctx.provider_short_name, "example");
        assert_eq!(ctx.rendered_provider_name, "Example");
        assert_eq!(
            ctx.schema_markdown,
            format!("{}\n## Schema\n- `endpoint`\n", SCHEMA_COMMENT)
        );
    }

    #[test]
    fn test_fields_match_serialized_keys() {
        let schema = schema();
        let ctx = ProviderContext::build(
            &ProviderInput {
                provider_name: "p",
                rendered_provider_name: "P",
                example_file: None,
                schema: &schema,
            },
            &AttributeList,
        )
        .unwrap();

        let value = serde_json::to_value(&ctx).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        let mut fields = ProviderContext::FIELDS.to_vec();
        keys.sort_unstable();
        fields.sort_unstable();
        assert_eq!(keys, fields);
    }

    #[test]
    fn test_schema_failure() {
        let schema = schema();
        let err = ProviderContext::build(
            &ProviderInput {
                provider_name: "p",
                rendered_provider_name: "P",
                example_file: None,
                schema: &schema,
            },
            &FailingSchema,
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::Schema(_)));
    }
}
