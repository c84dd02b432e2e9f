//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tfdocs_render::{
    CollaboratorError, DocRenderer, FunctionParameter, FunctionSignature, RenderOptions, Schema,
    SchemaAttribute, SchemaBlock, SchemaMarkdown, SignatureMarkdown,
};

/// Renders required attributes as a bullet list under a `## Schema` heading.
pub struct SchemaTable;

impl SchemaMarkdown for SchemaTable {
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> Result<(), CollaboratorError> {
        writeln!(out, "## Schema\n\n### Required\n")?;
        for (name, attr) in &schema.block.attributes {
            writeln!(out, "- `{}` (String) {}", name, attr.description)?;
        }
        Ok(())
    }
}

pub struct FunctionDocs;

impl SignatureMarkdown for FunctionDocs {
    fn signature(&self, name: &str, sig: &FunctionSignature) -> Result<String, CollaboratorError> {
        let params: Vec<String> = sig
            .parameters
            .iter()
            .map(|p| format!("{} string", p.name))
            .collect();
        Ok(format!("```text\n{}({}) string\n```\n", name, params.join(", ")))
    }

    fn arguments(&self, sig: &FunctionSignature) -> Result<String, CollaboratorError> {
        Ok(sig
            .parameters
            .iter()
            .enumerate()
            .map(|(i, p)| format!("{}. `{}` (String) {}\n", i + 1, p.name, p.description))
            .collect())
    }

    fn variadic_argument(&self, sig: &FunctionSignature) -> Result<String, CollaboratorError> {
        Ok(sig
            .variadic_parameter
            .as_ref()
            .map(|p| format!("1. `{}` (Variadic, String) {}\n", p.name, p.description))
            .unwrap_or_default())
    }
}

/// Routes `tracing` output through the test harness when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn renderer(options: RenderOptions) -> DocRenderer {
    init_tracing();
    DocRenderer::new(options, SchemaTable, FunctionDocs)
}

pub fn widget_schema() -> Schema {
    Schema {
        version: 0,
        block: SchemaBlock {
            description: "Manages an `example` widget.".into(),
            attributes: [(
                "name".to_string(),
                SchemaAttribute {
                    description: "Widget name.".into(),
                    required: true,
                    ..Default::default()
                },
            )]
            .into(),
            ..Default::default()
        },
    }
}

pub fn join_signature(variadic: bool) -> FunctionSignature {
    FunctionSignature {
        description: "Joins `parts` with `sep`.".into(),
        summary: "Join strings".into(),
        parameters: vec![FunctionParameter {
            name: "sep".into(),
            description: "Separator.".into(),
            ..Default::default()
        }],
        variadic_parameter: variadic.then(|| FunctionParameter {
            name: "parts".into(),
            description: "Strings to join.".into(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
