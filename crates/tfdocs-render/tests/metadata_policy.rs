//! The malformed-metadata policy.
//!
//! Under the default `Abort` policy a metadata file that cannot be decoded
//! ends the whole process, unlike every other failure which is returned to
//! the caller. The abort is observed by re-running this test binary as a
//! child process.

mod common;

use std::process::{Command, Stdio};

use tfdocs_render::{
    MalformedMetadata, MetadataError, RenderError, RenderOptions, ResourceInput, ResourceTemplate,
};

const CHILD_ENV: &str = "TFDOCS_RENDER_METADATA_CHILD";

fn render_with_metadata(options: RenderOptions, metadata: &std::path::Path) -> Result<String, RenderError> {
    let schema = common::widget_schema();
    common::renderer(options).render_resource(
        &ResourceTemplate::default(),
        &ResourceInput {
            name: "example_widget",
            type_name: "Resource",
            provider_name: "terraform-provider-example",
            rendered_provider_name: "Example",
            example_file: None,
            import_file: None,
            metadata_file: Some(metadata),
            schema: &schema,
        },
    )
}

#[test]
fn malformed_metadata_aborts_by_default() {
    if let Ok(path) = std::env::var(CHILD_ENV) {
        let _ = render_with_metadata(RenderOptions::new("."), std::path::Path::new(&path));
        // Reaching this point means the render returned instead of aborting.
        std::process::exit(0);
    }

    let dir = tempfile::tempdir().unwrap();
    let metadata = common::write_file(dir.path(), "metadata.json", "{\"subcategory\": ");

    let status = Command::new(std::env::current_exe().unwrap())
        .args(["malformed_metadata_aborts_by_default", "--exact", "--test-threads=1"])
        .env(CHILD_ENV, &metadata)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
}

#[test]
fn malformed_metadata_propagates_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = common::write_file(dir.path(), "metadata.json", "not json");

    let options = RenderOptions::new(".").with_malformed_metadata(MalformedMetadata::Propagate);
    let err = render_with_metadata(options, &metadata).unwrap_err();

    match err {
        RenderError::Metadata(MetadataError::Malformed { path, .. }) => assert_eq!(path, metadata),
        other => panic!("expected malformed metadata, got {other:?}"),
    }
}

#[test]
fn valid_metadata_renders_under_default_policy() {
    let dir = tempfile::tempdir().unwrap();
    let metadata = common::write_file(dir.path(), "metadata.json", r#"{"subcategory": "Compute"}"#);

    let page = render_with_metadata(RenderOptions::new("."), &metadata).unwrap();
    assert!(page.contains("# example_widget (Resource)"));
}

#[test]
fn missing_metadata_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let page = render_with_metadata(RenderOptions::new("."), &dir.path().join("metadata.json")).unwrap();
    assert!(page.contains("# example_widget (Resource)"));
}
