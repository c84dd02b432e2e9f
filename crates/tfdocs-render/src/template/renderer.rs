use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::compiler::compile;
use crate::error::Result;

/// Compiles `text` and executes it against `ctx`, writing to `out`.
///
/// Empty `text` writes nothing and succeeds.
pub fn render_template<S: Serialize, W: Write>(
    provider_dir: &Path,
    name: &str,
    text: &str,
    known: &[&str],
    ctx: &S,
    out: W,
) -> Result<()> {
    if text.is_empty() {
        tracing::debug!(template = name, "empty template, nothing to render");
        return Ok(());
    }

    let template = compile(provider_dir, name, text, known)?;
    template.execute(ctx, out)?;
    tracing::debug!(template = name, "rendered template");
    Ok(())
}

/// Like [`render_template`], capturing the output in a string.
pub fn render_string_template<S: Serialize>(
    provider_dir: &Path,
    name: &str,
    text: &str,
    known: &[&str],
    ctx: &S,
) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    render_template(provider_dir, name, text, known, ctx, &mut buf)?;
    let rendered =
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(rendered)
}
