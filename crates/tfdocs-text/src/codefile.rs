use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while including a file in a template.
#[derive(Debug, thiserror::Error)]
pub enum CodeFileError {
    /// The file could not be read.
    #[error("unable to read content from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads `path` and wraps its trimmed contents in a fenced code block tagged
/// with `format`.
///
/// A file with no content beyond whitespace yields an empty string rather than
/// an empty fence. Bytes that are not valid UTF-8 are replaced with U+FFFD.
///
/// ```rust,ignore
/// let block = tfdocs_text::code_file("shell", "import.sh")?;
/// // ```shell
/// // terraform import example_widget.main 12345
/// // ```
/// ```
pub fn code_file(format: &str, path: impl AsRef<Path>) -> Result<String, CodeFileError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CodeFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let content = content.trim();
    if content.is_empty() {
        return Ok(String::new());
    }

    Ok(format!("```{}\n{}\n```", format, content))
}
