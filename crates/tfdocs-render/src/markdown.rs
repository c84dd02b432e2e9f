//! Seams for the Markdown renderers the pipeline consumes.
//!
//! The schema table renderer and the function signature renderers live
//! outside this crate. Implement these traits to plug them in.

use std::io::Write;

use crate::error::CollaboratorError;
use crate::schema::{FunctionSignature, Schema};

/// Renders a schema as a Markdown attribute table.
pub trait SchemaMarkdown: Send + Sync {
    /// Writes the Markdown for `schema` to `out`.
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> Result<(), CollaboratorError>;
}

/// Renders the Markdown fragments of a function reference page.
pub trait SignatureMarkdown: Send + Sync {
    /// The call signature, e.g. a fenced code block showing `name(arg string) string`.
    fn signature(&self, name: &str, signature: &FunctionSignature)
        -> Result<String, CollaboratorError>;

    /// The list of positional arguments.
    fn arguments(&self, signature: &FunctionSignature) -> Result<String, CollaboratorError>;

    /// The variadic argument, if any. Called even when the function has none.
    fn variadic_argument(&self, signature: &FunctionSignature)
        -> Result<String, CollaboratorError>;
}

impl<F> SchemaMarkdown for F
where
    F: Fn(&Schema, &mut dyn Write) -> Result<(), CollaboratorError> + Send + Sync,
{
    fn render(&self, schema: &Schema, out: &mut dyn Write) -> Result<(), CollaboratorError> {
        (self)(schema, out)
    }
}
