use std::io::Write;
use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::error::{RenderError, Result};
use crate::helpers::{register_helpers, Helper};

/// Names the template engine provides on its own.
pub const ENGINE_GLOBALS: &[&str] = &[
    "caller", "debug", "dict", "kwargs", "loop", "namespace", "range", "self", "super",
    "varargs",
];

/// A parsed template bound to the helper set.
///
/// Each compiled template owns its environment, so templates compiled for
/// different provider directories never share state.
pub struct CompiledTemplate {
    name: String,
    env: Environment<'static>,
}

impl std::fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Compiles `text` into a template named `name`.
///
/// `known` lists the context fields the template will be executed against.
/// Any top-level name that is not a context field, a helper or an engine
/// global is rejected with [`RenderError::UnknownReference`].
pub fn compile(provider_dir: &Path, name: &str, text: &str, known: &[&str]) -> Result<CompiledTemplate> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    register_helpers(&mut env, provider_dir);

    let parse_error = |source| RenderError::Parse {
        name: name.to_string(),
        text: text.to_string(),
        source,
    };

    env.add_template_owned(name.to_string(), text.to_string())
        .map_err(parse_error)?;

    let unknown = {
        let template = env.get_template(name).map_err(parse_error)?;
        let mut unknown: Vec<String> = template
            .undeclared_variables(false)
            .into_iter()
            .filter(|reference| !is_known(reference, known))
            .collect();
        unknown.sort();
        unknown.into_iter().next()
    };

    if let Some(reference) = unknown {
        return Err(RenderError::UnknownReference {
            name: name.to_string(),
            reference,
        });
    }

    tracing::debug!(template = name, "compiled template");
    Ok(CompiledTemplate {
        name: name.to_string(),
        env,
    })
}

fn is_known(reference: &str, known: &[&str]) -> bool {
    known.contains(&reference)
        || Helper::from_name(reference).is_some()
        || ENGINE_GLOBALS.contains(&reference)
}

impl CompiledTemplate {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes the template against `ctx`, writing the output to `out`.
    pub fn execute<S: Serialize, W: Write>(&self, ctx: &S, out: W) -> Result<()> {
        let execute_error = |source| RenderError::Execute {
            name: self.name.clone(),
            source,
        };

        let template = self.env.get_template(&self.name).map_err(execute_error)?;
        template.render_captured_to(ctx, out).map_err(execute_error)?;
        Ok(())
    }
}
