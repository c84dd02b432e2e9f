//! Top-level rendering entry points per document kind.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::context::{
    FunctionContext, FunctionInput, ProviderContext, ProviderInput, ResourceContext,
    ResourceInput,
};
use crate::defaults::{DEFAULT_FUNCTION_TEMPLATE, DEFAULT_PROVIDER_TEMPLATE, DEFAULT_RESOURCE_TEMPLATE};
use crate::error::Result;
use crate::markdown::{SchemaMarkdown, SignatureMarkdown};
use crate::options::RenderOptions;
use crate::template::{render_string_template, render_template};

macro_rules! page_template {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty(String);

        impl $ty {
            /// Name reported in parse and execution errors.
            pub const NAME: &'static str = $name;

            pub fn new(text: impl Into<String>) -> Self {
                Self(text.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty template renders nothing.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new($default)
            }
        }

        impl From<String> for $ty {
            fn from(text: String) -> Self {
                Self(text)
            }
        }

        impl From<&str> for $ty {
            fn from(text: &str) -> Self {
                Self::new(text)
            }
        }
    };
}

page_template!(
    /// Template for the provider index page. Defaults to [`DEFAULT_PROVIDER_TEMPLATE`].
    ProviderTemplate,
    "providerTemplate",
    DEFAULT_PROVIDER_TEMPLATE
);
page_template!(
    /// Template for resource pages. Defaults to [`DEFAULT_RESOURCE_TEMPLATE`].
    ResourceTemplate,
    "resourceTemplate",
    DEFAULT_RESOURCE_TEMPLATE
);
page_template!(
    /// Template for function pages. Defaults to [`DEFAULT_FUNCTION_TEMPLATE`].
    FunctionTemplate,
    "functionTemplate",
    DEFAULT_FUNCTION_TEMPLATE
);
page_template!(
    /// A free-standing page rendered without a context; only helpers are available.
    /// Defaults to empty.
    DocTemplate,
    "docTemplate",
    ""
);

/// Renders documentation pages with a fixed set of options and Markdown collaborators.
///
/// A `DocRenderer` holds no mutable state; it can be shared across threads
/// and used for any number of concurrent renders.
///
/// ```rust
/// use std::io::Write;
/// use tfdocs_render::{
///     CollaboratorError, DocRenderer, FunctionSignature, ProviderInput, ProviderTemplate,
///     RenderOptions, Schema, SignatureMarkdown,
/// };
///
/// struct NoFunctions;
///
/// impl SignatureMarkdown for NoFunctions {
///     fn signature(&self, _: &str, _: &FunctionSignature) -> Result<String, CollaboratorError> {
///         Ok(String::new())
///     }
///     fn arguments(&self, _: &FunctionSignature) -> Result<String, CollaboratorError> {
///         Ok(String::new())
///     }
///     fn variadic_argument(&self, _: &FunctionSignature) -> Result<String, CollaboratorError> {
///         Ok(String::new())
///     }
/// }
///
/// let table = |_: &Schema, out: &mut dyn Write| -> Result<(), CollaboratorError> {
///     out.write_all(b"## Schema\n")?;
///     Ok(())
/// };
///
/// let renderer = DocRenderer::new(RenderOptions::new("."), table, NoFunctions);
/// let page = renderer
///     .render_provider(
///         &ProviderTemplate::new("{{ provider_short_name }}: {{ schema_markdown }}"),
///         &ProviderInput {
///             provider_name: "terraform-provider-example",
///             rendered_provider_name: "Example",
///             example_file: None,
///             schema: &Schema::default(),
///         },
///     )
///     .unwrap();
///
/// assert_eq!(page, "example: <!-- schema generated by tfplugindocs -->\n## Schema\n");
/// ```
pub struct DocRenderer {
    options: RenderOptions,
    schema_markdown: Box<dyn SchemaMarkdown>,
    signature_markdown: Box<dyn SignatureMarkdown>,
}

impl fmt::Debug for DocRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl DocRenderer {
    pub fn new(
        options: RenderOptions,
        schema_markdown: impl SchemaMarkdown + 'static,
        signature_markdown: impl SignatureMarkdown + 'static,
    ) -> Self {
        Self {
            options,
            schema_markdown: Box::new(schema_markdown),
            signature_markdown: Box::new(signature_markdown),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render_provider(&self, template: &ProviderTemplate, input: &ProviderInput<'_>) -> Result<String> {
        tracing::debug!(provider = input.provider_name, "rendering provider page");
        self.render_string(ProviderTemplate::NAME, template.as_str(), ProviderContext::FIELDS, || {
            ProviderContext::build(input, self.schema_markdown.as_ref())
        })
    }

    pub fn render_provider_to<W: Write>(
        &self,
        template: &ProviderTemplate,
        input: &ProviderInput<'_>,
        out: W,
    ) -> Result<()> {
        tracing::debug!(provider = input.provider_name, "rendering provider page");
        self.render_to(
            ProviderTemplate::NAME,
            template.as_str(),
            ProviderContext::FIELDS,
            || ProviderContext::build(input, self.schema_markdown.as_ref()),
            out,
        )
    }

    pub fn render_resource(&self, template: &ResourceTemplate, input: &ResourceInput<'_>) -> Result<String> {
        tracing::debug!(resource = input.name, kind = input.type_name, "rendering resource page");
        self.render_string(ResourceTemplate::NAME, template.as_str(), ResourceContext::FIELDS, || {
            ResourceContext::build(input, self.schema_markdown.as_ref(), self.options.malformed_metadata())
        })
    }

    pub fn render_resource_to<W: Write>(
        &self,
        template: &ResourceTemplate,
        input: &ResourceInput<'_>,
        out: W,
    ) -> Result<()> {
        tracing::debug!(resource = input.name, kind = input.type_name, "rendering resource page");
        self.render_to(
            ResourceTemplate::NAME,
            template.as_str(),
            ResourceContext::FIELDS,
            || {
                ResourceContext::build(
                    input,
                    self.schema_markdown.as_ref(),
                    self.options.malformed_metadata(),
                )
            },
            out,
        )
    }

    pub fn render_function(&self, template: &FunctionTemplate, input: &FunctionInput<'_>) -> Result<String> {
        tracing::debug!(function = input.name, "rendering function page");
        self.render_string(FunctionTemplate::NAME, template.as_str(), FunctionContext::FIELDS, || {
            FunctionContext::build(input, self.signature_markdown.as_ref(), self.options.malformed_metadata())
        })
    }

    pub fn render_function_to<W: Write>(
        &self,
        template: &FunctionTemplate,
        input: &FunctionInput<'_>,
        out: W,
    ) -> Result<()> {
        tracing::debug!(function = input.name, "rendering function page");
        self.render_to(
            FunctionTemplate::NAME,
            template.as_str(),
            FunctionContext::FIELDS,
            || {
                FunctionContext::build(
                    input,
                    self.signature_markdown.as_ref(),
                    self.options.malformed_metadata(),
                )
            },
            out,
        )
    }

    pub fn render_doc(&self, template: &DocTemplate) -> Result<String> {
        self.render_string(DocTemplate::NAME, template.as_str(), &[], || Ok(serde_json::Map::new()))
    }

    pub fn render_doc_to<W: Write>(&self, template: &DocTemplate, out: W) -> Result<()> {
        self.render_to(
            DocTemplate::NAME,
            template.as_str(),
            &[],
            || Ok(serde_json::Map::new()),
            out,
        )
    }

    // The context is only built for non-empty templates, so an empty
    // override skips the page without touching schema or side files.
    fn render_string<C: Serialize>(
        &self,
        name: &str,
        text: &str,
        known: &[&str],
        build: impl FnOnce() -> Result<C>,
    ) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let ctx = build()?;
        render_string_template(self.options.provider_dir(), name, text, known, &ctx)
    }

    fn render_to<C: Serialize, W: Write>(
        &self,
        name: &str,
        text: &str,
        known: &[&str],
        build: impl FnOnce() -> Result<C>,
        out: W,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let ctx = build()?;
        render_template(self.options.provider_dir(), name, text, known, &ctx, out)
    }
}
