//! Template compilation and execution.
//!
//! Templates use Jinja syntax and run in a restricted environment: the only
//! functions and filters beyond the engine builtins are the [`Helper`]s,
//! printing an undefined value is an error (testing one in a condition is
//! simply false), and output is never HTML-escaped.
//!
//! ```rust
//! use std::path::Path;
//! use tfdocs_render::template::render_string_template;
//!
//! #[derive(serde::Serialize)]
//! struct Page { name: String }
//!
//! let out = render_string_template(
//!     Path::new("."),
//!     "page",
//!     "# {{ name | upper }}\n",
//!     &["name"],
//!     &Page { name: "widget".into() },
//! ).unwrap();
//! assert_eq!(out, "# WIDGET\n");
//! ```
//!
//! [`Helper`]: crate::helpers::Helper

mod compiler;
mod renderer;

pub use compiler::{compile, CompiledTemplate, ENGINE_GLOBALS};
pub use renderer::{render_string_template, render_template};
