//! # tfdocs-text - Text utilities for documentation templates
//!
//! Small, pure helpers that documentation templates lean on when turning
//! schema descriptions into reference pages:
//!
//! - [`plain_markdown`]: strip Markdown formatting down to plain prose
//! - [`prefix_lines`]: indent every line of a block of text
//! - [`code_file`]: wrap the contents of a file in a fenced code block
//!
//! ```rust
//! use tfdocs_text::{plain_markdown, prefix_lines};
//!
//! let plain = plain_markdown("Manages an **example** `widget`.");
//! assert_eq!(plain, "Manages an example widget.");
//! assert_eq!(prefix_lines("  ", "one\ntwo"), "  one\n  two");
//! ```

mod codefile;
mod plain;
mod prefix;

pub use codefile::{code_file, CodeFileError};
pub use plain::plain_markdown;
pub use prefix::prefix_lines;
