//! The fixed set of helper functions available to documentation templates.
//!
//! Every helper is registered as a global function and as a filter. As a
//! function the arguments follow the documented order; as a filter the piped
//! value becomes the subject:
//!
//! | Helper | Function form | Filter form |
//! |--------|---------------|-------------|
//! | `codefile` | `codefile("shell", path)` | `path \| codefile("shell")` |
//! | `tffile` | `tffile(path)` | `path \| tffile` |
//! | `lower` / `upper` / `title` | `lower(text)` | `text \| lower` |
//! | `plainmarkdown` | `plainmarkdown(text)` | `text \| plainmarkdown` |
//! | `prefixlines` | `prefixlines("  ", text)` | `text \| prefixlines("  ")` |
//! | `split` | `split(text, ",")` | `text \| split(",")` |
//! | `trimspace` | `trimspace(text)` | `text \| trimspace` |
//!
//! Relative paths given to `codefile` and `tffile` resolve against the
//! provider directory the helpers were registered with.

use std::path::{Path, PathBuf};

use minijinja::{Environment, Error, ErrorKind};
use tfdocs_text::{code_file, plain_markdown, prefix_lines, CodeFileError};

/// Format tag used by `tffile`.
pub const TERRAFORM_FORMAT: &str = "terraform";

/// A helper function exposed to templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    CodeFile,
    Lower,
    PlainMarkdown,
    PrefixLines,
    Split,
    TfFile,
    Title,
    TrimSpace,
    Upper,
}

impl Helper {
    /// Every helper, in registration order.
    pub const ALL: [Helper; 9] = [
        Helper::CodeFile,
        Helper::Lower,
        Helper::PlainMarkdown,
        Helper::PrefixLines,
        Helper::Split,
        Helper::TfFile,
        Helper::Title,
        Helper::TrimSpace,
        Helper::Upper,
    ];

    /// The name templates use to call this helper.
    pub fn name(self) -> &'static str {
        match self {
            Helper::CodeFile => "codefile",
            Helper::Lower => "lower",
            Helper::PlainMarkdown => "plainmarkdown",
            Helper::PrefixLines => "prefixlines",
            Helper::Split => "split",
            Helper::TfFile => "tffile",
            Helper::Title => "title",
            Helper::TrimSpace => "trimspace",
            Helper::Upper => "upper",
        }
    }

    pub fn from_name(name: &str) -> Option<Helper> {
        Helper::ALL.into_iter().find(|helper| helper.name() == name)
    }

    fn register(self, env: &mut Environment<'static>, provider_dir: &Path) {
        let name = self.name();
        match self {
            Helper::CodeFile => {
                let dir = provider_dir.to_path_buf();
                env.add_function(name, move |format: String, file: String| {
                    include_file(&dir, &format, &file)
                });
                let dir = provider_dir.to_path_buf();
                env.add_filter(name, move |file: String, format: String| {
                    include_file(&dir, &format, &file)
                });
            }
            Helper::TfFile => {
                // Leading comment lines are kept; only the format tag differs
                // from codefile.
                let dir = provider_dir.to_path_buf();
                env.add_function(name, move |file: String| {
                    include_file(&dir, TERRAFORM_FORMAT, &file)
                });
                let dir = provider_dir.to_path_buf();
                env.add_filter(name, move |file: String| {
                    include_file(&dir, TERRAFORM_FORMAT, &file)
                });
            }
            Helper::Lower => {
                env.add_function(name, |text: String| text.to_lowercase());
                env.add_filter(name, |text: String| text.to_lowercase());
            }
            Helper::Upper => {
                env.add_function(name, |text: String| text.to_uppercase());
                env.add_filter(name, |text: String| text.to_uppercase());
            }
            Helper::Title => {
                env.add_function(name, |text: String| title_case(&text));
                env.add_filter(name, |text: String| title_case(&text));
            }
            Helper::PlainMarkdown => {
                env.add_function(name, |text: String| plain_markdown(&text));
                env.add_filter(name, |text: String| plain_markdown(&text));
            }
            Helper::PrefixLines => {
                env.add_function(name, |prefix: String, text: String| {
                    prefix_lines(&prefix, &text)
                });
                env.add_filter(name, |text: String, prefix: String| {
                    prefix_lines(&prefix, &text)
                });
            }
            Helper::Split => {
                env.add_function(name, |text: String, sep: String| split(&text, &sep));
                env.add_filter(name, |text: String, sep: String| split(&text, &sep));
            }
            Helper::TrimSpace => {
                env.add_function(name, |text: String| text.trim().to_string());
                env.add_filter(name, |text: String| text.trim().to_string());
            }
        }
    }
}

/// Registers every [`Helper`] on `env`, binding file helpers to `provider_dir`.
pub fn register_helpers(env: &mut Environment<'static>, provider_dir: &Path) {
    for helper in Helper::ALL {
        helper.register(env, provider_dir);
    }
}

fn resolve(provider_dir: &Path, file: &str) -> PathBuf {
    let path = Path::new(file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        provider_dir.join(path)
    }
}

fn include_file(provider_dir: &Path, format: &str, file: &str) -> Result<String, Error> {
    code_file(format, resolve(provider_dir, file)).map_err(include_error)
}

fn include_error(err: CodeFileError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string()).with_source(err)
}

/// Splits `text` on `sep`. An empty separator splits into characters.
pub fn split(text: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return text.chars().map(String::from).collect();
    }
    text.split(sep).map(String::from).collect()
}

/// Uppercases the first letter of each word and lowercases the rest.
///
/// Words are runs of alphanumeric characters, underscores and apostrophes, so
/// `"don't STOP"` becomes `"Don't Stop"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        in_word = ch.is_alphanumeric() || matches!(ch, '_' | '\'' | '\u{2019}');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;
    use std::fs;

    fn env_in(dir: &Path) -> Environment<'static> {
        let mut env = Environment::new();
        register_helpers(&mut env, dir);
        env
    }

    #[test]
    fn test_names_round_trip() {
        for helper in Helper::ALL {
            assert_eq!(Helper::from_name(helper.name()), Some(helper));
        }
        assert_eq!(Helper::from_name("markdownify"), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello wORLD"), "Hello World");
        assert_eq!(title_case("don't stop"), "Don't Stop");
        assert_eq!(title_case("aws_s3-bucket"), "Aws_s3-Bucket");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_split() {
        assert_eq!(split("a,b,,c", ","), vec!["a", "b", "", "c"]);
        assert_eq!(split("", ","), vec![""]);
        assert_eq!(split("ab", ""), vec!["a", "b"]);
    }

    #[test]
    fn test_case_helpers() {
        let env = env_in(Path::new("."));
        let out = env
            .render_str(
                "{{ lower('ABC') }} {{ 'abc' | upper }} {{ 'the widget' | title }}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "abc ABC The Widget");
    }

    #[test]
    fn test_prefixlines_argument_order() {
        let env = env_in(Path::new("."));
        let out = env
            .render_str(
                "{{ prefixlines('> ', 'a\nb') }}|{{ 'c\nd' | prefixlines('# ') }}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "> a\n> b|# c\n# d");
    }

    #[test]
    fn test_split_and_trimspace() {
        let env = env_in(Path::new("."));
        let out = env
            .render_str(
                "{% for part in 'x, y' | split(',') %}[{{ part | trimspace }}]{% endfor %}",
                context! {},
            )
            .unwrap();
        assert_eq!(out, "[x][y]");
    }

    #[test]
    fn test_plainmarkdown_filter() {
        let env = env_in(Path::new("."));
        let out = env
            .render_str("{{ '**bold** `x`' | plainmarkdown }}", context! {})
            .unwrap();
        assert_eq!(out, "bold x");
    }

    #[test]
    fn test_codefile_resolves_relative_to_provider_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("import.sh"), "terraform import a.b 1\n").unwrap();

        let env = env_in(dir.path());
        let out = env
            .render_str("{{ codefile('shell', 'import.sh') }}", context! {})
            .unwrap();
        assert_eq!(out, "```shell\nterraform import a.b 1\n```");

        let out = env
            .render_str("{{ 'import.sh' | codefile('sh') }}", context! {})
            .unwrap();
        assert_eq!(out, "```sh\nterraform import a.b 1\n```");
    }

    #[test]
    fn test_codefile_absolute_path_ignores_provider_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("example.tf");
        fs::write(&file, "resource \"a\" \"b\" {}\n").unwrap();

        let env = env_in(Path::new("/nonexistent/provider"));
        let out = env
            .render_str("{{ tffile(path) }}", context! { path => file.to_string_lossy().to_string() })
            .unwrap();
        assert_eq!(out, "```terraform\nresource \"a\" \"b\" {}\n```");
    }

    #[test]
    fn test_tffile_keeps_leading_comments() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("main.tf"), "# Configure the widget\nresource \"a\" \"b\" {}\n")
            .unwrap();

        let env = env_in(dir.path());
        let out = env.render_str("{{ 'main.tf' | tffile }}", context! {}).unwrap();
        assert_eq!(
            out,
            "```terraform\n# Configure the widget\nresource \"a\" \"b\" {}\n```"
        );
    }

    #[test]
    fn test_codefile_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(dir.path());
        let err = env
            .render_str("{{ codefile('shell', 'missing.sh') }}", context! {})
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert!(err.to_string().contains("missing.sh"));
    }
}
