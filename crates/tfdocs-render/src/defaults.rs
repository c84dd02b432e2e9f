//! Built-in templates used when a provider does not supply its own.
//!
//! Each template opens with YAML front matter carrying [`FRONTMATTER_COMMENT`].
//! Optional sections (example usage, import, variadic argument) are emitted
//! only when their flag is set and leave no trace otherwise.

macro_rules! frontmatter_comment {
    () => {
        "# generated by https://github.com/hashicorp/terraform-plugin-docs"
    };
}

/// Generator attribution placed inside the front matter of generated pages.
pub const FRONTMATTER_COMMENT: &str = frontmatter_comment!();

pub const DEFAULT_PROVIDER_TEMPLATE: &str = concat!(
    "---\n",
    frontmatter_comment!(),
    r#"
page_title: "{{ provider_short_name }} Provider"
subcategory: ""
description: |-
{{ description | plainmarkdown | trimspace | prefixlines("  ") }}
---

# {{ provider_short_name }} Provider

{{ description | trimspace }}

{% if has_example -%}
## Example Usage

{{ tffile(example_file) }}
{%- endif %}

{{ schema_markdown | trimspace }}
"#
);

pub const DEFAULT_RESOURCE_TEMPLATE: &str = concat!(
    "---\n",
    frontmatter_comment!(),
    r#"
page_title: "{{ name }} {{ type }} - {{ provider_name }}"
subcategory: ""
description: |-
{{ description | plainmarkdown | trimspace | prefixlines("  ") }}
---

# {{ name }} ({{ type }})

{{ description | trimspace }}

{% if has_example -%}
## Example Usage

{{ tffile(example_file) }}
{%- endif %}

{{ schema_markdown | trimspace }}
{%- if has_import %}

## Import

Import is supported using the following syntax:

{{ codefile("shell", import_file) }}
{%- endif %}
"#
);

pub const DEFAULT_FUNCTION_TEMPLATE: &str = concat!(
    "---\n",
    frontmatter_comment!(),
    r#"
page_title: "{{ name }} {{ type }} - {{ provider_name }}"
subcategory: ""
description: |-
{{ summary | plainmarkdown | trimspace | prefixlines("  ") }}
---

# {{ type }}: {{ name }}

{{ description | trimspace }}

{% if has_example -%}
## Example Usage

{{ tffile(example_file) }}
{%- endif %}

## Signature

{{ function_signature_markdown }}

## Arguments

{{ function_arguments_markdown }}
{% if has_variadic -%}
{{ function_variadic_argument_markdown }}
{%- endif %}
"#
);

/// Comment block for provider templates produced by migrating existing docs.
pub const MIGRATE_PROVIDER_TEMPLATE_COMMENT: &str = "
{# This template serves as a starting point for documentation generation, and can be customized with hardcoded values and/or doc gen templates.

For example, the {{ schema_markdown }} template can be used to replace manual schema documentation if descriptions of schema attributes are added in the provider source code. -#}
";

/// Comment block for function templates produced by migrating existing docs.
pub const MIGRATE_FUNCTION_TEMPLATE_COMMENT: &str = "
{# This template serves as a starting point for documentation generation, and can be customized with hardcoded values and/or doc gen templates.

For example, the {{ function_arguments_markdown }} template can be used to replace manual argument documentation if descriptions of function arguments are added in the provider source code. -#}
";

/// Inserts a migration `comment` into template `text`.
///
/// With YAML front matter the comment goes directly after the closing `---`
/// line, otherwise at the very start. Either way the rendered output is the
/// same as rendering `text` alone, apart from leading whitespace of a template
/// without front matter.
pub fn with_migration_comment(comment: &str, text: &str) -> String {
    match front_matter_end(text) {
        Some(end) => format!("{}{}{}", &text[..end], comment, &text[end..]),
        None => format!("{}{}", comment.trim_start(), text),
    }
}

// Byte offset just past the closing front matter fence line.
fn front_matter_end(text: &str) -> Option<usize> {
    let body = text.strip_prefix("---\n")?;
    let close = body.find("\n---\n")?;
    Some("---\n".len() + close + "\n---\n".len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_attribution() {
        for text in [
            DEFAULT_PROVIDER_TEMPLATE,
            DEFAULT_RESOURCE_TEMPLATE,
            DEFAULT_FUNCTION_TEMPLATE,
        ] {
            assert!(text.starts_with("---\n"));
            assert_eq!(text.lines().nth(1), Some(FRONTMATTER_COMMENT));
        }
    }

    #[test]
    fn test_front_matter_end() {
        assert_eq!(front_matter_end("---\na: b\n---\nbody"), Some(13));
        assert_eq!(front_matter_end("# no front matter"), None);
        assert_eq!(front_matter_end("---\nunterminated"), None);
    }

    #[test]
    fn test_comment_goes_after_front_matter() {
        let out = with_migration_comment("\n{# c -#}\n", "---\na: b\n---\n\n# Title\n");
        assert_eq!(out, "---\na: b\n---\n\n{# c -#}\n\n# Title\n");
    }

    #[test]
    fn test_comment_prepended_without_front_matter() {
        let out = with_migration_comment("\n{# c -#}\n", "# Title\n");
        assert_eq!(out, "{# c -#}\n# Title\n");
    }
}
