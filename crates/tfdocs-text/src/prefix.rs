/// Prefixes every line of `text` with `prefix`.
///
/// Lines are split on `\n` only. An empty `text` still receives a single
/// prefix, so the result is never shorter than `prefix`.
///
/// ```rust
/// use tfdocs_text::prefix_lines;
///
/// assert_eq!(prefix_lines("> ", "a\nb"), "> a\n> b");
/// assert_eq!(prefix_lines("  ", ""), "  ");
/// ```
pub fn prefix_lines(prefix: &str, text: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out
}
