use pulldown_cmark::{Event, Parser, TagEnd};

/// Strips Markdown formatting, leaving the plain prose.
///
/// Emphasis, links and inline code collapse to their text. Paragraphs and
/// headings are separated by a blank line, list items by a single newline.
/// Raw HTML is dropped. Leading and trailing whitespace is removed.
pub fn plain_markdown(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_)) => end_block(&mut out, 2),
            Event::End(TagEnd::Item | TagEnd::CodeBlock) => end_block(&mut out, 1),
            Event::End(TagEnd::List(_)) => end_block(&mut out, 2),
            _ => {}
        }
    }

    out.trim().to_string()
}

// Normalises the trailing newlines after a block to exactly `newlines`.
fn end_block(out: &mut String, newlines: usize) {
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    if !out.is_empty() {
        out.extend(std::iter::repeat('\n').take(newlines));
    }
}
