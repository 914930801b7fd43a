//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than
//! regex-based stripping. Hosts call [`strip_to_prose`] on `.md` input
//! before validation so code blocks and headings never skew the word and
//! sentence counts.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, headings, YAML frontmatter, and
/// table structure. Preserves link text, blockquote text, list item
/// text, and emphasis/strong text without their markers.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    // Handle YAML frontmatter before parsing (pulldown-cmark doesn't know about it)
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(&text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            // Skip content inside code blocks and headings
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Paragraph boundaries stay paragraph boundaries so the
            // tokenizer still sees them.
            Event::End(TagEnd::Paragraph) if skip_depth == 0 => {
                result.push_str("\n\n");
            }

            // Skip inline code text
            Event::Code(_) => {}

            _ => {}
        }
    }

    result
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> String {
    let trimmed = text.trim_start();
    if !trimmed.starts_with("---") {
        return text.to_string();
    }

    let after_opening = &trimmed[3..];
    let Some(close_pos) = after_opening.find("\n---") else {
        return text.to_string();
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder
        .strip_prefix('\n')
        .unwrap_or(remainder)
        .to_string()
}
