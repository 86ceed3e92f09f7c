//! Line-oriented Markdown block parser.
//!
//! The parser is deliberately small: the input is canonical
//! machine-generated Markdown, so classification is prefix matching over
//! trimmed lines rather than a full CommonMark implementation. Every
//! source line yields exactly one block, in order; lines that are empty
//! after trimming yield [`Block::Blank`] spacing markers.

use crate::model::{Block, Document};

/// Parse Markdown source text into an ordered block sequence.
///
/// Classification precedence per trimmed line: `### ` → Heading(3),
/// `## ` → Heading(2), `# ` → Heading(1), `- `/`* ` → ListItem, anything
/// else → Paragraph. Markers are stripped from the stored text. Heading
/// runs deeper than three `#` are clamped to level 3.
///
/// This is a total, pure function: any input (including the empty
/// string) yields a valid document.
///
/// # Example
///
/// ```
/// use prdoc::model::Block;
///
/// let doc = prdoc::parse("# Title\n\n- first");
/// assert_eq!(doc.blocks[0], Block::heading(1, "Title"));
/// assert_eq!(doc.blocks[1], Block::Blank);
/// assert_eq!(doc.blocks[2], Block::list_item("first"));
/// ```
pub fn parse(text: &str) -> Document {
    let mut doc = Document::new();
    if text.is_empty() {
        return doc;
    }
    for line in text.lines() {
        doc.push(classify_line(line.trim()));
    }
    doc
}

/// Classify a single trimmed line into a block.
fn classify_line(trimmed: &str) -> Block {
    if trimmed.is_empty() {
        return Block::Blank;
    }

    if trimmed.starts_with('#') {
        let hashes = trimmed.chars().take_while(|&c| c == '#').count();
        if let Some(rest) = trimmed.get(hashes..) {
            if let Some(text) = rest.strip_prefix(' ') {
                return Block::heading(hashes.min(3) as u8, text.trim());
            }
        }
        // A `#` run without a following space is plain text.
        return Block::paragraph(trimmed);
    }

    if let Some(text) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return Block::list_item(text.trim());
    }

    Block::paragraph(trimmed)
}
