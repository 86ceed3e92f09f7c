//! Parsed block types.

use serde::{Deserialize, Serialize};

/// A typed unit of parsed document content.
///
/// Every non-discarded source line maps to exactly one block; blank lines
/// map to [`Block::Blank`], a spacing marker that is never rendered as
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with level 1-3. Deeper source levels are clamped to 3.
    Heading {
        /// Heading level (1 = largest)
        level: u8,
        /// Heading text with the `#` markers stripped
        text: String,
    },

    /// An unordered list item. The `-`/`*` marker is not retained.
    ListItem {
        /// Item text with the list marker stripped
        text: String,
    },

    /// A plain paragraph line.
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// A blank source line. Contributes spacing only.
    Blank,
}

impl Block {
    /// Create a heading block, clamping the level to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create a list item block.
    pub fn list_item(text: impl Into<String>) -> Self {
        Block::ListItem { text: text.into() }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Get the text content of this block, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. } | Block::ListItem { text } | Block::Paragraph { text } => {
                Some(text)
            }
            Block::Blank => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a blank-line marker.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Blank)
    }
}

/// An ordered sequence of blocks parsed from source text.
///
/// Constructed fresh per export call and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a block to the document.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Number of blocks, including blank-line markers.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over the blocks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}
