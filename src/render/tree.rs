//! Block-to-styled-node mapping for the structured rich-text format.

use crate::model::{Block, Document, NodeKind, StyledNode};

// Spacing values in twentieths of a point, level 1 largest.
const HEADING_SPACING: [(u32, u32); 3] = [(400, 200), (300, 150), (200, 100)];
const BODY_SPACING_AFTER: u32 = 150;
const BULLET_SPACING_AFTER: u32 = 100;

/// Map a block sequence to styled nodes, one per block, in order.
///
/// Blank lines map to explicit [`NodeKind::Empty`] nodes; omitting them
/// would break the output schema's 1:1 correspondence with the parsed
/// document. Total, pure, deterministic.
pub fn build_nodes(doc: &Document) -> Vec<StyledNode> {
    doc.iter().map(node_for_block).collect()
}

fn node_for_block(block: &Block) -> StyledNode {
    match block {
        Block::Heading { level, text } => {
            let idx = ((*level).clamp(1, 3) - 1) as usize;
            let (before, after) = HEADING_SPACING[idx];
            StyledNode::new(NodeKind::Heading { level: *level }, text.clone(), before, after)
        }
        Block::ListItem { text } => {
            StyledNode::new(NodeKind::Bullet, text.clone(), 0, BULLET_SPACING_AFTER)
        }
        Block::Paragraph { text } => {
            StyledNode::new(NodeKind::Body, text.clone(), 0, BODY_SPACING_AFTER)
        }
        Block::Blank => StyledNode::empty(),
    }
}
