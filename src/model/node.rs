//! Styled node types for the structured rich-text output format.

use serde::{Deserialize, Serialize};

/// The kind of a styled node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NodeKind {
    /// A heading at the given level (1-3)
    Heading {
        /// Heading level (1 = largest)
        level: u8,
    },

    /// A bulleted list entry
    Bullet,

    /// Body text
    Body,

    /// An empty spacer node, mapped from a blank source line
    Empty,
}

/// One node of the structured rich-text output tree.
///
/// Exactly one node is produced per parsed block, in order. Blank lines
/// map to [`NodeKind::Empty`] nodes that are retained explicitly so the
/// resulting document's internal schema stays well-formed; dropping them
/// would be an error, not an optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledNode {
    /// Node kind
    #[serde(flatten)]
    pub kind: NodeKind,

    /// Node text (empty for [`NodeKind::Empty`])
    pub text: String,

    /// Vertical spacing before the node, in twentieths of a point
    pub spacing_before: u32,

    /// Vertical spacing after the node, in twentieths of a point
    pub spacing_after: u32,
}

impl StyledNode {
    /// Create a node with the given kind, text, and spacing.
    pub fn new(kind: NodeKind, text: impl Into<String>, before: u32, after: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            spacing_before: before,
            spacing_after: after,
        }
    }

    /// Create an empty spacer node.
    pub fn empty() -> Self {
        Self::new(NodeKind::Empty, "", 0, 0)
    }

    /// Check if this is an empty spacer node.
    pub fn is_empty_node(&self) -> bool {
        self.kind == NodeKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_node() {
        let node = StyledNode::empty();
        assert!(node.is_empty_node());
        assert_eq!(node.text, "");
        assert_eq!(node.spacing_before, 0);
        assert_eq!(node.spacing_after, 0);
    }

    #[test]
    fn test_node_serialization() {
        let node = StyledNode::new(NodeKind::Heading { level: 2 }, "Scope", 300, 150);
        let json = serde_json::to_string(&node).unwrap();
        assert!(json.contains("\"kind\":\"heading\""));
        assert!(json.contains("\"level\":2"));
        assert!(json.contains("\"spacing_before\":300"));
    }
}
