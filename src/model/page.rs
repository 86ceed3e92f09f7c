//! Page-level types for the paged output format.

use serde::{Deserialize, Serialize};

/// A single text line placed on a page.
///
/// Positions are in the page's length-units (millimetres by default),
/// measured from the top-left corner; font sizes are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedLine {
    /// Horizontal offset from the left page edge
    pub x: f32,

    /// Vertical offset from the top page edge (baseline)
    pub y: f32,

    /// Font size in points
    pub font_size: f32,

    /// Whether the line is set in the bold face
    pub bold: bool,

    /// Line text
    pub text: String,
}

/// One unit of paginated output, holding positioned lines.
///
/// Pages are append-only and produced top-to-bottom; the sequence of
/// pages for a given `(document, config)` pair is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in length-units
    pub width: f32,

    /// Page height in length-units
    pub height: f32,

    /// Positioned lines in placement order
    pub lines: Vec<PositionedLine>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            lines: Vec::new(),
        }
    }

    /// Append a line to the page.
    pub fn push_line(&mut self, line: PositionedLine) {
        self.lines.push(line);
    }

    /// Check if the page holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Page dimensions as a (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
