//! Page layout configuration.

/// Layout configuration for the paged output format.
///
/// Lengths are in millimetres, font sizes in points. The defaults match
/// the A4 layout contract the paged format is specified against, so the
/// resulting pagination is bit-stable across implementations.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Page width in length-units
    pub width: f32,

    /// Page height in length-units
    pub height: f32,

    /// Uniform page margin in length-units
    pub margin: f32,

    /// Vertical advance per text line in length-units
    pub line_height: f32,

    /// Font size for body and list text, in points
    pub body_font_size: f32,

    /// Font sizes for heading levels 1-3, in points
    pub heading_font_sizes: [f32; 3],

    /// Left indent reserved for list items, in length-units
    pub bullet_indent: f32,
}

impl PageConfig {
    /// Create a config with the A4 defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page dimensions.
    pub fn with_page_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the uniform page margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the per-line vertical advance.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the body font size.
    pub fn with_body_font_size(mut self, size: f32) -> Self {
        self.body_font_size = size;
        self
    }

    /// Set the heading font sizes for levels 1-3.
    pub fn with_heading_font_sizes(mut self, sizes: [f32; 3]) -> Self {
        self.heading_font_sizes = sizes;
        self
    }

    /// Font size for a heading level (1-3).
    pub fn heading_font_size(&self, level: u8) -> f32 {
        let idx = (level.clamp(1, 3) - 1) as usize;
        self.heading_font_sizes[idx]
    }

    /// Extra vertical spacing placed before a heading, scaled by level
    /// (level 1 largest).
    pub fn heading_spacing(&self, level: u8) -> f32 {
        match level.clamp(1, 3) {
            1 => self.line_height * 0.9,
            2 => self.line_height * 0.6,
            _ => self.line_height * 0.4,
        }
    }

    /// Fixed small vertical advance for a blank source line.
    pub fn blank_spacing(&self) -> f32 {
        self.line_height * 0.5
    }

    /// Horizontal width available to wrapped text, in length-units.
    pub fn text_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Bottom boundary for line placement, in length-units.
    pub fn bottom_limit(&self) -> f32 {
        self.height - self.margin
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 15.0,
            line_height: 7.0,
            body_font_size: 11.0,
            heading_font_sizes: [22.0, 18.0, 14.0],
            bullet_indent: 6.0,
        }
    }
}
