//! Paginated layout: word-wrapping and page-break placement.
//!
//! The layout pass folds an immutable block sequence through an explicit
//! accumulator (completed pages, open page, `y` cursor) rather than
//! mutating shared cursor state. Page count is a pure function
//! of `(document, config)`: text measurement uses a fixed average-advance
//! width model, never an environment-dependent font rasterizer.

use crate::model::{Block, Document, Page, PositionedLine};
use crate::render::PageConfig;

/// Millimetres per point (1 pt = 1/72 inch).
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Average glyph advance as a fraction of the font size (em). Matches
/// the mean advance of the built-in Helvetica metrics closely enough
/// for stable line budgets.
const AVG_CHAR_EM: f32 = 0.5;

/// Bullet glyph prefixed to the first wrapped line of a list item.
const BULLET_GLYPH: &str = "\u{2022} ";

/// Lay out a document onto fixed-size pages.
///
/// Always yields at least one page; an empty document produces a single
/// empty page.
pub fn paginate(doc: &Document, config: &PageConfig) -> Vec<Page> {
    let mut cursor = LayoutCursor::new(config);

    for block in doc.iter() {
        match block {
            Block::Heading { level, text } => {
                cursor.advance_spacing(config.heading_spacing(*level), config);
                let size = config.heading_font_size(*level);
                for line in wrap_text(text, config.text_width(), size) {
                    cursor.place_line(config.margin, line, size, true, config);
                }
            }
            Block::ListItem { text } => {
                let size = config.body_font_size;
                let budget = config.text_width() - config.bullet_indent;
                for (i, line) in wrap_text(text, budget, size).into_iter().enumerate() {
                    if i == 0 {
                        let line = format!("{}{}", BULLET_GLYPH, line);
                        cursor.place_line(config.margin, line, size, false, config);
                    } else {
                        cursor.place_line(config.margin + config.bullet_indent, line, size, false, config);
                    }
                }
            }
            Block::Paragraph { text } => {
                let size = config.body_font_size;
                for line in wrap_text(text, config.text_width(), size) {
                    cursor.place_line(config.margin, line, size, false, config);
                }
            }
            Block::Blank => {
                cursor.advance_spacing(config.blank_spacing(), config);
            }
        }
    }

    cursor.finish()
}

/// Measure the width of a text run in length-units.
///
/// Deterministic average-advance model: every character advances by
/// `AVG_CHAR_EM` of the font size.
pub fn measure_text(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVG_CHAR_EM * PT_TO_MM
}

/// Greedy word-wrap into the minimum number of lines whose measured
/// width fits the budget.
///
/// Words are appended while the line stays within budget; the line
/// breaks before the word that would overflow. A single word wider than
/// the budget is placed alone on its own line unmodified.
pub fn wrap_text(text: &str, budget: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_width = measure_text(&current, font_size)
            + measure_text(" ", font_size)
            + measure_text(word, font_size);
        if candidate_width <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Layout accumulator: completed pages, the open page, and the vertical
/// cursor on it.
struct LayoutCursor {
    done: Vec<Page>,
    current: Page,
    y: f32,
}

impl LayoutCursor {
    fn new(config: &PageConfig) -> Self {
        Self {
            done: Vec::new(),
            current: Page::new(1, config.width, config.height),
            y: config.margin,
        }
    }

    /// Close the current page and open the next, resetting the cursor.
    fn break_page(&mut self, config: &PageConfig) {
        let next = Page::new(self.current.number + 1, config.width, config.height);
        self.done.push(std::mem::replace(&mut self.current, next));
        self.y = config.margin;
    }

    /// Place one wrapped line on the current page, breaking first if the
    /// line would cross the bottom margin.
    fn place_line(&mut self, x: f32, text: String, font_size: f32, bold: bool, config: &PageConfig) {
        if self.y + config.line_height > config.bottom_limit() {
            self.break_page(config);
        }
        self.current.push_line(PositionedLine {
            x,
            y: self.y,
            font_size,
            bold,
            text,
        });
        self.y += config.line_height;
    }

    /// Advance the cursor without emitting a line. Subject to the same
    /// page-break check; spacing that would cross the bottom margin
    /// starts the next page instead of carrying over.
    fn advance_spacing(&mut self, amount: f32, config: &PageConfig) {
        if self.y + amount > config.bottom_limit() {
            self.break_page(config);
        } else {
            self.y += amount;
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn default_config() -> PageConfig {
        PageConfig::default()
    }

    #[test]
    fn test_empty_document_single_page() {
        let pages = paginate(&Document::new(), &default_config());
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_short_paragraph_single_line() {
        let doc = parse("hello world");
        let pages = paginate(&doc, &default_config());
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].line_count(), 1);
        assert_eq!(pages[0].lines[0].text, "hello world");
        assert_eq!(pages[0].lines[0].y, 15.0);
    }

    #[test]
    fn test_wrap_breaks_before_overflowing_word() {
        // Budget fits roughly 46 characters of 11pt text.
        let config = default_config();
        let text = "word ".repeat(40);
        let lines = wrap_text(text.trim(), config.text_width(), config.body_font_size);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure_text(line, config.body_font_size) <= config.text_width());
        }
    }

    #[test]
    fn test_overwide_word_unsplit() {
        let config = default_config();
        let long_word = "x".repeat(300);
        let lines = wrap_text(&long_word, config.text_width(), config.body_font_size);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], long_word);
        // The single over-wide word exceeds the budget by design.
        assert!(measure_text(&lines[0], config.body_font_size) > config.text_width());
    }

    #[test]
    fn test_pagination_lower_bound() {
        // More wrapped lines than fit on one page must yield >= 2 pages.
        let config = default_config();
        let capacity = ((config.height - 2.0 * config.margin) / config.line_height) as usize;
        let source = "line\n".repeat(capacity + 1);
        let doc = parse(source.trim_end());
        let pages = paginate(&doc, &config);
        assert!(pages.len() >= 2, "expected >= 2 pages, got {}", pages.len());
        assert_eq!(pages[1].lines[0].y, config.margin);
    }

    #[test]
    fn test_heading_spacing_advances_cursor() {
        let config = default_config();
        let plain = paginate(&parse("text"), &config);
        let headed = paginate(&parse("# text"), &config);
        assert!(headed[0].lines[0].y > plain[0].lines[0].y);
        assert!(headed[0].lines[0].bold);
        assert_eq!(headed[0].lines[0].font_size, 22.0);
    }

    #[test]
    fn test_blank_line_spacing_without_content() {
        let config = default_config();
        let doc = parse("a\n\nb");
        let pages = paginate(&doc, &config);
        assert_eq!(pages[0].line_count(), 2);
        let gap = pages[0].lines[1].y - pages[0].lines[0].y;
        assert_eq!(gap, config.line_height + config.blank_spacing());
    }

    #[test]
    fn test_list_item_bullet_and_indent() {
        let config = default_config();
        let doc = parse("- short item");
        let pages = paginate(&doc, &config);
        assert!(pages[0].lines[0].text.starts_with('\u{2022}'));
        assert_eq!(pages[0].lines[0].x, config.margin);

        // Continuation lines of a wrapped item are indented past the glyph.
        let long_item = format!("- {}", "word ".repeat(60));
        let pages = paginate(&parse(long_item.trim_end()), &config);
        assert!(pages[0].line_count() > 1);
        assert_eq!(pages[0].lines[1].x, config.margin + config.bullet_indent);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let config = default_config();
        let doc = parse("# Title\n\nSome body text.\n- one\n- two");
        let first = paginate(&doc, &config);
        let second = paginate(&doc, &config);
        assert_eq!(first, second);
    }
}
