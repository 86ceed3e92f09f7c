//! # prdoc
//!
//! Deterministic document export engine for Markdown analysis documents.
//!
//! This library parses canonical Markdown into a typed block sequence
//! and renders it into three target artifacts: a Markdown pass-through,
//! a paginated fixed-layout PDF, and a structured rich-text DOCX.
//! Rendering is pure and synchronous; identical input always produces
//! byte-identical output.
//!
//! ## Quick Start
//!
//! ```
//! use prdoc::{export, ExportFormat};
//!
//! fn main() -> prdoc::Result<()> {
//!     let source = "# Findings\n\n- stable pagination\n- exact pass-through\n";
//!     let artifact = export(source, "findings v1.md", ExportFormat::Paged)?;
//!
//!     assert_eq!(artifact.filename(), "PRD_findings_v1.pdf");
//!     // artifact.bytes is a complete PDF; persisting it is the caller's job.
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: [`parse`] splits source text into ordered [`model::Block`]s.
//! - **Paged**: [`render::paginate`] lays blocks onto fixed-size pages;
//!   [`render::to_pdf`] serializes them.
//! - **Structured**: [`render::build_nodes`] maps blocks to styled nodes;
//!   [`render::to_docx`] serializes them.
//! - **Dispatch**: [`export`] sanitizes the filename, runs the matching
//!   backend, and returns a named [`Artifact`].

pub mod error;
pub mod export;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{export, sanitize, Artifact, ExportFormat, NAME_PREFIX};
pub use model::{Block, Document, NodeKind, Page, PositionedLine, StyledNode};
pub use parser::parse;
pub use render::PageConfig;

/// Builder for export calls that need a non-default paged layout.
///
/// The plain [`export`] function always uses the fixed default
/// [`PageConfig`]; the builder carries a custom one.
///
/// # Example
///
/// ```
/// use prdoc::{Exporter, ExportFormat, PageConfig};
///
/// let artifact = Exporter::new()
///     .with_page_config(PageConfig::new().with_margin(10.0))
///     .export("# Title\n\nBody.", "doc.md", ExportFormat::Paged)?;
/// assert_eq!(artifact.extension, "pdf");
/// # Ok::<(), prdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    page_config: PageConfig,
}

impl Exporter {
    /// Create an exporter with the default page layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paged-format layout configuration.
    pub fn with_page_config(mut self, config: PageConfig) -> Self {
        self.page_config = config;
        self
    }

    /// Export source text into the requested format.
    pub fn export(
        &self,
        source_text: &str,
        source_filename: &str,
        format: ExportFormat,
    ) -> Result<Artifact> {
        export::export_with_config(source_text, source_filename, format, &self.page_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exporter_builder() {
        let exporter = Exporter::new().with_page_config(PageConfig::new().with_margin(10.0));
        assert_eq!(exporter.page_config.margin, 10.0);
    }

    #[test]
    fn test_exporter_default_matches_free_function() {
        let text = "# Title\n\nBody.";
        let built = Exporter::new()
            .export(text, "doc.md", ExportFormat::Paged)
            .unwrap();
        let free = export(text, "doc.md", ExportFormat::Paged).unwrap();
        assert_eq!(built, free);
    }

    #[test]
    fn test_custom_margin_changes_layout() {
        let config = PageConfig::new().with_margin(10.0);
        let pages = render::paginate(&parse("hello"), &config);
        assert_eq!(pages[0].lines[0].y, 10.0);
    }
}
