//! Format dispatch: the public export entry point.
//!
//! Given source text, a source filename, and a target format, this
//! module parses, renders with the matching backend, and returns a
//! named in-memory artifact. Persisting or transmitting the artifact is
//! the caller's responsibility; the engine touches no external resource.

mod sanitize;

pub use sanitize::{sanitize, NAME_PREFIX};

use crate::error::{Error, Result};
use crate::parser::parse;
use crate::render::{to_docx, to_pdf, PageConfig};

/// Target export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pass the source Markdown through unchanged
    #[default]
    Markdown,

    /// Paginated fixed-layout document (PDF)
    Paged,

    /// Structured rich-text document (DOCX)
    Structured,
}

impl ExportFormat {
    /// File extension for this format, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Paged => "pdf",
            ExportFormat::Structured => "docx",
        }
    }

    /// MIME type of the produced artifact.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Paged => "application/pdf",
            ExportFormat::Structured => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A named in-memory export artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Sanitized base name (`PRD_<base>`)
    pub name: String,

    /// File extension without the leading dot
    pub extension: &'static str,

    /// MIME type of the content
    pub mime_type: &'static str,

    /// Artifact content
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Full filename, `<name>.<extension>`.
    pub fn filename(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the artifact content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Export source Markdown into the requested format with the default
/// paged layout.
///
/// Fails with [`Error::ContentMissing`] when `source_text` is empty; any
/// rendering failure surfaces as [`Error::Render`] and no partial
/// artifact is returned. Two calls with identical arguments produce
/// byte-identical artifacts.
pub fn export(source_text: &str, source_filename: &str, format: ExportFormat) -> Result<Artifact> {
    export_with_config(source_text, source_filename, format, &PageConfig::default())
}

pub(crate) fn export_with_config(
    source_text: &str,
    source_filename: &str,
    format: ExportFormat,
    config: &PageConfig,
) -> Result<Artifact> {
    if source_text.is_empty() {
        return Err(Error::ContentMissing);
    }

    let name = sanitize(source_filename);
    log::debug!("exporting {:?} as {:?}", name, format);

    let bytes = match format {
        // Pass-through is byte content, not block-based.
        ExportFormat::Markdown => source_text.as_bytes().to_vec(),
        ExportFormat::Paged => {
            let doc = parse(source_text);
            to_pdf(&doc, config)?
        }
        ExportFormat::Structured => {
            let doc = parse(source_text);
            to_docx(&doc)?
        }
    };

    Ok(Artifact {
        name,
        extension: format.extension(),
        mime_type: format.mime_type(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_extensions() {
        assert_eq!(ExportFormat::Markdown.extension(), "md");
        assert_eq!(ExportFormat::Paged.extension(), "pdf");
        assert_eq!(ExportFormat::Structured.extension(), "docx");
    }

    #[test]
    fn test_empty_input_fails() {
        let result = export("", "x.md", ExportFormat::Markdown);
        assert!(matches!(result, Err(Error::ContentMissing)));
    }

    #[test]
    fn test_markdown_pass_through() {
        let text = "# Title\n\nBody with *markers* kept verbatim.\n";
        let artifact = export(text, "doc.md", ExportFormat::Markdown).unwrap();
        assert_eq!(artifact.bytes, text.as_bytes());
        assert_eq!(artifact.mime_type, "text/markdown");
    }

    #[test]
    fn test_artifact_filename() {
        let artifact = export("content", "My Report.md", ExportFormat::Markdown).unwrap();
        assert_eq!(artifact.filename(), "PRD_My_Report.md");
    }
}
