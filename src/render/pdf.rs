//! PDF serialization of the paged layout.
//!
//! Builds the PDF object tree directly with `lopdf`: one content stream
//! per page, built-in Helvetica/Helvetica-Bold fonts, no timestamps and
//! no document ID, so identical input yields byte-identical output.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document as PdfDocument, Object, Stream};

use crate::error::Result;
use crate::model::{Document, Page, PositionedLine};
use crate::render::{paginate, PageConfig};

/// Points per millimetre.
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Render a document to PDF bytes using the given layout config.
pub fn to_pdf(doc: &Document, config: &PageConfig) -> Result<Vec<u8>> {
    let pages = paginate(doc, config);
    log::debug!("paginated document into {} page(s)", pages.len());
    serialize_pages(&pages)
}

/// Serialize an already-laid-out page sequence to PDF bytes.
pub fn serialize_pages(pages: &[Page]) -> Result<Vec<u8>> {
    let mut pdf = PdfDocument::with_version("1.5");

    let pages_id = pdf.new_object_id();
    let regular_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for page in pages {
        let content = page_content(page)?;
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content));
        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let (width_pt, height_pt) = pages
        .first()
        .map(|p| (p.width * MM_TO_PT, p.height * MM_TO_PT))
        .unwrap_or((210.0 * MM_TO_PT, 297.0 * MM_TO_PT));

    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages.len() as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(width_pt),
                Object::Real(height_pt),
            ],
        }),
    );

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    pdf.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Encode one page's positioned lines as a content stream.
fn page_content(page: &Page) -> Result<Vec<u8>> {
    let mut operations = Vec::with_capacity(page.lines.len() * 5);
    for line in &page.lines {
        emit_line(&mut operations, line, page.height);
    }
    let content = Content { operations };
    Ok(content.encode()?)
}

fn emit_line(operations: &mut Vec<Operation>, line: &PositionedLine, page_height: f32) {
    // Layout positions run top-down; PDF user space runs bottom-up.
    let x = line.x * MM_TO_PT;
    let y = (page_height - line.y) * MM_TO_PT;
    let font = if line.bold { "F2" } else { "F1" };

    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("Tf", vec![font.into(), line.font_size.into()]));
    operations.push(Operation::new("Td", vec![x.into(), y.into()]));
    operations.push(Operation::new(
        "Tj",
        vec![Object::string_literal(line.text.as_str())],
    ));
    operations.push(Operation::new("ET", vec![]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_pdf_magic_bytes() {
        let doc = parse("# Title\n\nBody text.");
        let bytes = to_pdf(&doc, &PageConfig::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_pdf_output_is_byte_stable() {
        let doc = parse("# Title\n\n- one\n- two\n\nBody.");
        let config = PageConfig::default();
        let first = to_pdf(&doc, &config).unwrap();
        let second = to_pdf(&doc, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_page_object_count_matches_layout() {
        let config = PageConfig::default();
        let capacity = ((config.height - 2.0 * config.margin) / config.line_height) as usize;
        let source = "line\n".repeat(capacity + 1);
        let doc = parse(source.trim_end());

        let pages = paginate(&doc, &config);
        assert!(pages.len() >= 2);

        let bytes = to_pdf(&doc, &config).unwrap();
        let reparsed = PdfDocument::load_mem(&bytes).unwrap();
        assert_eq!(reparsed.get_pages().len(), pages.len());
    }

    #[test]
    fn test_empty_document_still_valid() {
        let bytes = to_pdf(&Document::new(), &PageConfig::default()).unwrap();
        let reparsed = PdfDocument::load_mem(&bytes).unwrap();
        assert_eq!(reparsed.get_pages().len(), 1);
    }
}
