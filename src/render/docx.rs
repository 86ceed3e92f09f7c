//! DOCX serialization of the styled node sequence.
//!
//! Assembles the OOXML package with `docx-rs`: three self-contained
//! heading styles, one bullet numbering definition, and explicit
//! before/after spacing per node. The writer embeds no timestamps, so
//! identical input yields byte-identical output.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, Start, Style, StyleType,
};

use crate::error::{Error, Result};
use crate::model::{Document, NodeKind, StyledNode};
use crate::render::build_nodes;

const BULLET_NUMBERING_ID: usize = 1;

// Half-point run sizes per heading level, matching the paged format's
// 22/18/14 pt heading scale.
const HEADING_HALF_POINTS: [usize; 3] = [44, 36, 28];

/// Render a document to DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    let nodes = build_nodes(doc);
    log::debug!("built {} styled node(s) for DOCX output", nodes.len());
    serialize_nodes(&nodes)
}

/// Serialize an already-built styled node sequence to DOCX bytes.
pub fn serialize_nodes(nodes: &[StyledNode]) -> Result<Vec<u8>> {
    let mut docx = base_document();

    for node in nodes {
        docx = docx.add_paragraph(paragraph_for_node(node));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| Error::Render(format!("DOCX packaging error: {}", e)))?;
    Ok(cursor.into_inner())
}

/// Document skeleton: heading styles plus the bullet numbering
/// definition every list entry references.
fn base_document() -> Docx {
    let bullet_level = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("\u{2022}"),
        LevelJc::new("left"),
    );

    let mut docx = Docx::new()
        .add_abstract_numbering(
            AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(bullet_level),
        )
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

    for level in 1..=3u8 {
        let style_id = heading_style_id(level);
        let style = Style::new(style_id, StyleType::Paragraph)
            .name(format!("Heading {}", level))
            .bold()
            .size(HEADING_HALF_POINTS[(level - 1) as usize]);
        docx = docx.add_style(style);
    }

    docx
}

fn heading_style_id(level: u8) -> &'static str {
    match level.clamp(1, 3) {
        1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    }
}

fn paragraph_for_node(node: &StyledNode) -> Paragraph {
    let spacing = LineSpacing::new()
        .before(node.spacing_before)
        .after(node.spacing_after);

    match node.kind {
        NodeKind::Heading { level } => Paragraph::new()
            .style(heading_style_id(level))
            .add_run(Run::new().add_text(node.text.as_str()))
            .line_spacing(spacing),
        NodeKind::Bullet => Paragraph::new()
            .add_run(Run::new().add_text(node.text.as_str()))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
            .line_spacing(spacing),
        NodeKind::Body => Paragraph::new()
            .add_run(Run::new().add_text(node.text.as_str()))
            .line_spacing(spacing),
        // Empty nodes become empty paragraphs; they carry the schema's
        // 1:1 block correspondence and must not be dropped.
        NodeKind::Empty => Paragraph::new(),
    }
}
