//! Rendering module: pagination, styled-tree building, and the PDF/DOCX
//! serialization backends.

mod docx;
mod layout;
mod options;
mod pdf;
mod tree;

pub use docx::{serialize_nodes, to_docx};
pub use layout::{measure_text, paginate, wrap_text};
pub use options::PageConfig;
pub use pdf::{serialize_pages, to_pdf};
pub use tree::build_nodes;
