//! Document model types for the export pipeline.
//!
//! This module defines the intermediate representation (IR) that bridges
//! Markdown parsing and artifact rendering. A [`Document`] is an ordered
//! sequence of typed [`Block`]s; the paged renderer turns it into
//! [`Page`]s of positioned lines, and the rich-text builder turns it into
//! a flat sequence of [`StyledNode`]s.

mod block;
mod node;
mod page;

pub use block::{Block, Document};
pub use node::{NodeKind, StyledNode};
pub use page::{Page, PositionedLine};
