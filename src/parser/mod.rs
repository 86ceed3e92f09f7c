//! Markdown block parsing.

mod markdown;

pub use markdown::parse;
