//! Heading anchors and table of contents generation.
//!
//! A document goes through `extract_headings` (ids are added to every bare
//! `<hN>text</hN>` line), `generate_toc` (nested `<ul>` markup for the
//! headings) and `splice_toc` (the list is inserted after the anchor line).
//! Each stage takes the lines by value and hands back a new sequence.

mod generator;
mod parser;
mod slug;
mod splice;
mod types;

use log::debug;

use generator::generate_toc;
use parser::extract_headings;
use splice::{render_output, splice_toc};

pub use types::TocOptions;

use crate::utils::text::split_lines;

/// Add heading ids to a document and insert its table of contents
pub fn transform_document(content: &str, options: &TocOptions) -> String {
    let lines = split_lines(content);
    debug!("Loaded {} lines", lines.len());

    let scanned = extract_headings(lines, &options.toc_marker);
    let toc = generate_toc(&scanned.headings, options);
    let lines = splice_toc(scanned.lines, scanned.anchor, &toc);

    render_output(&lines)
}
