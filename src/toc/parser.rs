use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::toc::slug::generate_id_from_text;
use crate::toc::types::{HeadingRecord, ScannedDocument};

lazy_static! {
    // The closing level is captured separately and compared, the regex crate
    // has no backreferences.
    static ref HEADING_REGEX: Regex = Regex::new(r"^<h([1-6])>(.+)</h([1-6])>$").unwrap();
}

/// Match a whole line against `<hN>text</hN>`, returning level and text
pub fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let cap = HEADING_REGEX.captures(line)?;
    if cap[1] != cap[3] {
        return None;
    }

    let level: usize = cap[1].parse().ok()?;
    let text = cap.get(2)?.as_str();
    Some((level, text))
}

/// Render a heading line carrying its anchor id
pub fn render_heading(level: usize, text: &str) -> String {
    format!(
        "<h{lvl} id='{id}'>{text}</h{lvl}>",
        lvl = level,
        id = generate_id_from_text(text),
        text = text
    )
}

/// Scan document lines for headings and give each one an id
///
/// Lines that are not a single bare heading pass through untouched. The
/// anchor is the index of the last heading whose line contains `toc_marker`,
/// or 0 when there is none.
pub fn extract_headings(lines: Vec<String>, toc_marker: &str) -> ScannedDocument {
    let mut headings = Vec::new();
    let mut anchor = 0;

    let lines = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let Some((level, text)) = parse_heading(&line) else {
                return line;
            };

            if line.contains(toc_marker) {
                anchor = index;
            }

            let rewritten = render_heading(level, text);
            headings.push(HeadingRecord::new(
                line.clone(),
                index,
                level,
                text.to_string(),
            ));
            rewritten
        })
        .collect();

    debug!(
        "Found {} headings, table of contents anchored at line {}",
        headings.len(),
        anchor
    );

    ScannedDocument {
        lines,
        headings,
        anchor,
    }
}
