use log::debug;

use crate::toc::slug::generate_id_from_text;
use crate::toc::types::{HeadingRecord, TocOptions};

/// Nesting depth the list starts at. The title is the only h1 and is left out.
pub const BASE_DEPTH: usize = 2;

/// Generate a nested table of contents from scanned headings
///
/// Headings whose line carries the title or toc marker are skipped without
/// touching the depth. Every other heading first opens or closes one list per
/// level of difference, then adds its item. Structural lines are indented by
/// the depth at the time they are written.
pub fn generate_toc(headings: &[HeadingRecord], options: &TocOptions) -> String {
    let mut toc = String::from("<ul>\n");
    let mut current_level = BASE_DEPTH;

    for heading in headings {
        if options.is_excluded(&heading.line) {
            debug!("Leaving heading on line {} out of the list", heading.index);
            continue;
        }

        while heading.level > current_level {
            toc.push_str(&format!("{}<ul>\n", indent(current_level)));
            current_level += 1;
        }

        while heading.level < current_level {
            toc.push_str(&format!("{}</ul>\n", indent(current_level)));
            current_level -= 1;
        }

        toc.push_str(&format!(
            "{}<li><a href='#{}'>{}</a></li>\n",
            indent(current_level),
            generate_id_from_text(&heading.text),
            heading.text
        ));
    }

    // Close any remaining lists, the outermost one included
    while current_level >= BASE_DEPTH {
        toc.push_str("</ul>\n");
        current_level -= 1;
    }

    toc
}

fn indent(depth: usize) -> String {
    " ".repeat(depth)
}
