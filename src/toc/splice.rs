use crate::utils::text::strip_line;

/// Insert the table of contents right after the anchor line
///
/// Each generated line is stripped before it goes in. A document shorter than
/// `anchor + 1` lines is padded with empty lines first, which only happens for
/// an empty document.
pub fn splice_toc(mut lines: Vec<String>, anchor: usize, toc: &str) -> Vec<String> {
    let at = anchor + 1;
    if lines.len() < at {
        lines.resize(at, String::new());
    }

    lines.splice(at..at, toc.lines().map(|l| strip_line(l).to_string()));
    lines
}

/// Join lines for output, ending with exactly one newline
pub fn render_output(lines: &[String]) -> String {
    let mut output = lines.join("\n");
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
