/// Whitespace as far as heading text is concerned: ASCII space, tab, line
/// feed, vertical tab, form feed and carriage return.
pub fn is_heading_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Strip a document line. NUL counts as strippable padding here too.
pub fn strip_line(line: &str) -> &str {
    line.trim_matches(|c: char| c == '\0' || is_heading_whitespace(c))
}

/// Split raw document text into stripped lines.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split_inclusive('\n')
        .map(|line| strip_line(line).to_string())
        .collect()
}
