/// A heading found while scanning the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// The line as it read before the id was added
    pub line: String,
    /// Position of the line in the document
    pub index: usize,
    /// Heading level, 1 through 6
    pub level: usize,
    /// Text between the opening and closing tags
    pub text: String,
}

impl HeadingRecord {
    pub fn new(line: String, index: usize, level: usize, text: String) -> Self {
        Self {
            line,
            index,
            level,
            text,
        }
    }
}

/// Result of the heading scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDocument {
    /// Document lines with every heading rewritten to carry its id
    pub lines: Vec<String>,
    /// Headings in encounter order
    pub headings: Vec<HeadingRecord>,
    /// Index of the line the table of contents goes after
    pub anchor: usize,
}

/// Options for table of contents generation
#[derive(Debug, Clone)]
pub struct TocOptions {
    /// Substring marking the document title heading
    pub title_marker: String,
    /// Substring marking the table of contents heading
    pub toc_marker: String,
}

impl TocOptions {
    pub fn new(title_marker: impl Into<String>, toc_marker: impl Into<String>) -> Self {
        Self {
            title_marker: title_marker.into(),
            toc_marker: toc_marker.into(),
        }
    }

    /// Whether a heading line is left out of the generated list
    pub fn is_excluded(&self, line: &str) -> bool {
        line.contains(&self.title_marker) || line.contains(&self.toc_marker)
    }
}

impl Default for TocOptions {
    fn default() -> Self {
        Self::new(
            crate::config::defaults::default_title_marker(),
            crate::config::defaults::default_toc_marker(),
        )
    }
}
