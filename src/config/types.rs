use serde::Deserialize;
use std::path::PathBuf;

use crate::config::defaults;
use crate::toc::TocOptions;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Document to read
    #[serde(default = "defaults::default_input")]
    pub input: PathBuf,

    /// File to write the result to; standard output when unset
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Substring identifying the document title heading
    #[serde(default = "defaults::default_title_marker")]
    pub title_marker: String,

    /// Substring identifying the table of contents heading
    #[serde(default = "defaults::default_toc_marker")]
    pub toc_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: defaults::default_input(),
            output: None,
            title_marker: defaults::default_title_marker(),
            toc_marker: defaults::default_toc_marker(),
        }
    }
}

impl Config {
    /// Options for the table of contents stage
    pub fn toc_options(&self) -> TocOptions {
        TocOptions::new(self.title_marker.clone(), self.toc_marker.clone())
    }
}
