use std::path::PathBuf;

/// Configuration file names looked up in the working directory
pub const CONFIG_FILES: [&str; 4] = ["htmltoc.yml", "htmltoc.yaml", "htmltoc.toml", "htmltoc.json"];

/// Default input document
pub fn default_input() -> PathBuf {
    PathBuf::from("vknotes.html")
}

/// Default marker for the document title heading
pub fn default_title_marker() -> String {
    "Vulkan notes".to_string()
}

/// Default marker for the table of contents heading
pub fn default_toc_marker() -> String {
    "Table of contents".to_string()
}
