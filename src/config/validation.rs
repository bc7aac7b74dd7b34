use log::warn;

use crate::config::Config;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::same_file_path;

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_marker("title_marker", &config.title_marker)?;
    validate_marker("toc_marker", &config.toc_marker)?;

    if markers_coincide(config) {
        warn!(
            "title_marker and toc_marker are both '{}'; the title heading will also anchor the table of contents",
            config.toc_marker
        );
    }

    if let Some(output) = config.output.as_ref().filter(|o| same_file_path(o, &config.input)) {
        return Err(TocError::Config(format!(
            "Output {} would overwrite the input document {}",
            output.display(),
            config.input.display()
        ))
        .into());
    }

    Ok(())
}

/// The title heading would also anchor the table of contents
fn markers_coincide(config: &Config) -> bool {
    config.title_marker == config.toc_marker
}

/// An empty marker is a substring of every line
fn validate_marker(name: &str, marker: &str) -> BoxResult<()> {
    if marker.is_empty() {
        return Err(TocError::Config(format!("{} must not be empty", name)).into());
    }

    Ok(())
}
