use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::defaults::{self, CONFIG_FILES};
use crate::config::types::Config;
use crate::utils::error::{BoxResult, TocError};

/// Load configuration from config files
///
/// Explicit `config_files` are merged in order. Without them, the known file
/// names are looked up in `base_dir`. No files at all means defaults.
pub fn load_config<P: AsRef<Path>>(
    base_dir: P,
    config_files: Option<Vec<PathBuf>>,
) -> BoxResult<Config> {
    let mut config = Config::default();

    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&base_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(base_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut Config, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        ))
        .into());
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        TocError::Config(format!(
            "Failed to read configuration file {}: {}",
            config_path.display(),
            e
        ))
    })?;

    if content.trim().is_empty() {
        debug!("{} is empty, skipping", config_path.display());
        return Ok(());
    }

    // Parse based on file extension
    let file_config: Config = match config_path.extension() {
        Some(ext) => match ext.to_string_lossy().to_lowercase().as_str() {
            "yml" | "yaml" => parse_yaml_config(&content, config_path)?,
            "toml" => parse_toml_config(&content, config_path)?,
            "json" => parse_json_config(&content, config_path)?,
            other => {
                return Err(TocError::Config(format!(
                    "Unsupported configuration file format: {}",
                    other
                ))
                .into());
            }
        },
        // Assume YAML if no extension
        None => parse_yaml_config(&content, config_path)?,
    };

    merge_configs(config, &file_config);
    Ok(())
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_yaml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Config> {
    toml::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Config> {
    serde_json::from_str(content).map_err(|e| {
        TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}",
            path.display(),
            e
        ))
        .into()
    })
}

/// Merge two configurations
fn merge_configs(target: &mut Config, source: &Config) {
    // Only override non-default values from source config
    if source.input != defaults::default_input() {
        target.input = source.input.clone();
    }

    if source.output.is_some() {
        target.output = source.output.clone();
    }

    if source.title_marker != defaults::default_title_marker() {
        target.title_marker = source.title_marker.clone();
    }

    if source.toc_marker != defaults::default_toc_marker() {
        target.toc_marker = source.toc_marker.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_discovers_yaml_in_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("htmltoc.yml"),
            "input: notes/gl.html\ntitle_marker: OpenGL notes\n",
        )
        .unwrap();

        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.input, PathBuf::from("notes/gl.html"));
        assert_eq!(config.title_marker, "OpenGL notes");
        assert_eq!(config.toc_marker, defaults::default_toc_marker());
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_explicit_files_merge_in_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("base.toml");
        let second = dir.path().join("override.json");
        fs::write(&first, "toc_marker = \"Contents\"\noutput = \"out.html\"\n").unwrap();
        fs::write(&second, r#"{ "toc_marker": "Index" }"#).unwrap();

        let config = load_config(dir.path(), Some(vec![first, second])).unwrap();
        assert_eq!(config.toc_marker, "Index");
        assert_eq!(config.output, Some(PathBuf::from("out.html")));
        assert_eq!(config.input, defaults::default_input());
    }

    #[test]
    fn test_empty_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("htmltoc.yaml"), "\n").unwrap();
        assert_eq!(load_config(dir.path(), None).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yml");
        let err = load_config(dir.path(), Some(vec![missing])).unwrap_err();
        assert!(err.to_string().contains("Configuration file not found"));
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("htmltoc.ini");
        fs::write(&path, "toc_marker=Contents\n").unwrap();
        let err = load_config(dir.path(), Some(vec![path])).unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration file format: ini"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("htmltoc.yml"), "title_marker: [unclosed\n").unwrap();
        let err = load_config(dir.path(), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML configuration"));
    }
}
