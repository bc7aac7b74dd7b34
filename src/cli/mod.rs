pub mod logging;
pub mod types;

use clap::Parser;
use log::{debug, error};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::toc;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = generate(&config) {
        error!("Failed to generate table of contents: {}", e);
        std::process::exit(1);
    }
}

/// Load config files, then let command line options take precedence
fn resolve_config(cli: &types::Cli) -> BoxResult<Config> {
    let mut config = config::load_config(PathBuf::from("."), cli.config.clone())?;

    if let Some(input) = &cli.input {
        config.input = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    if let Some(marker) = &cli.title_marker {
        config.title_marker = marker.clone();
    }
    if let Some(marker) = &cli.toc_marker {
        config.toc_marker = marker.clone();
    }

    config::validate_config(&config)?;
    Ok(config)
}

/// Read the document, transform it and write the result
fn generate(config: &Config) -> BoxResult<()> {
    debug!("Reading {}", config.input.display());
    let content = fs::read_file(&config.input)?;

    let output = toc::transform_document(&content, &config.toc_options());

    match &config.output {
        Some(path) => {
            debug!("Writing {}", path.display());
            fs::write_file(path, &output)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
