// Module declarations
mod cli;
mod config;
mod toc;
mod utils;

fn main() {
    // Run the CLI
    cli::run();
}
