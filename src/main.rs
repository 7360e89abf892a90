mod cli;
mod config;
mod convert;
mod error;
mod logging;
mod render;
mod report;
mod tree;
mod types;

use crate::error::ConvertError;
use crate::render::md::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 1;
    pub const USAGE: i32 = 2;
}

const USAGE: &str = "ginkgo-md GINKGO_REPORT [EXPORT_PATH]";

/// Parses the command line, reducing usage errors to a single stderr line.
/// Help and version requests keep clap's own output.
fn parse_cli() -> cli::Cli {
    cli::Cli::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            e.exit();
        }
        let rendered = e.to_string();
        // First paragraph only; clap follows it with usage and a help tip.
        let message = rendered
            .lines()
            .take_while(|line| !line.trim().is_empty())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        let message = message.strip_prefix("error: ").unwrap_or(&message);
        eprintln!("error: {message} (usage: {USAGE})");
        std::process::exit(exit_code::USAGE);
    })
}

fn run() -> Result<i32, ConvertError> {
    let cli = parse_cli();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let export = cli
        .export
        .unwrap_or_else(|| PathBuf::from(&loaded.export.default_path));
    let options = RenderOptions::from(&loaded.render);

    convert::convert_report(&cli.report, &export, &options)?;

    if !cli.quiet {
        println!(
            "Markdown file '{}' generated successfully.",
            export.display()
        );
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
