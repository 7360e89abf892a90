use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ginkgo-md",
    version,
    about = "Convert a Ginkgo BDD JSON report into a nested markdown outline"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit config file, merged over ginkgo-md.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report written by `ginkgo --json-report`
    #[arg(value_name = "GINKGO_REPORT")]
    pub report: PathBuf,

    /// Markdown output path [default: parsed_ginkgo_suite.md]
    #[arg(value_name = "EXPORT_PATH")]
    pub export: Option<PathBuf>,
}
