use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `ccgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ccgen",
    version,
    about = "Generate C++ serialization code from Doxygen-documented headers"
)]
pub struct Cli {
    /// Directory receiving generated sources, the log, JSON and dump files
    pub out_dir: PathBuf,

    /// Headers (or JSON record files) to scan
    pub inputs: Vec<PathBuf>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Extra config file layered above ./ccgen.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Stop after writing the JSON and dump files
    #[arg(long)]
    pub no_render: bool,
}
