use anyhow::Context;
use ccgen_config::CcgenConfig;
use clap::Parser;

mod cli;
mod logging;
mod pipeline;

fn main() {
    if let Err(error) = run() {
        eprintln!("ccgen error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config =
        CcgenConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    let log_path = cli.out_dir.join(&config.output.log_file);
    let _log_guard = logging::init(&log_path, cli.quiet, cli.verbose)?;

    let summary = pipeline::execute(&cli, &config).inspect_err(|error| {
        tracing::error!("{error:#}");
    })?;
    tracing::info!(
        files = summary.files,
        classes = summary.classes,
        enums = summary.enums,
        diagnostics = summary.diagnostics,
        outputs = summary.written.len(),
        "done"
    );
    Ok(())
}
