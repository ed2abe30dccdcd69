use std::path::PathBuf;

use anyhow::Context;
use ccgen_config::CcgenConfig;
use ccgen_extract::{ExtractOptions, ExtractionSession, ResolveOptions, SourceCollector};
use ccgen_parser::{ParserOptions, SourceParser};
use ccgen_render::{
    RenderContext, builtin_templates, load_template_dir, render_all, select_templates, write_dump,
    write_json,
};

use crate::cli::Cli;

/// What one run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub files: usize,
    pub classes: usize,
    pub enums: usize,
    pub diagnostics: usize,
    pub written: Vec<PathBuf>,
}

/// Collect, resolve, write the JSON and dump files, then render.
pub fn execute(cli: &Cli, config: &CcgenConfig) -> anyhow::Result<RunSummary> {
    let templates = if cli.no_render {
        Vec::new()
    } else {
        let available = match &config.render.template_dir {
            Some(dir) => load_template_dir(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
            None => builtin_templates(),
        };
        select_templates(available, &config.render.templates)
            .context("invalid render.templates")?
    };

    let parser = SourceParser::new(ParserOptions {
        strict: config.parser.strict,
    });
    let options = ExtractOptions {
        on_collision: config.extract.on_collision,
        resolve: ResolveOptions {
            resolve_root_qualified: config.extract.resolve_root_qualified,
        },
    };
    let mut session = ExtractionSession::new();
    let table = SourceCollector::new(&parser, options)
        .collect(&mut session, &cli.inputs)
        .context("failed to collect source information")?;

    let json_path = cli.out_dir.join(&config.output.json_file);
    write_json(&table, &json_path)
        .with_context(|| format!("failed to write {}", json_path.display()))?;
    let dump_path = cli.out_dir.join(&config.output.dump_file);
    write_dump(&table, &dump_path)
        .with_context(|| format!("failed to write {}", dump_path.display()))?;

    let written = render_all(&templates, &RenderContext::new(&table), &cli.out_dir)
        .context("failed to render templates")?;

    Ok(RunSummary {
        files: table.files.len(),
        classes: table.classes.len(),
        enums: table.enums.len(),
        diagnostics: session.diagnostics().len(),
        written,
    })
}
