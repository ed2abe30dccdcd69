//! Builtin output templates.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use ccgen_core::docs::uncomment;
use ccgen_core::{ClassEntry, EnumEntry};

use crate::context::RenderContext;
use crate::error::RenderError;

/// One generated output file.
pub trait OutputTemplate: Send + Sync {
    /// File name written under the output directory.
    fn name(&self) -> &str;

    /// Render against `ctx`. An empty string means nothing is written.
    ///
    /// # Errors
    /// Returns [`RenderError::Template`] or [`RenderError::Runtime`] if
    /// rendering fails.
    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError>;
}

/// cereal serialization functions for every exported class and enum.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializationTemplate;

impl SerializationTemplate {
    pub const NAME: &'static str = "serialization.hh";
}

struct ClassView<'a> {
    entry: &'a ClassEntry,
    summary: String,
}

#[derive(Template)]
#[template(path = "serialization.hh", escape = "none")]
struct SerializationHeader<'a> {
    warning: &'a str,
    files: Vec<String>,
    classes: Vec<ClassView<'a>>,
    enums: Vec<&'a EnumEntry>,
}

impl OutputTemplate for SerializationTemplate {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let header = SerializationHeader {
            warning: ctx.warning,
            files: ctx.files(),
            classes: ctx
                .classes()
                .values()
                .map(|entry| ClassView {
                    entry,
                    summary: summary(&entry.doc),
                })
                .collect(),
            enums: ctx.enums().values().collect(),
        };
        header.render().map_err(|source| RenderError::Template {
            name: Self::NAME.to_string(),
            source,
        })
    }
}

/// First line of a Doxygen comment with the markers stripped.
fn summary(doc: &str) -> String {
    uncomment(doc).lines().next().unwrap_or_default().trim().to_string()
}

/// Every template compiled into the binary.
#[must_use]
pub fn builtin_templates() -> Vec<Box<dyn OutputTemplate>> {
    vec![Box::new(SerializationTemplate)]
}

/// The templates of `available` named in `names`, in that order; all of
/// them when `names` is empty.
///
/// # Errors
/// Returns [`RenderError::UnknownTemplate`] for a name not in `available`.
pub fn select_templates(
    mut available: Vec<Box<dyn OutputTemplate>>,
    names: &[String],
) -> Result<Vec<Box<dyn OutputTemplate>>, RenderError> {
    if names.is_empty() {
        return Ok(available);
    }
    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let idx = available
            .iter()
            .position(|template| template.name() == name)
            .ok_or_else(|| RenderError::UnknownTemplate(name.clone()))?;
        selected.push(available.swap_remove(idx));
    }
    Ok(selected)
}

/// Render every template and write the non-empty results into `out_dir`.
///
/// Returns the written paths in template order.
///
/// # Errors
/// The first rendering or write failure.
pub fn render_all(
    templates: &[Box<dyn OutputTemplate>],
    ctx: &RenderContext<'_>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(out_dir).map_err(|source| RenderError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for template in templates {
        let output = template.render(ctx)?;
        if output.is_empty() {
            tracing::debug!("template {} rendered nothing; skipping", template.name());
            continue;
        }
        let path = out_dir.join(template.name());
        fs::write(&path, output).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::info!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
