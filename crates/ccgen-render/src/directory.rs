//! Templates read from a directory at run time.
//!
//! Each regular file in the directory is a Jinja template whose output
//! lands under the same file name. Templates see the same data as the
//! builtins: `warning`, `files`, `classes` and `enums`, with the maps keyed
//! by qualified name. Python-style calls such as `classes.values()` work.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use minijinja::{AutoEscape, Environment, context};

use crate::context::RenderContext;
use crate::error::RenderError;
use crate::templates::OutputTemplate;

/// One file of a template directory.
#[derive(Debug)]
pub struct DirectoryTemplate {
    env: Arc<Environment<'static>>,
    name: String,
}

impl OutputTemplate for DirectoryTemplate {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        let runtime = |source| RenderError::Runtime {
            name: self.name.clone(),
            source,
        };
        let template = self.env.get_template(&self.name).map_err(runtime)?;
        template
            .render(context! {
                warning => ctx.warning,
                files => ctx.files(),
                classes => ctx.classes(),
                enums => ctx.enums(),
            })
            .map_err(runtime)
    }
}

/// Compile every template in `dir`, sorted by file name.
///
/// Hidden files and subdirectories are skipped.
///
/// # Errors
/// [`RenderError::Io`] if the directory or a file cannot be read,
/// [`RenderError::Runtime`] if a template does not compile.
pub fn load_template_dir(dir: &Path) -> Result<Vec<Box<dyn OutputTemplate>>, RenderError> {
    let unreadable = |source| RenderError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            tracing::warn!("skipping template with non-UTF-8 name: {}", path.display());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        files.push((name.to_string(), path));
    }
    files.sort();

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
    for (name, path) in &files {
        let source = fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.clone(),
            source,
        })?;
        env.add_template_owned(name.clone(), source)
            .map_err(|source| RenderError::Runtime {
                name: name.clone(),
                source,
            })?;
    }
    tracing::debug!("loaded {} templates from {}", files.len(), dir.display());

    let env = Arc::new(env);
    Ok(files
        .into_iter()
        .map(|(name, _)| {
            Box::new(DirectoryTemplate {
                env: Arc::clone(&env),
                name,
            }) as Box<dyn OutputTemplate>
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccgen_core::SymbolTable;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_files_and_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("b.txt"), "b").expect("write");
        std::fs::write(dir.path().join("a.txt"), "a").expect("write");
        std::fs::write(dir.path().join(".swp"), "junk").expect("write");
        std::fs::create_dir(dir.path().join("nested")).expect("mkdir");

        let templates = load_template_dir(dir.path()).expect("load");
        let names: Vec<_> = templates.iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        let err = load_template_dir(&dir.path().join("absent")).err();
        assert!(matches!(err, Some(RenderError::Io { .. })), "got {err:?}");
    }

    #[test]
    fn syntax_error_names_the_template() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("broken.hh"), "{% for x in %}").expect("write");
        let err = load_template_dir(dir.path()).err();
        assert!(
            matches!(&err, Some(RenderError::Runtime { name, .. }) if name == "broken.hh"),
            "got {err:?}"
        );
    }

    #[test]
    fn warning_banner_is_available() {
        let dir = tempfile::tempdir().expect("tempdir should create");
        std::fs::write(dir.path().join("banner.hh"), "{{ warning }}").expect("write");
        let templates = load_template_dir(dir.path()).expect("load");
        let table = SymbolTable::default();
        let output = templates[0].render(&RenderContext::new(&table)).expect("render");
        assert_eq!(output, crate::WARNING_BANNER);
    }
}
