//! Per-run extraction state shared by every collection step.

use std::fmt;
use std::path::{Path, PathBuf};

/// The kind of exported symbol a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Class,
    Enum,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Class => "class",
            Self::Enum => "enum",
        };
        write!(f, "{s}")
    }
}

/// A non-fatal problem found while extracting. None of these change the
/// exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A class or documented enum without a name; it is not exported.
    AnonymousDeclaration {
        kind: SymbolKind,
        scope: String,
        file: Option<PathBuf>,
    },
    /// A base class that matches no exported class; the reference is dropped.
    UnresolvableReference {
        class: String,
        parent: String,
        scope: String,
    },
    /// A later input replaced an exported symbol of an earlier one.
    NameCollision {
        kind: SymbolKind,
        name: String,
        previous: PathBuf,
        file: PathBuf,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnonymousDeclaration { kind, scope, file } => {
                let scope = if scope.is_empty() { "<global>" } else { scope };
                write!(f, "anonymous {kind} in scope {scope} is not supported")?;
                if let Some(file) = file {
                    write!(f, " ({})", file.display())?;
                }
                Ok(())
            }
            Self::UnresolvableReference {
                class,
                parent,
                scope,
            } => write!(
                f,
                "could not resolve parent {parent} of {class} (scope {scope}); dropping it"
            ),
            Self::NameCollision {
                kind,
                name,
                previous,
                file,
            } => write!(
                f,
                "{kind} {name} from {} overwrites the one from {}",
                file.display(),
                previous.display()
            ),
        }
    }
}

/// Carries the tracing span and the diagnostics of one extraction run.
///
/// Passed explicitly to every collection step instead of logging through
/// process-wide state, so a run's findings can be inspected afterwards.
#[derive(Debug)]
pub struct ExtractionSession {
    span: tracing::Span,
    current_file: Option<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl ExtractionSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            span: tracing::info_span!("extract"),
            current_file: None,
            diagnostics: Vec::new(),
        }
    }

    /// Attribute subsequent findings to `path`.
    pub fn enter_file(&mut self, path: &Path) {
        self.current_file = Some(path.to_path_buf());
    }

    pub fn leave_file(&mut self) {
        self.current_file = None;
    }

    #[must_use]
    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// Log `diagnostic` at warn level and keep it.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let _entered = self.span.enter();
        tracing::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    /// Debug-level trace inside the session span.
    pub fn trace(&self, message: fmt::Arguments<'_>) {
        let _entered = self.span.enter();
        tracing::debug!("{message}");
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Default for ExtractionSession {
    fn default() -> Self {
        Self::new()
    }
}
