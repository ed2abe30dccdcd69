//! Render error types.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template {name} failed to render: {source}")]
    Template {
        name: String,
        #[source]
        source: askama::Error,
    },

    #[error("template {name} failed: {source}")]
    Runtime {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize symbol table: {0}")]
    Json(#[from] serde_json::Error),
}
