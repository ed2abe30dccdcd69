//! Template selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Templates to render, by output name. Empty renders all.
    #[serde(default)]
    pub templates: Vec<String>,
    /// Directory of Jinja templates rendered in place of the builtins.
    /// Each file renders to an output of the same name.
    #[serde(default)]
    pub template_dir: Option<PathBuf>,
}
