//! Header parser settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Fail on C++ syntax errors instead of warning.
    #[serde(default)]
    pub strict: bool,
}
