//! Extraction settings.

use ccgen_core::CollisionPolicy;
use serde::{Deserialize, Serialize};

const fn default_resolve_root_qualified() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Behaviour when two inputs export the same name.
    #[serde(default)]
    pub on_collision: CollisionPolicy,

    /// Resolve `::Name` base classes to the global `Name`.
    #[serde(default = "default_resolve_root_qualified")]
    pub resolve_root_qualified: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            on_collision: CollisionPolicy::default(),
            resolve_root_qualified: default_resolve_root_qualified(),
        }
    }
}
