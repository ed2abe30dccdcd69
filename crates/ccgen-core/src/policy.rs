use serde::{Deserialize, Serialize};

/// What to do when two input files export a symbol with the same
/// fully-qualified name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later file's entry replaces the earlier one (logged).
    #[default]
    Overwrite,
    /// Abort the run.
    Error,
}

impl std::fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Overwrite => "overwrite",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}
