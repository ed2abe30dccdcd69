use serde::{Deserialize, Serialize};

/// C++ member access level.
///
/// Ordered `public < protected < private` so per-access maps iterate in the
/// order a reader expects from a class body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Public,
    Protected,
    Private,
}

impl AccessLevel {
    /// Parse an access specifier as written in source (`public`, `protected:` ...).
    #[must_use]
    pub fn from_specifier(text: &str) -> Option<Self> {
        match text.trim().trim_end_matches(':').trim() {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        };
        write!(f, "{s}")
    }
}
