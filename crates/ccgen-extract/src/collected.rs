//! Per-file collection results.

use ccgen_core::{ClassMap, EnumMap};

/// Classes and enums exported by one declaration subtree or file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedSymbols {
    pub classes: ClassMap,
    pub enums: EnumMap,
}

impl CollectedSymbols {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }

    /// Fold `other` in; its entries replace same-named ones.
    pub fn merge(&mut self, other: Self) {
        self.classes.extend(other.classes);
        self.enums.extend(other.enums);
    }
}
