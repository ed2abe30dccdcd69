//! Read-only data handed to every template.

use ccgen_core::{ClassMap, EnumMap, SymbolTable};

/// Banner placed at the top of every generated file.
pub const WARNING_BANNER: &str = "// Warning:\n\
// This file is autogenerated at build phase\n\
// All changes made will be lost on next rebuild\n";

#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub table: &'a SymbolTable,
    pub warning: &'static str,
}

impl<'a> RenderContext<'a> {
    #[must_use]
    pub const fn new(table: &'a SymbolTable) -> Self {
        Self {
            table,
            warning: WARNING_BANNER,
        }
    }

    #[must_use]
    pub fn files(&self) -> Vec<String> {
        self.table.file_names()
    }

    #[must_use]
    pub const fn classes(&self) -> &'a ClassMap {
        &self.table.classes
    }

    #[must_use]
    pub const fn enums(&self) -> &'a EnumMap {
        &self.table.enums
    }
}
