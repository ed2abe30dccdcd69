//! Fully-qualified naming.
//!
//! The enclosing lexical scope always wins over the namespace the parser
//! reported for a declaration. Enum namespaces arrive with their trailing
//! `::` already attached; class namespaces do not.

/// Fully-qualified name of a declaration that may carry a parser-reported
/// namespace prefix (enums).
#[must_use]
pub fn qualify(name: &str, scope: &str, namespace: &str) -> String {
    if !scope.is_empty() {
        format!("{scope}::{name}")
    } else if !namespace.is_empty() {
        format!("{namespace}{name}")
    } else {
        name.to_string()
    }
}

/// The scope a class is declared in: its enclosing class if any, else its
/// namespace.
#[must_use]
pub fn class_scope<'a>(scope: &'a str, namespace: &'a str) -> &'a str {
    if scope.is_empty() { namespace } else { scope }
}

/// `scope::name`, or `name` at the global scope.
#[must_use]
pub fn join(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}::{name}")
    }
}
