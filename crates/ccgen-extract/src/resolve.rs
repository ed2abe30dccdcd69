//! Base-class resolution against the exported classes.
//!
//! Runs once over the merged table. Pass 1 maps every raw parent name to an
//! exported fully-qualified name or drops it; pass 2 removes anything that
//! still does not name an exported class.

use std::collections::BTreeSet;

use ccgen_core::ClassMap;

use crate::session::{Diagnostic, ExtractionSession};

/// Resolution switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Resolve `::Name` to the exported global `Name`. When off, a
    /// root-qualified reference is kept verbatim and removed by pass 2.
    pub resolve_root_qualified: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            resolve_root_qualified: true,
        }
    }
}

/// Resolve one raw parent name seen in `scope`.
///
/// Tries the name relative to the scope first, then verbatim, then as a
/// root-qualified name.
#[must_use]
pub fn resolve_parent_name(
    exported: &BTreeSet<String>,
    name: &str,
    scope: &str,
    options: ResolveOptions,
) -> Option<String> {
    let scope = scope.strip_prefix("::").unwrap_or(scope);
    if !scope.is_empty() {
        let scoped = format!("{scope}::{name}");
        if exported.contains(&scoped) {
            return Some(scoped);
        }
    }
    if exported.contains(name) {
        return Some(name.to_string());
    }
    let stripped = name.strip_prefix("::")?;
    if !exported.contains(stripped) {
        return None;
    }
    if options.resolve_root_qualified {
        Some(stripped.to_string())
    } else {
        Some(name.to_string())
    }
}

/// Rewrite every class's parents to exported fully-qualified names.
pub fn correct_parent_names(
    session: &mut ExtractionSession,
    classes: &mut ClassMap,
    options: ResolveOptions,
) {
    let exported: BTreeSet<String> = classes.keys().cloned().collect();

    for entry in classes.values_mut() {
        let raw = std::mem::take(&mut entry.parents);
        for parent in raw {
            match resolve_parent_name(&exported, &parent, &entry.scope, options) {
                Some(resolved) => entry.parents.push(resolved),
                None => session.report(Diagnostic::UnresolvableReference {
                    class: entry.name.clone(),
                    parent,
                    scope: entry.scope.clone(),
                }),
            }
        }
    }

    for entry in classes.values_mut() {
        entry.parents.retain(|parent| {
            let keep = exported.contains(parent);
            if !keep {
                tracing::debug!("pruning unexported parent {parent} of {}", entry.name);
            }
            keep
        });
    }
}
