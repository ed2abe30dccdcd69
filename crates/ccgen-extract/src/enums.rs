//! Enum collection.

use std::path::Path;

use ccgen_core::docs::has_documentation;
use ccgen_core::{EnumEntry, EnumRecord};

use crate::scope;
use crate::session::{Diagnostic, ExtractionSession, SymbolKind};

/// Export `record` if it is documented and named.
///
/// `scope` is the enclosing class, empty at namespace level. Unnamed
/// enumerators are skipped.
pub fn collect_enum(
    session: &mut ExtractionSession,
    record: &EnumRecord,
    scope: &str,
) -> Option<EnumEntry> {
    if !has_documentation(&record.documentation) {
        session.trace(format_args!(
            "skipping undocumented enum {}",
            scope::qualify(&record.name, scope, &record.namespace)
        ));
        return None;
    }
    if record.name.is_empty() {
        session.report(Diagnostic::AnonymousDeclaration {
            kind: SymbolKind::Enum,
            scope: scope::class_scope(scope, record.namespace.trim_end_matches("::")).to_string(),
            file: session.current_file().map(Path::to_path_buf),
        });
        return None;
    }

    let name = scope::qualify(&record.name, scope, &record.namespace);
    session.trace(format_args!(
        "found enum {name} with docstring '{}'",
        record.documentation
    ));
    Some(EnumEntry {
        name,
        values: record
            .values
            .iter()
            .filter(|value| !value.name.is_empty())
            .map(|value| value.name.clone())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccgen_core::EnumValueRecord;
    use pretty_assertions::assert_eq;

    fn color(documentation: &str) -> EnumRecord {
        EnumRecord {
            name: "Color".into(),
            namespace: String::new(),
            documentation: documentation.into(),
            values: ["Red", "Green", "Blue"]
                .into_iter()
                .map(EnumValueRecord::new)
                .collect(),
        }
    }

    #[test]
    fn documented_enum_in_scope_is_qualified() {
        let mut session = ExtractionSession::new();
        let entry = collect_enum(&mut session, &color("/// colors"), "Shapes")
            .expect("documented enum exports");

        assert_eq!(entry.name, "Shapes::Color");
        assert_eq!(entry.values, vec!["Red", "Green", "Blue"]);
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn namespace_carries_its_own_separator() {
        let mut session = ExtractionSession::new();
        let mut record = color("/// colors");
        record.namespace = "gfx::".into();

        let entry = collect_enum(&mut session, &record, "").expect("exports");
        assert_eq!(entry.name, "gfx::Color");
    }

    #[test]
    fn undocumented_enum_is_silently_dropped() {
        let mut session = ExtractionSession::new();
        assert_eq!(collect_enum(&mut session, &color(""), "Shapes"), None);
        assert!(session.diagnostics().is_empty());
    }

    #[test]
    fn anonymous_documented_enum_is_reported() {
        let mut session = ExtractionSession::new();
        let mut record = color("/// flags");
        record.name.clear();

        assert_eq!(collect_enum(&mut session, &record, "Shapes"), None);
        assert!(matches!(
            &session.diagnostics()[0],
            Diagnostic::AnonymousDeclaration { kind: SymbolKind::Enum, scope, .. } if scope == "Shapes"
        ));
    }

    #[test]
    fn unnamed_values_are_skipped() {
        let mut session = ExtractionSession::new();
        let mut record = color("/// colors");
        record.values.insert(1, EnumValueRecord::new(""));

        let entry = collect_enum(&mut session, &record, "").expect("exports");
        assert_eq!(entry.values, vec!["Red", "Green", "Blue"]);
    }
}
