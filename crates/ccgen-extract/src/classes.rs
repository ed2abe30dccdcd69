//! Recursive class collection.

use std::path::Path;

use ccgen_core::docs::has_documentation;
use ccgen_core::{Attribute, ClassEntry, ClassRecord};

use crate::collected::CollectedSymbols;
use crate::enums::collect_enum;
use crate::scope;
use crate::session::{Diagnostic, ExtractionSession, SymbolKind};

/// Collect `record` and everything nested in it.
///
/// `scope` is the enclosing class's fully-qualified name, empty for
/// top-level classes. Nested declarations are exported on their own
/// documentation, whether or not `record` is documented. An anonymous
/// class is reported and discarded together with its contents.
pub fn collect_class(
    session: &mut ExtractionSession,
    record: &ClassRecord,
    scope: &str,
) -> CollectedSymbols {
    let mut collected = CollectedSymbols::default();
    let class_scope = scope::class_scope(scope, &record.namespace);

    if record.name.is_empty() {
        session.report(Diagnostic::AnonymousDeclaration {
            kind: SymbolKind::Class,
            scope: class_scope.to_string(),
            file: session.current_file().map(Path::to_path_buf),
        });
        return collected;
    }

    let name = scope::join(class_scope, &record.name);

    for nested in &record.nested_classes {
        collected.merge(collect_class(session, nested, &name));
    }
    for nested in record.all_nested_enums() {
        if let Some(entry) = collect_enum(session, nested, &name) {
            collected.enums.insert(entry.name.clone(), entry);
        }
    }

    if !has_documentation(&record.documentation) {
        session.trace(format_args!("skipping undocumented class {name}"));
        return collected;
    }
    session.trace(format_args!(
        "found class {name} with docstring '{}'",
        record.documentation
    ));

    let attributes = record
        .all_properties()
        .filter(|(_, property)| has_documentation(&property.documentation))
        .map(|(access, property)| Attribute {
            name: property.name.clone(),
            type_name: property.type_name.clone(),
            doc: property.documentation.clone(),
            access,
        })
        .collect();

    collected.classes.insert(
        name.clone(),
        ClassEntry {
            name,
            attributes,
            parents: record
                .inherits_from
                .iter()
                .map(|base| base.class_name.clone())
                .collect(),
            doc: record.documentation.clone(),
            scope: class_scope.to_string(),
        },
    );
    collected
}
