//! Namespace, class and enum walking.

use ast_grep_core::Node;
use ccgen_core::{
    AccessLevel, BaseClassRecord, ClassRecord, EnumRecord, EnumValueRecord, HeaderUnit,
};

use super::comments::{collect_doc_comment, trailing_doc_comment};
use super::members::collect_properties;

// ── Top-level / namespace scope ────────────────────────────────────

/// Walk a translation unit or namespace body, pushing top-level classes and
/// enums into `unit`. `namespace` holds the enclosing namespace names.
pub(super) fn collect_declarations<D: ast_grep_core::Doc>(
    node: &Node<D>,
    namespace: &mut Vec<String>,
    unit: &mut HeaderUnit,
) {
    let children: Vec<_> = node.children().collect();
    for (idx, child) in children.iter().enumerate() {
        match child.kind().as_ref() {
            "namespace_definition" => process_namespace(child, namespace, unit),
            "linkage_specification" => {
                // extern "C" { ... } is transparent for naming
                if let Some(body) = child.field("body") {
                    collect_declarations(&body, namespace, unit);
                }
            }
            // Include guards and feature blocks: every branch is read.
            kind if is_conditional_block(kind) => collect_declarations(child, namespace, unit),
            _ => {
                let Some(spec) = type_specifier(child) else {
                    continue;
                };
                let doc = collect_doc_comment(&children, idx);
                if spec.kind().as_ref() == "enum_specifier" {
                    if let Some(record) = build_enum(&spec, &enum_namespace(namespace), doc) {
                        unit.enums.push(record);
                    }
                } else if let Some(record) = build_class(&spec, &namespace.join("::"), doc) {
                    unit.classes.push(record);
                }
            }
        }
    }
}

fn process_namespace<D: ast_grep_core::Doc>(
    node: &Node<D>,
    namespace: &mut Vec<String>,
    unit: &mut HeaderUnit,
) {
    // Anonymous namespaces add no name component.
    let parts: Vec<String> = node
        .field("name")
        .map(|name| {
            name.text()
                .split("::")
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    let Some(body) = node.field("body") else {
        return;
    };

    let depth = namespace.len();
    namespace.extend(parts);
    collect_declarations(&body, namespace, unit);
    namespace.truncate(depth);
}

/// `#if`/`#ifdef` blocks and their `#elif`/`#else` alternatives. The
/// alternative is a child of the block, so recursing reaches it.
fn is_conditional_block(kind: &str) -> bool {
    matches!(
        kind,
        "preproc_if" | "preproc_ifdef" | "preproc_elif" | "preproc_elifdef" | "preproc_else"
    )
}

/// Enums report their namespace with a trailing separator.
fn enum_namespace(namespace: &[String]) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("{}::", namespace.join("::"))
    }
}

/// Find the class, struct or enum specifier a node declares, unwrapping
/// `template<...>` and declarations such as `struct Foo { ... } foo;`.
fn type_specifier<'r, D: ast_grep_core::Doc>(node: &Node<'r, D>) -> Option<Node<'r, D>> {
    match node.kind().as_ref() {
        "class_specifier" | "struct_specifier" | "enum_specifier" => Some(node.clone()),
        "declaration" | "field_declaration" => node
            .field("type")
            .filter(|ty| is_type_specifier(ty.kind().as_ref())),
        "template_declaration" => node.children().find_map(|child| match child.kind().as_ref() {
            "class_specifier" | "struct_specifier" | "declaration" => type_specifier(&child),
            _ => None,
        }),
        _ => None,
    }
}

fn is_type_specifier(kind: &str) -> bool {
    matches!(kind, "class_specifier" | "struct_specifier" | "enum_specifier")
}

// ── Classes ────────────────────────────────────────────────────────

/// Build the record for a class or struct definition.
///
/// Returns `None` for forward declarations (no body).
fn build_class<D: ast_grep_core::Doc>(
    spec: &Node<D>,
    namespace: &str,
    documentation: String,
) -> Option<ClassRecord> {
    let body = spec.field("body")?;
    let default_access = if spec.kind().as_ref() == "struct_specifier" {
        AccessLevel::Public
    } else {
        AccessLevel::Private
    };

    let mut record = ClassRecord {
        name: spec
            .field("name")
            .map(|n| n.text().to_string())
            .unwrap_or_default(),
        namespace: namespace.to_string(),
        documentation,
        inherits_from: extract_base_classes(spec),
        ..ClassRecord::default()
    };
    let mut access = default_access;
    collect_class_body(&body, &mut access, namespace, &mut record);
    Some(record)
}

fn extract_base_classes<D: ast_grep_core::Doc>(spec: &Node<D>) -> Vec<BaseClassRecord> {
    let Some(clause) = spec
        .children()
        .find(|c| c.kind().as_ref() == "base_class_clause")
    else {
        return Vec::new();
    };
    clause
        .children()
        .filter(|c| {
            matches!(
                c.kind().as_ref(),
                "type_identifier" | "qualified_identifier" | "template_type"
            )
        })
        .map(|c| BaseClassRecord::new(c.text().to_string()))
        .collect()
}

/// Walk a `field_declaration_list`, tracking the current access section.
///
/// Conditional blocks are walked in place; an access specifier inside one
/// carries over to the members after it.
fn collect_class_body<D: ast_grep_core::Doc>(
    body: &Node<D>,
    access: &mut AccessLevel,
    namespace: &str,
    record: &mut ClassRecord,
) {
    let children: Vec<_> = body.children().collect();

    for (idx, child) in children.iter().enumerate() {
        match child.kind().as_ref() {
            "access_specifier" => {
                if let Some(level) = AccessLevel::from_specifier(&child.text()) {
                    *access = level;
                }
            }
            kind if is_conditional_block(kind) => {
                collect_class_body(child, access, namespace, record);
            }
            "field_declaration" => {
                let leading = collect_doc_comment(&children, idx);
                if let Some(spec) = type_specifier(child) {
                    push_nested_type(&spec, *access, namespace, leading.clone(), record);
                }
                let doc = if leading.is_empty() {
                    trailing_doc_comment(&children, idx).unwrap_or_default()
                } else {
                    leading
                };
                let properties = collect_properties(child, &doc);
                if !properties.is_empty() {
                    record.properties.entry(*access).or_default().extend(properties);
                }
            }
            "class_specifier" | "struct_specifier" | "enum_specifier" | "template_declaration"
            | "declaration" => {
                if let Some(spec) = type_specifier(child) {
                    let doc = collect_doc_comment(&children, idx);
                    push_nested_type(&spec, *access, namespace, doc, record);
                }
            }
            _ => {}
        }
    }
}

fn push_nested_type<D: ast_grep_core::Doc>(
    spec: &Node<D>,
    access: AccessLevel,
    namespace: &str,
    documentation: String,
    record: &mut ClassRecord,
) {
    if spec.kind().as_ref() == "enum_specifier" {
        let enum_ns = if namespace.is_empty() {
            String::new()
        } else {
            format!("{namespace}::")
        };
        if let Some(nested) = build_enum(spec, &enum_ns, documentation) {
            record.nested_enums.entry(access).or_default().push(nested);
        }
    } else if let Some(nested) = build_class(spec, namespace, documentation) {
        record.nested_classes.push(nested);
    }
}

// ── Enums ──────────────────────────────────────────────────────────

/// Build the record for an enum definition.
///
/// Returns `None` for opaque declarations (`enum class E : int;`).
fn build_enum<D: ast_grep_core::Doc>(
    spec: &Node<D>,
    namespace: &str,
    documentation: String,
) -> Option<EnumRecord> {
    let body = spec.field("body")?;
    let values = body
        .children()
        .filter(|c| c.kind().as_ref() == "enumerator")
        .map(|enumerator| {
            EnumValueRecord::new(
                enumerator
                    .field("name")
                    .map(|n| n.text().to_string())
                    .unwrap_or_default(),
            )
        })
        .collect();

    Some(EnumRecord {
        name: spec
            .field("name")
            .map(|n| n.text().to_string())
            .unwrap_or_default(),
        namespace: namespace.to_string(),
        documentation,
        values,
    })
}
