//! Data member extraction from `field_declaration` nodes.

use ast_grep_core::Node;
use ccgen_core::PropertyRecord;

/// Properties declared by one `field_declaration`.
///
/// `int x, *y;` yields two properties sharing `documentation`; method
/// declarations yield none.
pub(super) fn collect_properties<D: ast_grep_core::Doc>(
    decl: &Node<D>,
    documentation: &str,
) -> Vec<PropertyRecord> {
    let children: Vec<_> = decl.children().collect();
    let base_type = declared_type(&children);

    children
        .iter()
        .filter(|c| is_declarator(c.kind().as_ref()))
        .filter_map(unwrap_declarator)
        .map(|(name, suffix)| PropertyRecord {
            name,
            type_name: join_type(&base_type, &suffix),
            documentation: documentation.to_string(),
        })
        .collect()
}

/// Type qualifiers plus the declared type, whitespace-normalized.
///
/// Only nodes before the first declarator count; default values follow it.
fn declared_type<D: ast_grep_core::Doc>(children: &[Node<D>]) -> String {
    let mut parts = Vec::new();
    for child in children {
        match child.kind().as_ref() {
            kind if is_declarator(kind) => break,
            "type_qualifier"
            | "primitive_type"
            | "type_identifier"
            | "sized_type_specifier"
            | "qualified_identifier"
            | "template_type"
            | "placeholder_type_specifier"
            | "decltype" => parts.push(normalize_whitespace(&child.text())),
            "class_specifier" | "struct_specifier" | "enum_specifier" | "union_specifier" => {
                // Inline definitions contribute only their name.
                if let Some(name) = child.field("name") {
                    parts.push(name.text().to_string());
                }
            }
            _ => {}
        }
    }
    parts.join(" ")
}

fn is_declarator(kind: &str) -> bool {
    matches!(
        kind,
        "field_identifier"
            | "pointer_declarator"
            | "reference_declarator"
            | "array_declarator"
            | "function_declarator"
            | "init_declarator"
            | "parenthesized_declarator"
            | "attributed_declarator"
    )
}

/// Resolve a declarator to `(name, type suffix)`.
///
/// Returns `None` for function declarators (methods).
fn unwrap_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, String)> {
    match node.kind().as_ref() {
        "field_identifier" | "identifier" => Some((node.text().to_string(), String::new())),
        "pointer_declarator" => {
            inner_declarator(node).map(|(name, suffix)| (name, format!("*{suffix}")))
        }
        "reference_declarator" => {
            let marker = if node.text().trim_start().starts_with("&&") {
                "&&"
            } else {
                "&"
            };
            inner_declarator(node).map(|(name, suffix)| (name, format!("{marker}{suffix}")))
        }
        "array_declarator" => {
            let size = node
                .field("size")
                .map(|s| s.text().to_string())
                .unwrap_or_default();
            inner_declarator(node).map(|(name, suffix)| (name, format!("{suffix}[{size}]")))
        }
        "init_declarator" | "parenthesized_declarator" | "attributed_declarator" => {
            inner_declarator(node)
        }
        _ => None,
    }
}

fn inner_declarator<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<(String, String)> {
    node.children()
        .find(|c| is_declarator(c.kind().as_ref()))
        .and_then(|inner| unwrap_declarator(&inner))
}

fn join_type(base: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        base.to_string()
    } else if suffix.starts_with('[') {
        format!("{base}{suffix}")
    } else {
        format!("{base} {suffix}")
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
