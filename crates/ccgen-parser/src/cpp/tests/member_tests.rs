use pretty_assertions::assert_eq;

use super::*;

// ════════════════════════════════════════════════════════════════
// Data members and access sections
// ════════════════════════════════════════════════════════════════

#[test]
fn class_members_default_to_private() {
    let unit = parse("class Account {\n    int balance;\npublic:\n    int id;\n};\n");
    let account = find_class(&unit.classes, "Account");
    assert_eq!(property_names(account, AccessLevel::Private), vec!["balance"]);
    assert_eq!(property_names(account, AccessLevel::Public), vec!["id"]);
}

#[test]
fn struct_members_default_to_public() {
    let unit = parse("struct Point {\n    int x;\nprotected:\n    int y;\n};\n");
    let point = find_class(&unit.classes, "Point");
    assert_eq!(property_names(point, AccessLevel::Public), vec!["x"]);
    assert_eq!(property_names(point, AccessLevel::Protected), vec!["y"]);
}

#[test]
fn methods_are_not_properties() {
    let unit = parse(
        "struct Service {\n    void start();\n    int count() const { return n; }\n    virtual void stop() = 0;\n    int n;\n};\n",
    );
    let service = find_class(&unit.classes, "Service");
    assert_eq!(property_names(service, AccessLevel::Public), vec!["n"]);
}

#[test]
fn property_types_are_captured() {
    let unit = parse(
        "struct Node {\n    std::string name;\n    const int id = 0;\n    Node* next;\n    float weights[3];\n    std::vector<int> ids;\n};\n",
    );
    let node = find_class(&unit.classes, "Node");
    let types: Vec<_> = node.properties[&AccessLevel::Public]
        .iter()
        .map(|p| (p.name.as_str(), p.type_name.as_str()))
        .collect();
    assert_eq!(
        types,
        vec![
            ("name", "std::string"),
            ("id", "const int"),
            ("next", "Node *"),
            ("weights", "float[3]"),
            ("ids", "std::vector<int>"),
        ]
    );
}

#[test]
fn multiple_declarators_share_documentation() {
    let unit = parse("struct Rect {\n    /// corner\n    int x, y;\n};\n");
    let rect = find_class(&unit.classes, "Rect");
    let props = &rect.properties[&AccessLevel::Public];
    assert_eq!(props.len(), 2);
    assert!(props.iter().all(|p| p.documentation == "/// corner"));
}

#[test]
fn default_value_is_not_part_of_type() {
    let unit = parse("struct Light {\n    Color color = Color::White;\n};\n");
    let light = find_class(&unit.classes, "Light");
    let prop = &light.properties[&AccessLevel::Public][0];
    assert_eq!(prop.name, "color");
    assert_eq!(prop.type_name, "Color");
}
