use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;
use crate::parser::parse_source;
use ccgen_core::{AccessLevel, ClassRecord, EnumRecord};

mod member_tests;

fn parse(source: &str) -> HeaderUnit {
    extract(&parse_source(source))
}

fn find_class<'a>(classes: &'a [ClassRecord], name: &str) -> &'a ClassRecord {
    classes.iter().find(|c| c.name == name).unwrap_or_else(|| {
        let available: Vec<_> = classes.iter().map(|c| c.name.as_str()).collect();
        panic!("class {name:?} not found; available: {available:?}")
    })
}

fn find_enum<'a>(enums: &'a [EnumRecord], name: &str) -> &'a EnumRecord {
    enums.iter().find(|e| e.name == name).unwrap_or_else(|| {
        let available: Vec<_> = enums.iter().map(|e| e.name.as_str()).collect();
        panic!("enum {name:?} not found; available: {available:?}")
    })
}

fn property_names(class: &ClassRecord, access: AccessLevel) -> Vec<&str> {
    class
        .properties
        .get(&access)
        .map(|props| props.iter().map(|p| p.name.as_str()).collect())
        .unwrap_or_default()
}

#[test]
fn strict_mode_rejects_syntax_errors() {
    let parser = AstGrepHeaderParser::new(ParserOptions { strict: true });
    let err = parser
        .parse_str(Path::new("broken.hh"), "struct Broken { int x; };\n@@@ $$$\n")
        .unwrap_err();
    assert!(matches!(err, ParserError::Syntax { .. }), "got {err:?}");
}

#[test]
fn lenient_mode_keeps_going_on_syntax_errors() {
    let parser = AstGrepHeaderParser::default();
    let unit = parser
        .parse_str(
            Path::new("partial.hh"),
            "/// ok\nstruct Fine { int a; };\n@@@ $$$\n",
        )
        .expect("lenient parse succeeds");
    assert!(unit.classes.iter().any(|c| c.name == "Fine"));
}

#[test]
fn clean_source_passes_strict_mode() {
    let parser = AstGrepHeaderParser::new(ParserOptions { strict: true });
    let unit = parser
        .parse_str(Path::new("clean.hh"), "struct Clean { int a; };")
        .expect("strict parse succeeds");
    assert_eq!(unit.classes.len(), 1);
}
