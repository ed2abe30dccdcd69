//! Documentation filter.
//!
//! A declaration is exported when it carries a non-empty documentation
//! string. The parser only records Doxygen-style comments as documentation
//! (`///`, `//!`, `/** */`, `/*! */` and the trailing `///<` member forms),
//! so plain `//` comments never trigger code generation.

/// Whether a documentation string marks its declaration for export.
#[must_use]
pub const fn has_documentation(doc: &str) -> bool {
    !doc.is_empty()
}

/// Whether a raw comment is a leading Doxygen comment.
///
/// `////` separator lines and the empty block `/**/` are not documentation.
#[must_use]
pub fn is_doc_comment(comment: &str) -> bool {
    let text = comment.trim_start();
    if text.starts_with("////") || text.starts_with("/**/") {
        return false;
    }
    text.starts_with("///")
        || text.starts_with("//!")
        || text.starts_with("/**")
        || text.starts_with("/*!")
}

/// Whether a raw comment is a trailing member comment (`int x; ///< doc`).
#[must_use]
pub fn is_trailing_doc_comment(comment: &str) -> bool {
    let text = comment.trim_start();
    ["///<", "//!<", "/**<", "/*!<"]
        .iter()
        .any(|marker| text.starts_with(marker))
}

/// Strip Doxygen markers from a raw comment, keeping the prose.
///
/// Each line loses its leading `///`, `//!`, `/**`, `*` or trailing `*/`;
/// blank lines at either end are dropped.
#[must_use]
pub fn uncomment(comment: &str) -> String {
    let lines: Vec<&str> = comment.lines().map(strip_line).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}

fn strip_line(line: &str) -> &str {
    let mut text = line.trim();
    for marker in ["///<", "//!<", "/**<", "/*!<", "///", "//!", "/**", "/*!", "//", "/*"] {
        if let Some(rest) = text.strip_prefix(marker) {
            text = rest;
            break;
        }
    }
    let text = text.strip_suffix("*/").unwrap_or(text).trim();
    text.strip_prefix("* ")
        .unwrap_or_else(|| text.strip_prefix('*').unwrap_or(text))
        .trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("/// Exported", true)]
    #[case("//! Exported", true)]
    #[case("/** Exported */", true)]
    #[case("/*! Exported */", true)]
    #[case("  /// indented", true)]
    #[case("// plain", false)]
    #[case("/* plain */", false)]
    #[case("//// separator", false)]
    #[case("/**/", false)]
    fn recognises_doc_comments(#[case] comment: &str, #[case] expected: bool) {
        assert_eq!(is_doc_comment(comment), expected);
    }

    #[rstest]
    #[case("///< member", true)]
    #[case("//!< member", true)]
    #[case("/**< member */", true)]
    #[case("/// leading", false)]
    fn recognises_trailing_comments(#[case] comment: &str, #[case] expected: bool) {
        assert_eq!(is_trailing_doc_comment(comment), expected);
    }

    #[test]
    fn empty_documentation_is_not_exported() {
        assert!(!has_documentation(""));
        assert!(has_documentation("/// tagged"));
    }

    #[test]
    fn uncomment_strips_line_markers() {
        assert_eq!(uncomment("/// First line\n/// Second line"), "First line\nSecond line");
    }

    #[test]
    fn uncomment_strips_block_markers() {
        let raw = "/**\n * Position in world space.\n * Units are meters.\n */";
        assert_eq!(uncomment(raw), "Position in world space.\nUnits are meters.");
    }

    #[test]
    fn uncomment_handles_trailing_member_comment() {
        assert_eq!(uncomment("///< speed in m/s"), "speed in m/s");
    }
}
