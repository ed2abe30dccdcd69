//! Doxygen comment collection from sibling nodes.

use ast_grep_core::Node;
use ccgen_core::docs::{is_doc_comment, is_trailing_doc_comment};

/// Collect the Doxygen comments directly above `siblings[idx]`.
///
/// Walks backwards over adjacent comment siblings. The run stops at a blank
/// line, a plain (non-Doxygen) comment, or a comment that trails the
/// previous declaration on its own line. The raw comment text is returned,
/// one comment per line, in source order.
pub(super) fn collect_doc_comment<D: ast_grep_core::Doc>(
    siblings: &[Node<D>],
    idx: usize,
) -> String {
    let mut comments = Vec::new();
    let mut next_start = siblings[idx].start_pos().line();

    let mut i = idx;
    while i > 0 {
        i -= 1;
        let sibling = &siblings[i];
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        let text = sibling.text();
        if is_trailing_doc_comment(&text) || !is_doc_comment(&text) {
            break;
        }
        if next_start > sibling.end_pos().line() + 1 {
            break;
        }
        if i > 0 && trails_previous(&siblings[i - 1], sibling) {
            break;
        }
        comments.push(text.trim().to_string());
        next_start = sibling.start_pos().line();
    }
    comments.reverse();
    comments.join("\n")
}

/// A `///<` comment on the same line right after `siblings[idx]`.
pub(super) fn trailing_doc_comment<D: ast_grep_core::Doc>(
    siblings: &[Node<D>],
    idx: usize,
) -> Option<String> {
    let owner = &siblings[idx];
    let next = siblings.get(idx + 1)?;
    let text = next.text();
    (next.kind().as_ref() == "comment"
        && next.start_pos().line() == owner.end_pos().line()
        && is_trailing_doc_comment(&text))
    .then(|| text.trim().to_string())
}

fn trails_previous<D: ast_grep_core::Doc>(previous: &Node<D>, comment: &Node<D>) -> bool {
    let kind = previous.kind();
    let kind = kind.as_ref();
    // Directive lines end after their newline, and a condition name can
    // only be followed by a comment that opens the block.
    let directive = kind.starts_with('#')
        || kind.starts_with("preproc")
        || matches!(kind, "identifier" | "\n");
    !directive
        && !matches!(kind, "comment" | "{" | ":")
        && previous.end_pos().line() == comment.start_pos().line()
}
