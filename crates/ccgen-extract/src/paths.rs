//! Lexical input path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize `path` without touching the file system.
///
/// Drops `.` components and folds `name/..` pairs. Leading `..` components
/// of relative paths are kept; `..` directly under the root is dropped.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}
