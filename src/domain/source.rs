//! Source units and module-path derivation.

use std::path::{Component, Path};

/// File extension of scanned sources.
pub const SOURCE_EXTENSION: &str = "rs";

/// Filename that stands for its containing directory's module.
pub const MODULE_MARKER: &str = "mod.rs";

/// Module path used when a marker file sits directly in the scanned root.
pub const ROOT_MODULE: &str = "crate";

/// One scanned file: its module path and decoded text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub module_path: String,
    pub text: String,
}

impl SourceUnit {
    pub fn new(module_path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            text: text.into(),
        }
    }

    /// Build a unit from raw file bytes. Invalid UTF-8 is replaced, never fatal.
    pub fn from_bytes(module_path: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(module_path, String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Derive the `::`-separated module path of `file` relative to `root`.
///
/// `a/b/mod.rs` maps to `a::b`, `a/b/c.rs` to `a::b::c`. Returns `None` when
/// `file` is not beneath `root`.
pub fn module_path(file: &Path, root: &Path) -> Option<String> {
    let rel = file.strip_prefix(root).ok()?;

    let mut parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let last = parts.pop()?;
    if last != MODULE_MARKER {
        let stem = Path::new(&last)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(last);
        parts.push(stem);
    }

    if parts.is_empty() {
        return Some(ROOT_MODULE.to_string());
    }
    Some(parts.join("::"))
}
