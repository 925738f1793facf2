//! Serializable summary types for the vault tree

use std::collections::BTreeMap;

use serde::Serialize;

/// Key the unnamed vault root serializes under.
pub const VAULT_ROOT_KEY: &str = "vault";

/// Extension-count key for files without a usable extension.
pub const UNKNOWN_EXTENSION: &str = "unknown";

/// The outermost build result: at most one entry, keyed by the folder's
/// name (or [`VAULT_ROOT_KEY`] for the unnamed root). Empty when the
/// folder was elided.
pub type TreeSummary = BTreeMap<String, TreeNode>;

/// Summary of one folder. Every present field is non-empty; an explicitly
/// preserved empty folder carries no fields and serializes as `{}`.
/// BTreeMaps keep re-serialization of an unchanged vault byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Names of qualifying files directly in this folder, in child
    /// iteration order. Absent in the reduced, statistics-only rendition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Non-empty subfolder summaries by name.
    #[serde(rename = "subFolders", skip_serializing_if = "Option::is_none")]
    pub sub_folders: Option<BTreeMap<String, TreeNode>>,

    /// Per-extension file counts for this folder and all descendants.
    #[serde(rename = "extensionCounts", skip_serializing_if = "Option::is_none")]
    pub extension_counts: Option<BTreeMap<String, u64>>,
}

impl TreeNode {
    /// True when the node carries no information at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_none() && self.sub_folders.is_none() && self.extension_counts.is_none()
    }
}

/// Histogram key for a file name: the substring after the last `.`,
/// lowercased. No dot, or nothing after it, counts as `"unknown"`.
pub fn extension_key(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
        _ => UNKNOWN_EXTENSION.to_string(),
    }
}
