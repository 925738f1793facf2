//! TreeBuilder - folds a vault hierarchy into a compact summary

use std::collections::BTreeMap;

use crate::filter::IndexFilter;
use crate::vault::{Folder, VaultEntry};

use super::config::BuildOptions;
use super::node::{TreeNode, TreeSummary, VAULT_ROOT_KEY, extension_key};

/// Builds the per-folder summary tree in a single post-order pass,
/// folding extension counts upward as it returns.
pub struct TreeBuilder<'a> {
    options: BuildOptions,
    filter: Option<&'a IndexFilter>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            filter: None,
        }
    }

    /// Restrict indexing to files the filter keeps. Without a filter every
    /// file qualifies.
    pub fn with_filter(mut self, filter: &'a IndexFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Summarize `root`. The result has at most one entry: the root's name
    /// (or `"vault"` when the root is unnamed) mapped to its node. An empty
    /// root is elided entirely unless `include_empty_folders` is set.
    pub fn build(&self, root: &Folder) -> TreeSummary {
        let mut summary = TreeSummary::new();
        if let Some(node) = self.build_folder(root) {
            summary.insert(root_key(root), node);
        }
        summary
    }

    /// Summarize one folder, or `None` when it is empty under the current
    /// filter and empty folders are not preserved. An empty folder that is
    /// preserved comes back as a field-less node and contributes nothing
    /// to its parent's counts.
    fn build_folder(&self, folder: &Folder) -> Option<TreeNode> {
        let mut files = Vec::new();
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        let mut sub_folders = BTreeMap::new();

        for child in &folder.children {
            match child {
                VaultEntry::File(file) => {
                    if self.filter.is_some_and(|f| !f.decide(file)) {
                        continue;
                    }
                    if self.options.include_files {
                        files.push(file.name.clone());
                    }
                    *counts.entry(extension_key(&file.name)).or_insert(0) += 1;
                }
                VaultEntry::Folder(child_folder) => {
                    let Some(node) = self.build_folder(child_folder) else {
                        continue;
                    };
                    if let Some(child_counts) = &node.extension_counts {
                        for (ext, count) in child_counts {
                            *counts.entry(ext.clone()).or_insert(0) += count;
                        }
                    }
                    sub_folders.insert(child_folder.name.clone(), node);
                }
            }
        }

        // A folder with qualifying files always has counts, so emptiness
        // is fully captured by the histogram/subfolder check.
        if counts.is_empty() && sub_folders.is_empty() {
            return self.options.include_empty_folders.then(TreeNode::default);
        }

        Some(TreeNode {
            files: (self.options.include_files && !files.is_empty()).then_some(files),
            sub_folders: (!sub_folders.is_empty()).then_some(sub_folders),
            extension_counts: (!counts.is_empty()).then_some(counts),
        })
    }
}

/// Name a folder serializes under at the top level. The unnamed root falls
/// back to `"vault"`; this is decided once here, never inside the recursion.
pub fn root_key(folder: &Folder) -> String {
    if folder.name.is_empty() {
        VAULT_ROOT_KEY.to_string()
    } else {
        folder.name.clone()
    }
}
