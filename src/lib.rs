//! Vaultmap - summarize a note vault's folder tree as compact JSON for LLM agents

pub mod filter;
pub mod tree;
pub mod vault;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use filter::IndexFilter;
pub use tree::{
    BuildOptions, MAX_SUMMARY_BYTES, SCHEMA_PREAMBLE, TreeBuilder, TreeNode, TreeSummary,
    summarize, summarize_tree,
};
pub use vault::{File, Folder, VaultEntry};
