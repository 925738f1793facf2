//! Vault tree summarization
//!
//! This module turns an in-memory vault hierarchy into the compact JSON
//! summary handed to the agent:
//!
//! - `TreeBuilder`: single-pass post-order build with bottom-up
//!   extension-count aggregation and empty-folder elision
//! - `summarize` / `summarize_tree`: size-guarded encoding that degrades
//!   to a statistics-only rendition when the full listing is too large

mod builder;
mod config;
mod guard;
mod node;

pub use builder::{TreeBuilder, root_key};
pub use config::BuildOptions;
pub use guard::{MAX_SUMMARY_BYTES, SCHEMA_PREAMBLE, summarize, summarize_tree};
pub use node::{TreeNode, TreeSummary, UNKNOWN_EXTENSION, VAULT_ROOT_KEY, extension_key};
