//! Size-guarded summarization of a vault tree

use crate::filter::IndexFilter;
use crate::vault::Folder;

use super::builder::{TreeBuilder, root_key};
use super::config::BuildOptions;
use super::node::{TreeNode, TreeSummary};

/// Maximum encoded summary size before degrading to the reduced,
/// statistics-only rendition. Protects the agent's context window.
pub const MAX_SUMMARY_BYTES: usize = 500_000;

/// Fixed schema description prepended to every summary.
pub const SCHEMA_PREAMBLE: &str = "\
The vault structure below is encoded as JSON. The root folder appears under \
the key \"vault\". Each folder object may contain:
- \"files\": names of the files directly inside the folder
- \"subFolders\": subfolder name mapped to that folder's object
- \"extensionCounts\": file counts per extension for the folder and all of \
its subfolders; files without an extension are counted as \"unknown\"
";

/// Produce the full summary string: schema preamble plus the JSON tree.
pub fn summarize(
    root: &Folder,
    filter: Option<&IndexFilter>,
    full_listing: bool,
) -> serde_json::Result<String> {
    let tree = summarize_tree(root, filter, full_listing)?;
    Ok(format!("{SCHEMA_PREAMBLE}\n{tree}"))
}

/// Encode the vault tree as JSON, degrading once to the reduced rendition
/// (no file name lists) when the full encoding exceeds
/// [`MAX_SUMMARY_BYTES`]. The reduced form carries strictly less data and
/// is returned as-is even if it is still large. The root key is always
/// present, as an explicit empty node when the whole vault is empty.
pub fn summarize_tree(
    root: &Folder,
    filter: Option<&IndexFilter>,
    full_listing: bool,
) -> serde_json::Result<String> {
    let encoded = encode(root, filter, true, full_listing)?;
    if encoded.len() > MAX_SUMMARY_BYTES {
        return encode(root, filter, false, full_listing);
    }
    Ok(encoded)
}

fn encode(
    root: &Folder,
    filter: Option<&IndexFilter>,
    include_files: bool,
    include_empty_folders: bool,
) -> serde_json::Result<String> {
    let options = BuildOptions {
        include_files,
        include_empty_folders,
    };
    let mut builder = TreeBuilder::new(options);
    if let Some(filter) = filter {
        builder = builder.with_filter(filter);
    }
    serde_json::to_string(&ensure_root(builder.build(root), root))
}

/// The tool output always shows the vault root, even when the build elided
/// an entirely empty vault.
fn ensure_root(mut summary: TreeSummary, root: &Folder) -> TreeSummary {
    if summary.is_empty() {
        summary.insert(root_key(root), TreeNode::default());
    }
    summary
}
