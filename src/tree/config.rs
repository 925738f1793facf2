//! Configuration for tree building

/// Options controlling one build pass.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// List qualifying file names per folder. Disabled for the reduced,
    /// statistics-only rendition.
    pub include_files: bool,
    /// Preserve folders that end up with no statistics and no subfolders
    /// as explicit empty nodes instead of eliding them.
    pub include_empty_folders: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            include_files: true,
            include_empty_folders: false,
        }
    }
}
