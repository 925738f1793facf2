//! Test utilities for creating temporary vaults.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::vault::Folder;

/// A temporary vault directory for testing.
///
/// Provides methods for creating files and folders and snapshotting the
/// result. The directory is automatically cleaned up when dropped.
pub struct TestVault {
    dir: TempDir,
}

impl TestVault {
    /// Create a new empty temporary vault.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the vault root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent folders as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty folder.
    pub fn add_folder(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create folder");
        full_path
    }

    /// Snapshot the vault into an in-memory hierarchy.
    pub fn snapshot(&self) -> Folder {
        Folder::from_disk(self.dir.path()).expect("Failed to snapshot vault")
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}
