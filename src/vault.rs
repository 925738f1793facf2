//! In-memory vault hierarchy and disk snapshot loading

use std::io;
use std::path::Path;

use ignore::WalkBuilder;

/// One entry in the vault hierarchy, discriminated at the boundary.
#[derive(Debug, Clone)]
pub enum VaultEntry {
    Folder(Folder),
    File(File),
}

/// A folder node with its direct children in iteration order.
#[derive(Debug, Clone)]
pub struct Folder {
    /// Folder name. Empty for the vault root.
    pub name: String,
    pub children: Vec<VaultEntry>,
}

/// A file node. `path` is vault-relative with `/` separators and is
/// consumed only by the filter.
#[derive(Debug, Clone)]
pub struct File {
    pub name: String,
    pub path: String,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a file child.
    pub fn push_file(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.children.push(VaultEntry::File(File {
            name: name.into(),
            path: path.into(),
        }));
    }

    /// Append a folder child and return a mutable reference to it.
    pub fn push_folder(&mut self, name: impl Into<String>) -> &mut Folder {
        self.children.push(VaultEntry::Folder(Folder::new(name)));
        match self.children.last_mut() {
            Some(VaultEntry::Folder(folder)) => folder,
            _ => unreachable!("just pushed a folder"),
        }
    }

    /// Snapshot a real directory into an in-memory vault hierarchy.
    ///
    /// Hidden entries and gitignored files are skipped; entries are sorted
    /// by file name so repeated snapshots of an unchanged directory are
    /// identical. Unreadable entries are skipped rather than fatal. The
    /// root folder gets the empty name.
    pub fn from_disk(root: &Path) -> io::Result<Folder> {
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {}", root.display()),
            ));
        }

        let mut vault = Folder::new("");
        let walker = WalkBuilder::new(root)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker.flatten() {
            let path = entry.path();
            if path == root {
                continue;
            }
            let Ok(rel) = path.strip_prefix(root) else {
                continue;
            };
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                vault.folder_at_mut(rel);
                continue;
            }

            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let rel_path = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let parent = match rel.parent() {
                Some(p) => vault.folder_at_mut(p),
                None => &mut vault,
            };
            parent.push_file(name, rel_path);
        }

        Ok(vault)
    }

    /// Walk down to the folder at `rel`, creating intermediate folders.
    fn folder_at_mut(&mut self, rel: &Path) -> &mut Folder {
        let mut components = rel.components();
        let Some(component) = components.next() else {
            return self;
        };
        let name = component.as_os_str().to_string_lossy().to_string();
        let index = self
            .children
            .iter()
            .position(|child| matches!(child, VaultEntry::Folder(f) if f.name == name));
        let index = match index {
            Some(i) => i,
            None => {
                self.children.push(VaultEntry::Folder(Folder::new(name)));
                self.children.len() - 1
            }
        };
        match &mut self.children[index] {
            VaultEntry::Folder(folder) => folder.folder_at_mut(components.as_path()),
            _ => unreachable!("position matched a folder"),
        }
    }
}
