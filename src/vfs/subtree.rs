/*!
 * Subtree Filesystem
 * Presents an interior directory of another filesystem as a fresh root
 */

use std::sync::Arc;
use tracing::debug;

use super::path::{DirectoryPath, FilePath};
use super::traits::{FileSystem, OpenFile};
use super::types::*;

/// Re-rooting adapter
///
/// Inbound paths are prefixed with the base directory; outbound enumeration
/// results have it stripped again. No other policy is added, so every
/// success or failure comes straight from the parent.
///
/// The parent is shared, not owned: disposing a subtree leaves it alone.
pub struct SubtreeFileSystem {
    parent: Arc<dyn FileSystem>,
    base: DirectoryPath,
}

impl SubtreeFileSystem {
    /// Wrap `parent` at `base`. The base must exist now; it is not
    /// re-checked later.
    pub fn new(parent: Arc<dyn FileSystem>, base: DirectoryPath) -> VfsResult<Self> {
        if !parent.directory_exists(&base) {
            return Err(VfsError::NotFound(format!(
                "subtree base {} does not exist on {}",
                base,
                parent.name()
            )));
        }
        debug!(base = %base, parent = parent.name(), "Created subtree filesystem");
        Ok(Self { parent, base })
    }

    /// Directory of the parent that acts as this root
    pub fn base(&self) -> &DirectoryPath {
        &self.base
    }

    fn outside_base(&self, path: &dyn std::fmt::Display) -> VfsError {
        VfsError::InvalidPath(format!("{} is outside subtree base {}", path, self.base))
    }
}

impl FileSystem for SubtreeFileSystem {
    fn file_exists(&self, path: &FilePath) -> bool {
        self.parent.file_exists(&self.base.join_file(path))
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        self.parent.directory_exists(&self.base.join_directory(path))
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        self.parent.create_directory(&self.base.join_directory(path))
    }

    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        self.parent.create_file(&self.base.join_file(path), options)
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        self.parent.delete_file(&self.base.join_file(path))
    }

    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()> {
        self.parent
            .delete_directory(&self.base.join_directory(path), recursive)
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        self.parent.open(&self.base.join_file(path), access)
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.parent
            .child_directories(&self.base.join_directory(path), filter)?
            .into_iter()
            .map(|child| {
                child
                    .strip_prefix(&self.base)
                    .ok_or_else(|| self.outside_base(&child))
            })
            .collect()
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        self.parent
            .child_files(&self.base.join_directory(path), filter)?
            .into_iter()
            .map(|child| {
                child
                    .strip_prefix(&self.base)
                    .ok_or_else(|| self.outside_base(&child))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "subtree"
    }
}
