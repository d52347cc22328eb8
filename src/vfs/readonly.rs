/*!
 * Read-Only Filesystem
 * Pass-through adapter that rejects every mutation
 */

use std::sync::Arc;
use tracing::debug;

use super::path::{DirectoryPath, FilePath};
use super::traits::{FileSystem, OpenFile};
use super::types::*;

/// Read-only adapter
///
/// Existence checks, enumeration and `Read` opens go to the base unchanged.
/// Creation, deletion and writable opens fail with `AccessDenied` without
/// consulting the base. The base is shared, not owned.
pub struct ReadOnlyFileSystem {
    base: Arc<dyn FileSystem>,
}

impl ReadOnlyFileSystem {
    pub fn new(base: Arc<dyn FileSystem>) -> Self {
        Self { base }
    }

    /// The wrapped filesystem
    pub fn inner(&self) -> &Arc<dyn FileSystem> {
        &self.base
    }

    fn denied(&self, operation: &str, path: &dyn std::fmt::Display) -> VfsError {
        debug!(operation, path = %path, "Rejected write on read-only filesystem");
        VfsError::AccessDenied(format!("{} {}: filesystem is read-only", operation, path))
    }
}

impl FileSystem for ReadOnlyFileSystem {
    fn root(&self) -> DirectoryPath {
        self.base.root()
    }

    fn file_exists(&self, path: &FilePath) -> bool {
        self.base.file_exists(path)
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        self.base.directory_exists(path)
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        Err(self.denied("create", path))
    }

    fn create_file(&self, path: &FilePath, _options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        Err(self.denied("create", path))
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        Err(self.denied("delete", path))
    }

    fn delete_directory(&self, path: &DirectoryPath, _recursive: bool) -> VfsResult<()> {
        Err(self.denied("delete", path))
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        match access {
            FileAccess::Read => self.base.open(path, access),
            FileAccess::Write | FileAccess::ReadWrite => {
                Err(self.denied(&format!("open ({})", access), path))
            }
        }
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.base.child_directories(path, filter)
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        self.base.child_files(path, filter)
    }

    fn name(&self) -> &str {
        "readonly"
    }
}
