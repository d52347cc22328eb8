/*!
 * Shared Test Fixtures
 */

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use layered_vfs::vfs::{
    CreateOptions, DirectoryPath, FileAccess, FilePath, FileSystem, MemoryFileSystem, OpenFile,
    Pattern, VfsResult,
};

pub fn dir(p: &str) -> DirectoryPath {
    p.parse().unwrap()
}

pub fn file(p: &str) -> FilePath {
    p.parse().unwrap()
}

/// Memory filesystem that counts how often it is disposed
pub struct DisposeCounter {
    inner: MemoryFileSystem,
    disposed: Arc<AtomicUsize>,
}

impl DisposeCounter {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let disposed = Arc::new(AtomicUsize::new(0));
        let counter = Self {
            inner: MemoryFileSystem::new(),
            disposed: Arc::clone(&disposed),
        };
        (counter, disposed)
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

impl FileSystem for DisposeCounter {
    fn file_exists(&self, path: &FilePath) -> bool {
        self.inner.file_exists(path)
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        self.inner.directory_exists(path)
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        self.inner.create_directory(path)
    }

    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        self.inner.create_file(path, options)
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        self.inner.delete_file(path)
    }

    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()> {
        self.inner.delete_directory(path, recursive)
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        self.inner.open(path, access)
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.inner.child_directories(path, filter)
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        self.inner.child_files(path, filter)
    }

    fn name(&self) -> &str {
        "counter"
    }

    fn dispose(&self) {
        self.disposed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Filesystem whose enumeration answers with paths from somewhere else
pub struct StrayListing;

impl FileSystem for StrayListing {
    fn file_exists(&self, _path: &FilePath) -> bool {
        false
    }

    fn directory_exists(&self, _path: &DirectoryPath) -> bool {
        true
    }

    fn create_directory(&self, _path: &DirectoryPath) -> VfsResult<()> {
        Ok(())
    }

    fn create_file(&self, path: &FilePath, _options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        Err(layered_vfs::VfsError::AccessDenied(path.to_string()))
    }

    fn delete_file(&self, _path: &FilePath) -> VfsResult<()> {
        Ok(())
    }

    fn delete_directory(&self, _path: &DirectoryPath, _recursive: bool) -> VfsResult<()> {
        Ok(())
    }

    fn open(&self, path: &FilePath, _access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        Err(layered_vfs::VfsError::NotFound(path.to_string()))
    }

    fn child_directories(
        &self,
        _path: &DirectoryPath,
        _filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        Ok(vec![dir("/elsewhere/")])
    }

    fn child_files(&self, _path: &DirectoryPath, _filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        Ok(vec![file("/elsewhere.txt")])
    }

    fn name(&self) -> &str {
        "stray"
    }
}
