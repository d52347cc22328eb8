/*!
 * VFS Traits
 * The contract every leaf store and adapter implements
 */

use std::io::{Read, Seek, Write};

use super::path::{ChildPath, DirectoryPath, FilePath};
use super::types::*;

/// Virtual filesystem trait
///
/// Implemented by leaf stores that perform real I/O and by adapters that
/// rewrite paths or gate operations before delegating. Every call is a single
/// synchronous unit; nothing is retried or cached by the contract itself.
///
/// Leaves and adapters report failures with the same [`VfsError`] variants so
/// an adapter can propagate a child's error untouched.
pub trait FileSystem: Send + Sync {
    /// Origin of this filesystem's namespace
    fn root(&self) -> DirectoryPath {
        DirectoryPath::root()
    }

    /// Whether a file exists. Never fails.
    fn file_exists(&self, path: &FilePath) -> bool;

    /// Whether a directory exists. Never fails; the root always exists.
    fn directory_exists(&self, path: &DirectoryPath) -> bool;

    /// Kind-dispatching existence check for mixed results
    fn exists(&self, path: &ChildPath) -> bool {
        match path {
            ChildPath::Directory(d) => self.directory_exists(d),
            ChildPath::File(f) => self.file_exists(f),
        }
    }

    /// Create a directory and any missing ancestors; no-op if present
    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()>;

    /// Create a file that must not exist yet and open it for writing
    ///
    /// Fails with `AlreadyExists` if the file exists, and with
    /// `DirectoryNotFound` if the parent is missing and
    /// `options.create_parents` is false.
    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>>;

    /// Remove a file; no-op if absent
    fn delete_file(&self, path: &FilePath) -> VfsResult<()>;

    /// Remove a directory; no-op if absent
    ///
    /// A directory with children fails with `DirectoryNotEmpty` unless
    /// `recursive` is set.
    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()>;

    /// Open a stream. `Read` fails with `NotFound` on a missing file;
    /// `Write` and `ReadWrite` create it.
    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>>;

    /// Immediate child directories whose name matches `filter`
    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>>;

    /// Immediate child files whose name matches `filter`
    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>>;

    /// Immediate children of both kinds, directories first
    fn child_paths(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<ChildPath>> {
        let mut children: Vec<ChildPath> = self
            .child_directories(path, filter)?
            .into_iter()
            .map(ChildPath::from)
            .collect();
        children.extend(self.child_files(path, filter)?.into_iter().map(ChildPath::from));
        Ok(children)
    }

    /// Filesystem name/type
    fn name(&self) -> &str;

    /// Release owned resources. Must be idempotent; adapters that only
    /// reference their inner filesystem leave it alone.
    fn dispose(&self) {}
}

/// Open file stream
///
/// Pending writes reach the store on [`sync`](OpenFile::sync) and when the
/// handle is dropped.
pub trait OpenFile: Read + Write + Seek + Send {
    /// Access the stream was opened with
    fn access(&self) -> FileAccess;

    /// Flush buffered data to the backing store
    fn sync(&mut self) -> VfsResult<()>;

    /// Truncate or extend the stream
    fn set_len(&mut self, size: u64) -> VfsResult<()>;
}

/// Whole-file helpers available on every filesystem
pub trait FileSystemExt: FileSystem {
    /// Read a file to the end
    fn read_all(&self, path: &FilePath) -> VfsResult<Vec<u8>> {
        let mut file = self.open(path, FileAccess::Read)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| VfsError::from_io(e, path.to_string()))?;
        Ok(data)
    }

    /// Replace a file's contents, creating it if needed
    fn write_all(&self, path: &FilePath, data: &[u8]) -> VfsResult<()> {
        let mut file = self.open(path, FileAccess::Write)?;
        file.set_len(0)?;
        file.write_all(data)
            .map_err(|e| VfsError::from_io(e, path.to_string()))?;
        file.sync()
    }
}

impl<T: FileSystem + ?Sized> FileSystemExt for T {}
