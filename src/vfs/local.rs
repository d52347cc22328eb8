/*!
 * Local Filesystem Backend
 * Leaf store that maps segments onto a host directory via std::fs
 */

use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use tracing::debug;

use super::path::{DirectoryPath, FilePath, VfsPath};
use super::traits::{FileSystem, OpenFile};
use super::types::*;

/// Local filesystem implementation using std::fs
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    /// Create new local filesystem rooted at specified host directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Host directory backing the root
    pub fn host_root(&self) -> &std::path::Path {
        &self.root
    }

    /// Map segments to a host path. `.` and `..` are refused so a path can
    /// never leave the root.
    fn resolve<P: VfsPath>(&self, path: &P) -> VfsResult<PathBuf> {
        let mut result = self.root.clone();
        for segment in path.segments() {
            if segment == "." || segment == ".." {
                return Err(VfsError::InvalidPath(format!(
                    "relative segment {:?} in {}",
                    segment, path
                )));
            }
            result.push(segment);
        }
        Ok(result)
    }

    fn parent_dir(&self, path: &FilePath) -> VfsResult<PathBuf> {
        self.resolve(path.parent()?)
    }

    fn list<T>(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
        want_dirs: bool,
        build: impl Fn(&str) -> VfsResult<T>,
    ) -> VfsResult<Vec<T>> {
        let full_path = self.resolve(path)?;
        if !full_path.is_dir() {
            return Err(VfsError::DirectoryNotFound(path.to_string()));
        }

        let entries = fs::read_dir(&full_path)
            .map_err(|e| VfsError::from_io(e, format!("read_dir {}", path)))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| VfsError::from_io(e, format!("read_dir {}", path)))?;
            let file_type = entry
                .file_type()
                .map_err(|e| VfsError::from_io(e, format!("file_type in {}", path)))?;
            if file_type.is_dir() != want_dirs {
                continue;
            }
            // Names that are not valid UTF-8 cannot be expressed as segments
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                debug!(dir = %path, name = ?entry.file_name(), "Skipping non UTF-8 host entry");
                continue;
            };
            // Segments are trimmed, so a padded name would not resolve back to this entry
            if name.trim().is_empty() || name.trim() != name {
                debug!(dir = %path, name = ?name, "Skipping host entry not expressible as a segment");
                continue;
            }
            if filter.matches(&name) {
                names.push(name);
            }
        }

        // read_dir order is platform dependent
        names.sort();
        names.iter().map(|name| build(name)).collect()
    }
}

impl FileSystem for LocalFileSystem {
    fn file_exists(&self, path: &FilePath) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        path.is_root() || self.resolve(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(&full_path)
            .map_err(|e| VfsError::from_io(e, format!("create_dir {}", path)))
    }

    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        let full_path = self.resolve(path)?;
        if full_path.exists() {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }

        let parent = self.parent_dir(path)?;
        if !parent.is_dir() {
            if !options.create_parents {
                return Err(VfsError::DirectoryNotFound(path.parent()?.to_string()));
            }
            fs::create_dir_all(&parent)
                .map_err(|e| VfsError::from_io(e, format!("create parent dirs for {}", path)))?;
        }

        let file = fs::OpenOptions::new()
            .read(options.read_write)
            .write(true)
            .create_new(true)
            .open(&full_path)
            .map_err(|e| VfsError::from_io(e, format!("create {}", path)))?;

        Ok(Box::new(LocalFile {
            file,
            access: options.access(),
        }))
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        let full_path = self.resolve(path)?;
        if !full_path.is_file() {
            return Ok(());
        }
        fs::remove_file(&full_path).map_err(|e| VfsError::from_io(e, format!("delete {}", path)))
    }

    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()> {
        if path.is_root() {
            return Err(VfsError::InvalidOperation(
                "the root directory cannot be deleted".to_string(),
            ));
        }
        let full_path = self.resolve(path)?;
        if !full_path.is_dir() {
            return Ok(());
        }

        if recursive {
            return fs::remove_dir_all(&full_path)
                .map_err(|e| VfsError::from_io(e, format!("remove_dir_all {}", path)));
        }

        let has_children = fs::read_dir(&full_path)
            .map_err(|e| VfsError::from_io(e, format!("read_dir {}", path)))?
            .next()
            .is_some();
        if has_children {
            return Err(VfsError::DirectoryNotEmpty(path.to_string()));
        }
        fs::remove_dir(&full_path).map_err(|e| VfsError::from_io(e, format!("remove_dir {}", path)))
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        let full_path = self.resolve(path)?;

        // std opens directories for reading on unix
        if full_path.is_dir() {
            return Err(if access.can_write() {
                VfsError::AlreadyExists(format!("a directory occupies {}", path))
            } else {
                VfsError::NotFound(path.to_string())
            });
        }
        if access.can_write() && !full_path.exists() && !self.parent_dir(path)?.is_dir() {
            return Err(VfsError::DirectoryNotFound(path.parent()?.to_string()));
        }

        let file = fs::OpenOptions::new()
            .read(access.can_read())
            .write(access.can_write())
            .create(access.can_write())
            .open(&full_path)
            .map_err(|e| VfsError::from_io(e, path.to_string()))?;

        Ok(Box::new(LocalFile { file, access }))
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.list(path, filter, true, |name| path.append_directories([name]))
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        self.list(path, filter, false, |name| path.append_files([name]))
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Local file handle
struct LocalFile {
    file: fs::File,
    access: FileAccess,
}

impl Read for LocalFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for LocalFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.file.flush()
    }
}

impl Seek for LocalFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.file.seek(pos)
    }
}

impl OpenFile for LocalFile {
    fn access(&self) -> FileAccess {
        self.access
    }

    fn sync(&mut self) -> VfsResult<()> {
        if !self.access.can_write() {
            return Ok(());
        }
        self.file
            .sync_all()
            .map_err(|e| VfsError::Io(format!("sync: {}", e)))
    }

    fn set_len(&mut self, size: u64) -> VfsResult<()> {
        if !self.access.can_write() {
            return Err(VfsError::AccessDenied("file not opened for writing".to_string()));
        }
        self.file
            .set_len(size)
            .map_err(|e| VfsError::Io(format!("set_len: {}", e)))
    }
}
