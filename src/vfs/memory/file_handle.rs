/*!
 * File Handle Implementation
 * In-memory stream that writes back to its node
 */

use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use tracing::warn;

use super::super::traits::OpenFile;
use super::super::types::*;
use super::node::Node;
use super::MemoryFileSystem;

/// In-memory file handle
pub(super) struct MemFile {
    pub fs: MemoryFileSystem,
    pub key: Vec<String>,
    pub cursor: Cursor<Vec<u8>>,
    pub access: FileAccess,
    pub dirty: bool,
}

impl MemFile {
    pub fn new(fs: MemoryFileSystem, key: Vec<String>, data: Vec<u8>, access: FileAccess) -> Self {
        Self {
            fs,
            key,
            cursor: Cursor::new(data),
            access,
            dirty: false,
        }
    }

    fn display_path(&self) -> String {
        format!("/{}", self.key.join("/"))
    }

    fn denied(&self, action: &str) -> std::io::Error {
        std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            format!("{} not opened for {}", self.display_path(), action),
        )
    }
}

impl Read for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if !self.access.can_read() {
            return Err(self.denied("reading"));
        }
        self.cursor.read(buf)
    }
}

impl Write for MemFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if !self.access.can_write() {
            return Err(self.denied("writing"));
        }
        self.dirty = true;
        self.cursor.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.sync()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl Seek for MemFile {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.cursor.seek(pos)
    }
}

impl OpenFile for MemFile {
    fn access(&self) -> FileAccess {
        self.access
    }

    fn sync(&mut self) -> VfsResult<()> {
        if !self.dirty {
            return Ok(());
        }
        let mut nodes = self.fs.nodes.write();
        match nodes.get_mut(self.key.as_slice()) {
            Some(Node::File { data }) => {
                data.clone_from(self.cursor.get_ref());
                self.dirty = false;
                Ok(())
            }
            _ => Err(VfsError::NotFound(self.display_path())),
        }
    }

    fn set_len(&mut self, size: u64) -> VfsResult<()> {
        if !self.access.can_write() {
            return Err(VfsError::AccessDenied(format!(
                "{} not opened for writing",
                self.display_path()
            )));
        }
        let size = usize::try_from(size)
            .map_err(|_| VfsError::Io(format!("length {} too large", size)))?;
        self.cursor.get_mut().resize(size, 0);
        self.dirty = true;
        Ok(())
    }
}

impl Drop for MemFile {
    fn drop(&mut self) {
        // Auto-sync on drop if anything was written
        if let Err(e) = self.sync() {
            warn!(path = %self.display_path(), error = %e, "Dropping unsynced in-memory file");
        }
    }
}
