/*!
 * VFS Access Modes and Create Options
 * How a stream is opened and how a new file is created
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access requested when opening a file stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAccess {
    Read,
    Write,
    ReadWrite,
}

impl FileAccess {
    /// Whether the stream may be read from
    #[inline]
    #[must_use]
    pub const fn can_read(self) -> bool {
        matches!(self, FileAccess::Read | FileAccess::ReadWrite)
    }

    /// Whether the stream may be written to
    #[inline]
    #[must_use]
    pub const fn can_write(self) -> bool {
        matches!(self, FileAccess::Write | FileAccess::ReadWrite)
    }
}

impl fmt::Display for FileAccess {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FileAccess::Read => write!(f, "read"),
            FileAccess::Write => write!(f, "write"),
            FileAccess::ReadWrite => write!(f, "read-write"),
        }
    }
}

/// Options for [`FileSystem::create_file`](crate::vfs::FileSystem::create_file)
///
/// Defaults to a write-only stream with missing parents created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CreateOptions {
    pub read_write: bool,
    pub create_parents: bool,
}

impl CreateOptions {
    /// Read-write stream, parents created
    #[inline]
    #[must_use]
    pub fn read_write() -> Self {
        Self {
            read_write: true,
            ..Default::default()
        }
    }

    /// Fail with `DirectoryNotFound` instead of creating missing parents
    #[inline]
    #[must_use]
    pub fn without_parents(mut self) -> Self {
        self.create_parents = false;
        self
    }

    /// Access mode of the stream the create call hands back
    #[inline]
    #[must_use]
    pub fn access(&self) -> FileAccess {
        if self.read_write {
            FileAccess::ReadWrite
        } else {
            FileAccess::Write
        }
    }
}

impl Default for CreateOptions {
    fn default() -> Self {
        Self {
            read_write: false,
            create_parents: true,
        }
    }
}
