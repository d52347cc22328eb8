/*!
 * Child Paths
 * Mixed enumeration results; matching is the kind test
 */

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DirectoryPath, FilePath, VfsPath};

/// An enumerated child: either a directory or a file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum ChildPath {
    Directory(DirectoryPath),
    File(FilePath),
}

impl ChildPath {
    pub fn segments(&self) -> &[String] {
        match self {
            ChildPath::Directory(d) => d.segments(),
            ChildPath::File(f) => f.segments(),
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryPath> {
        match self {
            ChildPath::Directory(d) => Some(d),
            ChildPath::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FilePath> {
        match self {
            ChildPath::File(f) => Some(f),
            ChildPath::Directory(_) => None,
        }
    }

    pub fn into_directory(self) -> Option<DirectoryPath> {
        match self {
            ChildPath::Directory(d) => Some(d),
            ChildPath::File(_) => None,
        }
    }

    pub fn into_file(self) -> Option<FilePath> {
        match self {
            ChildPath::File(f) => Some(f),
            ChildPath::Directory(_) => None,
        }
    }
}

impl From<DirectoryPath> for ChildPath {
    fn from(path: DirectoryPath) -> Self {
        ChildPath::Directory(path)
    }
}

impl From<FilePath> for ChildPath {
    fn from(path: FilePath) -> Self {
        ChildPath::File(path)
    }
}

impl fmt::Display for ChildPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChildPath::Directory(d) => fmt::Display::fmt(d, f),
            ChildPath::File(file) => fmt::Display::fmt(file, f),
        }
    }
}
