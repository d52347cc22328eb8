/*!
 * Directory Paths
 * Absolute directory locations; the only shape that can be the root
 */

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::file::FilePath;
use super::segments::{
    cached_parent, collect_segments, concat, impl_path_value, split_segments, Segments, SEPARATOR,
};
use super::VfsPath;
use crate::vfs::types::{VfsError, VfsResult};

/// Absolute directory location, rendered as `/a/b/` (root renders as `/`)
pub struct DirectoryPath {
    segments: Segments,
    parent: OnceLock<Box<DirectoryPath>>,
}

impl DirectoryPath {
    /// The zero-segment root
    pub fn root() -> Self {
        Self::from_trusted(Segments::from(Vec::new()))
    }

    /// Build from a segment list; each item is one segment
    pub fn new<I, S>(segments: I) -> VfsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_trusted(collect_segments(segments)?.into()))
    }

    /// Segments are already validated
    pub(crate) fn from_trusted(segments: Segments) -> Self {
        Self {
            segments,
            parent: OnceLock::new(),
        }
    }

    /// Child directory from one slash-delimited string, e.g. `"a/b"`
    pub fn append_directory(&self, path: &str) -> VfsResult<DirectoryPath> {
        let tail = split_segments(path)?;
        Ok(DirectoryPath::from_trusted(concat(&self.segments, &tail)))
    }

    /// Child directory from a segment list
    pub fn append_directories<I, S>(&self, segments: I) -> VfsResult<DirectoryPath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tail = collect_segments(segments)?;
        Ok(DirectoryPath::from_trusted(concat(&self.segments, &tail)))
    }

    /// File below this directory from one slash-delimited string, e.g. `"a/b.txt"`
    pub fn append_file(&self, path: &str) -> VfsResult<FilePath> {
        let tail = split_segments(path)?;
        Ok(FilePath::from_trusted(concat(&self.segments, &tail)))
    }

    /// File below this directory from a segment list; the last item names the file
    pub fn append_files<I, S>(&self, segments: I) -> VfsResult<FilePath>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tail = collect_segments(segments)?;
        if tail.is_empty() {
            return Err(VfsError::InvalidPath(format!(
                "no file segment appended to {}",
                self
            )));
        }
        Ok(FilePath::from_trusted(concat(&self.segments, &tail)))
    }

    /// Re-root `path` below this directory: `/base/` + `/x/` = `/base/x/`
    pub fn join_directory(&self, path: &DirectoryPath) -> DirectoryPath {
        DirectoryPath::from_trusted(concat(&self.segments, path.segments()))
    }

    /// Re-root `path` below this directory: `/base/` + `/x.txt` = `/base/x.txt`
    pub fn join_file(&self, path: &FilePath) -> FilePath {
        FilePath::from_trusted(concat(&self.segments, path.segments()))
    }

    /// Remove `base` from the front, `None` if this path is not under it
    pub fn strip_prefix(&self, base: &DirectoryPath) -> Option<DirectoryPath> {
        if !self.starts_with(base) {
            return None;
        }
        Some(self.skip(base.segment_count()))
    }

    /// Drop the first `count` segments
    pub(crate) fn skip(&self, count: usize) -> DirectoryPath {
        let count = count.min(self.segments.len());
        DirectoryPath::from_trusted(self.segments[count..].into())
    }
}

impl VfsPath for DirectoryPath {
    #[inline]
    fn segments(&self) -> &[String] {
        &self.segments
    }

    fn parent(&self) -> VfsResult<&DirectoryPath> {
        cached_parent(&self.segments, &self.parent, self)
    }
}

impl Default for DirectoryPath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", SEPARATOR)?;
        for segment in self.segments.iter() {
            write!(f, "{}{}", segment, SEPARATOR)?;
        }
        Ok(())
    }
}

impl FromStr for DirectoryPath {
    type Err = VfsError;

    /// Parse the textual form: `/` or `/a/b/`
    fn from_str(s: &str) -> VfsResult<Self> {
        if s == "/" {
            return Ok(Self::root());
        }
        let inner = s
            .strip_prefix(SEPARATOR)
            .and_then(|rest| rest.strip_suffix(SEPARATOR))
            .filter(|inner| !inner.is_empty())
            .ok_or_else(|| {
                VfsError::InvalidPath(format!(
                    "directory path must start and end with '{}': {:?}",
                    SEPARATOR, s
                ))
            })?;
        Self::new(inner.split(SEPARATOR))
    }
}

impl_path_value!(DirectoryPath);
