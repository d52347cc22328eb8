/*!
 * File Paths
 * Absolute file locations; always at least one segment
 */

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::directory::DirectoryPath;
use super::segments::{cached_parent, collect_segments, impl_path_value, Segments, SEPARATOR};
use super::VfsPath;
use crate::vfs::types::{VfsError, VfsResult};

/// Absolute file location, rendered as `/a/b.txt`
pub struct FilePath {
    segments: Segments,
    parent: OnceLock<Box<DirectoryPath>>,
}

impl FilePath {
    /// Build from a segment list; the last item names the file
    pub fn new<I, S>(segments: I) -> VfsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = collect_segments(segments)?;
        if segments.is_empty() {
            return Err(VfsError::InvalidPath(
                "a file path needs at least one segment".to_string(),
            ));
        }
        Ok(Self::from_trusted(segments.into()))
    }

    /// Segments are already validated and non-empty
    pub(crate) fn from_trusted(segments: Segments) -> Self {
        debug_assert!(!segments.is_empty(), "file path without segments");
        Self {
            segments,
            parent: OnceLock::new(),
        }
    }

    /// File name (last segment)
    pub fn file_name(&self) -> &str {
        // Non-empty by construction
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Remove `base` from the front, `None` if this file is not strictly below it
    pub fn strip_prefix(&self, base: &DirectoryPath) -> Option<FilePath> {
        if !self.starts_with(base) || self.segment_count() == base.segment_count() {
            return None;
        }
        Some(self.skip(base.segment_count()))
    }

    /// Drop the first `count` segments; at least the file name is kept
    pub(crate) fn skip(&self, count: usize) -> FilePath {
        let count = count.min(self.segments.len() - 1);
        FilePath::from_trusted(self.segments[count..].into())
    }
}

impl VfsPath for FilePath {
    #[inline]
    fn segments(&self) -> &[String] {
        &self.segments
    }

    fn parent(&self) -> VfsResult<&DirectoryPath> {
        cached_parent(&self.segments, &self.parent, self)
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for segment in self.segments.iter() {
            write!(f, "{}{}", SEPARATOR, segment)?;
        }
        Ok(())
    }
}

impl FromStr for FilePath {
    type Err = VfsError;

    /// Parse the textual form: `/a/b.txt`
    fn from_str(s: &str) -> VfsResult<Self> {
        let inner = s
            .strip_prefix(SEPARATOR)
            .filter(|inner| !inner.is_empty() && !inner.ends_with(SEPARATOR))
            .ok_or_else(|| {
                VfsError::InvalidPath(format!(
                    "file path must start with '{}' and not end with it: {:?}",
                    SEPARATOR, s
                ))
            })?;
        Self::new(inner.split(SEPARATOR))
    }
}

impl_path_value!(FilePath);
