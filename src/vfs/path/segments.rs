/*!
 * Segment Validation
 * Trimming, validation and splitting shared by both path shapes
 */

use std::sync::{Arc, OnceLock};

use super::DirectoryPath;
use crate::vfs::types::{VfsError, VfsResult};

pub(super) type Segments = Arc<[String]>;

pub(super) const SEPARATOR: char = '/';

/// Trim and validate a single segment
pub(super) fn normalize_segment(raw: &str) -> VfsResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(VfsError::InvalidPath(format!(
            "path segment is empty: {:?}",
            raw
        )));
    }
    if trimmed.contains(SEPARATOR) {
        return Err(VfsError::InvalidPath(format!(
            "path segment contains '{}': {:?}",
            SEPARATOR, raw
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a segment list, one item per segment
pub(super) fn collect_segments<I, S>(segments: I) -> VfsResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    segments
        .into_iter()
        .map(|s| normalize_segment(s.as_ref()))
        .collect()
}

/// Split one slash-delimited string into validated segments.
/// A single leading and trailing separator is ignored.
pub(super) fn split_segments(path: &str) -> VfsResult<Vec<String>> {
    let inner = path.trim();
    let inner = inner.strip_prefix(SEPARATOR).unwrap_or(inner);
    let inner = inner.strip_suffix(SEPARATOR).unwrap_or(inner);
    if inner.trim().is_empty() {
        return Err(VfsError::InvalidPath(format!("no segments in {:?}", path)));
    }
    collect_segments(inner.split(SEPARATOR))
}

/// Concatenate two segment slices
pub(super) fn concat(head: &[String], tail: &[String]) -> Segments {
    head.iter().chain(tail.iter()).cloned().collect()
}

/// Parent lookup shared by both shapes
pub(super) fn cached_parent<'a>(
    segments: &[String],
    cell: &'a OnceLock<Box<DirectoryPath>>,
    display: &dyn std::fmt::Display,
) -> VfsResult<&'a DirectoryPath> {
    if segments.is_empty() {
        return Err(VfsError::NoParent(display.to_string()));
    }
    let parent = cell.get_or_init(|| {
        Box::new(DirectoryPath::from_trusted(
            segments[..segments.len() - 1].into(),
        ))
    });
    Ok(&**parent)
}

/// Value semantics for a path type: identity is the segment list, the parent
/// cache never takes part in comparison, hashing or cloning.
macro_rules! impl_path_value {
    ($ty:ident) => {
        impl Clone for $ty {
            fn clone(&self) -> Self {
                Self::from_trusted(std::sync::Arc::clone(&self.segments))
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.segments == other.segments
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.segments.hash(state);
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.segments.cmp(&other.segments)
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($ty))
                    .field(&self.to_string())
                    .finish()
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                text.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(super) use impl_path_value;
