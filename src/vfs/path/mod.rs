/*!
 * VFS Path Model
 * Immutable, segment-based absolute locations split into directory and file shapes
 */

mod child;
mod directory;
mod file;
mod segments;

pub use child::ChildPath;
pub use directory::DirectoryPath;
pub use file::FilePath;

use super::types::VfsResult;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::DirectoryPath {}
    impl Sealed for super::FilePath {}
}

/// Behaviour shared by [`DirectoryPath`] and [`FilePath`]
///
/// Sealed: the two shapes are the only paths. There is intentionally no
/// `is_file`/`is_directory` query here; hold the concrete type, or match a
/// [`ChildPath`].
pub trait VfsPath:
    sealed::Sealed + Clone + Eq + std::hash::Hash + std::fmt::Display + std::fmt::Debug
{
    /// Trimmed, non-empty segments from the root down
    fn segments(&self) -> &[String];

    /// Directory containing this path. Fails with `NoParent` on the root.
    ///
    /// Computed on first use and cached for the life of the value.
    fn parent(&self) -> VfsResult<&DirectoryPath>;

    #[inline]
    fn segment_count(&self) -> usize {
        self.segments().len()
    }

    #[inline]
    fn is_root(&self) -> bool {
        self.segments().is_empty()
    }

    /// Last segment, `None` for the root
    #[inline]
    fn name(&self) -> Option<&str> {
        self.segments().last().map(String::as_str)
    }

    /// Whether `base` is a (non-strict) prefix of this path
    #[inline]
    fn starts_with(&self, base: &DirectoryPath) -> bool {
        self.segments().starts_with(base.segments())
    }
}
