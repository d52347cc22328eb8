/*!
 * VFS Types
 * Shared types for filesystem operations
 */

mod access;
mod errors;
mod pattern;

pub use access::{CreateOptions, FileAccess};
pub use errors::{VfsError, VfsResult};
pub use pattern::Pattern;
