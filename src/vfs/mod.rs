/*!
 * Virtual File System Module
 * Segment-based paths, a pluggable filesystem contract, and composable adapters
 */

pub mod config;
pub mod init;
pub mod local;
pub mod memory;
pub mod mount;
pub mod path;
pub mod readonly;
pub mod subtree;
pub mod traits;
pub mod types;

// Re-exports
pub use config::{BackendConfig, MountConfig, VfsConfig};
pub use init::init_vfs;
pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;
pub use mount::MountPointFileSystem;
pub use path::{ChildPath, DirectoryPath, FilePath, VfsPath};
pub use readonly::ReadOnlyFileSystem;
pub use subtree::SubtreeFileSystem;
pub use traits::{FileSystem, FileSystemExt, OpenFile};
pub use types::{CreateOptions, FileAccess, Pattern, VfsError, VfsResult};
