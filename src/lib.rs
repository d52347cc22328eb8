/*!
 * Layered VFS Library
 * Virtual filesystem core: paths, contract, mount table and adapters
 */

pub mod monitoring;
pub mod vfs;

// Re-exports
pub use monitoring::init_tracing;
pub use vfs::{
    init_vfs, BackendConfig, ChildPath, CreateOptions, DirectoryPath, FileAccess, FilePath,
    FileSystem, FileSystemExt, LocalFileSystem, MemoryFileSystem, MountConfig,
    MountPointFileSystem, OpenFile, Pattern, ReadOnlyFileSystem, SubtreeFileSystem, VfsConfig,
    VfsError, VfsPath, VfsResult,
};
