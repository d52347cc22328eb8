/*!
 * VFS Initialization
 * Builds a mount table from configuration
 */

use std::sync::Arc;
use tracing::{info, warn};

use super::config::{BackendConfig, MountConfig, VfsConfig};
use super::traits::FileSystem;
use super::types::{VfsError, VfsResult};
use super::{
    LocalFileSystem, MemoryFileSystem, MountPointFileSystem, ReadOnlyFileSystem, SubtreeFileSystem,
};

/// Initialize a mount table from `config`
///
/// Each backend is optionally narrowed to a subtree, then optionally made
/// read-only, then mounted. Mounts already made are disposed if a later one
/// fails.
pub fn init_vfs(config: &VfsConfig) -> VfsResult<MountPointFileSystem> {
    info!(mounts = config.mounts.len(), "Initializing VFS mount table");

    let vfs = MountPointFileSystem::new();
    for mount in &config.mounts {
        let fs = build_mount(mount)?;
        vfs.mount(&mount.name, fs)?;
    }

    if config.lock {
        vfs.lock();
    }

    info!(mounts = ?vfs.mount_names(), locked = vfs.is_locked(), "VFS initialization complete");
    Ok(vfs)
}

/// Backend plus requested adapters for a single mount
pub fn build_mount(mount: &MountConfig) -> VfsResult<Arc<dyn FileSystem>> {
    let mut fs = build_backend(&mount.backend)?;

    if let Some(base) = &mount.subtree {
        info!(mount = %mount.name, base = %base, "Narrowing mount to subtree");
        fs = Arc::new(SubtreeFileSystem::new(fs, base.clone())?);
    }
    if mount.read_only {
        info!(mount = %mount.name, "Mounting read-only");
        fs = Arc::new(ReadOnlyFileSystem::new(fs));
    }
    Ok(fs)
}

fn build_backend(backend: &BackendConfig) -> VfsResult<Arc<dyn FileSystem>> {
    match backend {
        BackendConfig::Memory => Ok(Arc::new(MemoryFileSystem::new())),
        BackendConfig::Local { root, create } => {
            if !root.is_dir() {
                if !create {
                    return Err(VfsError::Config(format!(
                        "local root {} does not exist",
                        root.display()
                    )));
                }
                if let Err(e) = std::fs::create_dir_all(root) {
                    warn!(root = %root.display(), error = %e, "Could not create local root");
                    return Err(VfsError::from_io(e, format!("create {}", root.display())));
                }
            }
            Ok(Arc::new(LocalFileSystem::new(root.clone())))
        }
    }
}
