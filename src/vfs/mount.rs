/*!
 * Mount-Point Filesystem
 * Routes each path to a child filesystem selected by its first segment
 */

use ahash::RandomState;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use super::path::{DirectoryPath, FilePath, VfsPath};
use super::traits::{FileSystem, OpenFile};
use super::types::*;

/// Internal mount entry: the child filesystem and the one-segment directory
/// that names it in this namespace
struct MountEntry {
    fs: Arc<dyn FileSystem>,
    path: DirectoryPath,
}

/// Mount-point filesystem
///
/// The root holds only mount points; every mount point is a child filesystem.
/// A path `/name/rest...` is forwarded to the child mounted as `name` as
/// `/rest...`, and enumeration results come back re-prefixed with `/name/`.
///
/// The table is guarded by a lock that is released before any call is
/// forwarded, so leaf stores see no extra serialization from this layer.
pub struct MountPointFileSystem {
    mounts: RwLock<HashMap<String, MountEntry, RandomState>>,
    locked: AtomicBool,
    disposed: AtomicBool,
}

impl MountPointFileSystem {
    /// Create an empty, unlocked mount table
    pub fn new() -> Self {
        Self {
            mounts: RwLock::new(HashMap::with_hasher(RandomState::new())),
            locked: AtomicBool::new(false),
            disposed: AtomicBool::new(false),
        }
    }

    /// Mount `fs` under `name`; the table takes ownership of it
    pub fn mount(&self, name: &str, fs: Arc<dyn FileSystem>) -> VfsResult<()> {
        self.ensure_unlocked("mount")?;
        let name = validate_mount_name(name)?;
        let path = DirectoryPath::new([name.as_str()])?;

        let mut mounts = self.mounts.write();
        // Checked under the table lock so a concurrent dispose drains anything mounted before it
        if self.disposed.load(Ordering::SeqCst) {
            return Err(VfsError::InvalidOperation(
                "cannot mount on a disposed mount table".to_string(),
            ));
        }
        if mounts.contains_key(&name) {
            return Err(VfsError::MountConflict(format!(
                "a filesystem is already mounted as {:?}",
                name
            )));
        }

        info!(mount = %name, backend = fs.name(), "Mounted filesystem");
        mounts.insert(name, MountEntry { fs, path });
        Ok(())
    }

    /// Remove the mount named `name`, handing the filesystem back to the
    /// caller undisposed. `None` if nothing was mounted under that name.
    pub fn unmount(&self, name: &str) -> VfsResult<Option<Arc<dyn FileSystem>>> {
        self.ensure_unlocked("unmount")?;
        let removed = self.mounts.write().remove(name.trim()).map(|entry| entry.fs);
        if removed.is_some() {
            info!(mount = %name.trim(), "Unmounted filesystem");
        }
        Ok(removed)
    }

    /// Remove every mount, returning them sorted by name
    pub fn unmount_all(&self) -> VfsResult<Vec<(String, Arc<dyn FileSystem>)>> {
        self.ensure_unlocked("unmount")?;
        let mut released: Vec<_> = self
            .mounts
            .write()
            .drain()
            .map(|(name, entry)| (name, entry.fs))
            .collect();
        released.sort_by(|a, b| a.0.cmp(&b.0));
        info!(count = released.len(), "Unmounted all filesystems");
        Ok(released)
    }

    /// Whether something is mounted under `name`
    pub fn is_mounted(&self, name: &str) -> bool {
        self.mounts.read().contains_key(name.trim())
    }

    /// Mount names in sorted order
    pub fn mount_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mounts.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Freeze the mount table; later mount and unmount calls fail
    pub fn lock(&self) {
        if !self.locked.swap(true, Ordering::SeqCst) {
            info!(mounts = self.mounts.read().len(), "Mount table locked");
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    fn ensure_unlocked(&self, action: &str) -> VfsResult<()> {
        if self.is_locked() {
            return Err(VfsError::InvalidOperation(format!(
                "cannot {} on a locked mount table",
                action
            )));
        }
        Ok(())
    }

    /// Child filesystem and mount directory for a path with at least one segment
    fn route<P: VfsPath>(&self, path: &P) -> VfsResult<(Arc<dyn FileSystem>, DirectoryPath)> {
        let name = path.segments().first().ok_or_else(|| {
            VfsError::InvalidOperation("the mount table root is not routable".to_string())
        })?;
        let mounts = self.mounts.read();
        let entry = mounts
            .get(name)
            .ok_or_else(|| VfsError::MountNotFound(format!("no filesystem mounted as {:?}", name)))?;
        Ok((Arc::clone(&entry.fs), entry.path.clone()))
    }

    /// Route a file path that is deep enough to name a file inside a mount
    fn route_file(&self, path: &FilePath) -> VfsResult<(Arc<dyn FileSystem>, DirectoryPath, FilePath)> {
        if path.segment_count() < 2 {
            return Err(file_at_mount_level(path));
        }
        let (fs, mount) = self.route(path)?;
        Ok((fs, mount, path.skip(1)))
    }

    fn route_directory(
        &self,
        path: &DirectoryPath,
    ) -> VfsResult<(Arc<dyn FileSystem>, DirectoryPath, DirectoryPath)> {
        let (fs, mount) = self.route(path)?;
        Ok((fs, mount, path.skip(1)))
    }
}

impl Default for MountPointFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MountPointFileSystem {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn validate_mount_name(name: &str) -> VfsResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VfsError::InvalidPath("mount name is empty".to_string()));
    }
    if name == "." || name.contains('/') || name.contains("..") {
        return Err(VfsError::MountConflict(format!(
            "invalid mount name {:?}",
            name
        )));
    }
    Ok(name.to_string())
}

fn file_at_mount_level(path: &FilePath) -> VfsError {
    VfsError::InvalidOperation(format!(
        "root and mount-point levels cannot hold files: {}",
        path
    ))
}

fn directory_at_mount_level(path: &DirectoryPath) -> VfsError {
    VfsError::InvalidOperation(format!(
        "mount points are managed with mount and unmount: {}",
        path
    ))
}

impl FileSystem for MountPointFileSystem {
    fn file_exists(&self, path: &FilePath) -> bool {
        if path.segment_count() < 2 {
            return false;
        }
        self.route_file(path)
            .map(|(fs, _, inner)| fs.file_exists(&inner))
            .unwrap_or(false)
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        match path.segment_count() {
            0 => true,
            1 => path.name().is_some_and(|name| self.is_mounted(name)),
            _ => self
                .route_directory(path)
                .map(|(fs, _, inner)| fs.directory_exists(&inner))
                .unwrap_or(false),
        }
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        if path.segment_count() < 2 {
            return Err(directory_at_mount_level(path));
        }
        let (fs, _, inner) = self.route_directory(path)?;
        fs.create_directory(&inner)
    }

    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        let (fs, _, inner) = self.route_file(path)?;
        fs.create_file(&inner, options)
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        let (fs, _, inner) = self.route_file(path)?;
        fs.delete_file(&inner)
    }

    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()> {
        if path.segment_count() < 2 {
            return Err(directory_at_mount_level(path));
        }
        let (fs, _, inner) = self.route_directory(path)?;
        fs.delete_directory(&inner, recursive)
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        let (fs, _, inner) = self.route_file(path)?;
        fs.open(&inner, access)
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        if path.is_root() {
            let mounts = self.mounts.read();
            let mut result: Vec<DirectoryPath> = mounts
                .iter()
                .filter(|(name, _)| filter.matches(name))
                .map(|(_, entry)| entry.path.clone())
                .collect();
            result.sort();
            return Ok(result);
        }

        let (fs, mount, inner) = self.route_directory(path)?;
        Ok(fs
            .child_directories(&inner, filter)?
            .iter()
            .map(|child| mount.join_directory(child))
            .collect())
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        if path.is_root() {
            return Ok(Vec::new());
        }

        let (fs, mount, inner) = self.route_directory(path)?;
        Ok(fs
            .child_files(&inner, filter)?
            .iter()
            .map(|child| mount.join_file(child))
            .collect())
    }

    fn name(&self) -> &str {
        "mount"
    }

    /// Dispose every mounted child once and clear the table
    fn dispose(&self) {
        if self.disposed.swap(true, Ordering::SeqCst) {
            return;
        }
        let released: Vec<(String, MountEntry)> = self.mounts.write().drain().collect();
        for (name, entry) in &released {
            entry.fs.dispose();
            info!(mount = %name, "Disposed mounted filesystem");
        }
    }
}
