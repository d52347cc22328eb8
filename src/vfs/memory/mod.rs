/*!
 * In-Memory Filesystem Backend
 * Volatile leaf store for tests and scratch mounts
 */

mod dir_ops;
mod file_handle;
mod file_ops;
mod node;

use ahash::RandomState;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::path::{DirectoryPath, FilePath, VfsPath};
use super::traits::{FileSystem, OpenFile};
use super::types::*;
use node::Node;

/// Node table keyed by segment list; the empty key is the root directory
type NodeMap = HashMap<Vec<String>, Node, RandomState>;

/// In-memory filesystem implementation
///
/// Clones share the same store. Every operation holds the table lock for its
/// whole duration, so each call is atomic with respect to other calls on any
/// clone.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    nodes: Arc<RwLock<NodeMap>>,
}

impl MemoryFileSystem {
    /// Create new in-memory filesystem containing only the root
    pub fn new() -> Self {
        let mut nodes = HashMap::with_hasher(RandomState::new());
        nodes.insert(Vec::new(), Node::empty_dir());

        Self {
            nodes: Arc::new(RwLock::new(nodes)),
        }
    }

    /// Number of files and directories, excluding the root
    pub fn node_count(&self) -> usize {
        self.nodes.read().len() - 1
    }

    fn key<P: VfsPath>(path: &P) -> Vec<String> {
        path.segments().to_vec()
    }

    /// Create `key` and every missing ancestor inside an already locked table
    fn create_dirs_locked(nodes: &mut NodeMap, key: &[String]) -> VfsResult<()> {
        for depth in 1..=key.len() {
            let current = &key[..depth];
            match nodes.get(current).map(Node::is_dir) {
                Some(true) => continue,
                Some(false) => {
                    return Err(VfsError::AlreadyExists(format!(
                        "a file occupies directory location /{}",
                        current.join("/")
                    )));
                }
                None => {
                    nodes.insert(current.to_vec(), Node::empty_dir());
                    Self::link_child(nodes, current)?;
                }
            }
        }
        Ok(())
    }

    /// Register `key` with its parent directory
    fn link_child(nodes: &mut NodeMap, key: &[String]) -> VfsResult<()> {
        let (name, parent) = key
            .split_last()
            .ok_or_else(|| VfsError::InvalidOperation("the root has no parent".to_string()))?;
        match nodes.get_mut(parent) {
            Some(Node::Directory { children }) => {
                children.insert(name.clone());
                Ok(())
            }
            _ => Err(VfsError::DirectoryNotFound(format!("/{}/", parent.join("/")))),
        }
    }

    /// Remove `key` from its parent directory's child list
    fn unlink_child(nodes: &mut NodeMap, key: &[String]) {
        if let Some((name, parent)) = key.split_last() {
            if let Some(Node::Directory { children }) = nodes.get_mut(parent) {
                children.remove(name);
            }
        }
    }

    /// Make sure the parent of a new file exists, creating it if allowed
    fn prepare_parent(
        nodes: &mut NodeMap,
        path: &FilePath,
        create_parents: bool,
    ) -> VfsResult<()> {
        let parent = path.parent()?;
        let parent_is_dir = nodes.get(parent.segments()).is_some_and(Node::is_dir);
        if parent_is_dir {
            Ok(())
        } else if create_parents {
            Self::create_dirs_locked(nodes, parent.segments())
        } else {
            Err(VfsError::DirectoryNotFound(parent.to_string()))
        }
    }
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemoryFileSystem {
    fn file_exists(&self, path: &FilePath) -> bool {
        self.file_exists_impl(path)
    }

    fn directory_exists(&self, path: &DirectoryPath) -> bool {
        self.directory_exists_impl(path)
    }

    fn create_directory(&self, path: &DirectoryPath) -> VfsResult<()> {
        self.create_directory_impl(path)
    }

    fn create_file(&self, path: &FilePath, options: CreateOptions) -> VfsResult<Box<dyn OpenFile>> {
        self.create_file_impl(path, options)
    }

    fn delete_file(&self, path: &FilePath) -> VfsResult<()> {
        self.delete_file_impl(path)
    }

    fn delete_directory(&self, path: &DirectoryPath, recursive: bool) -> VfsResult<()> {
        self.delete_directory_impl(path, recursive)
    }

    fn open(&self, path: &FilePath, access: FileAccess) -> VfsResult<Box<dyn OpenFile>> {
        self.open_impl(path, access)
    }

    fn child_directories(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.child_directories_impl(path, filter)
    }

    fn child_files(&self, path: &DirectoryPath, filter: &Pattern) -> VfsResult<Vec<FilePath>> {
        self.child_files_impl(path, filter)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
