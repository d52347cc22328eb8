/*!
 * Directory Operations Implementation
 * FileSystem trait methods for directory management and enumeration
 */

use super::super::path::{DirectoryPath, FilePath, VfsPath};
use super::super::types::*;
use super::node::Node;
use super::MemoryFileSystem;

impl MemoryFileSystem {
    pub(super) fn directory_exists_impl(&self, path: &DirectoryPath) -> bool {
        path.is_root()
            || self
                .nodes
                .read()
                .get(path.segments())
                .is_some_and(Node::is_dir)
    }

    pub(super) fn create_directory_impl(&self, path: &DirectoryPath) -> VfsResult<()> {
        let mut nodes = self.nodes.write();
        Self::create_dirs_locked(&mut nodes, path.segments())
    }

    pub(super) fn delete_directory_impl(
        &self,
        path: &DirectoryPath,
        recursive: bool,
    ) -> VfsResult<()> {
        if path.is_root() {
            return Err(VfsError::InvalidOperation(
                "the root directory cannot be deleted".to_string(),
            ));
        }

        let mut nodes = self.nodes.write();
        let has_children = match nodes.get(path.segments()) {
            Some(Node::Directory { children }) => !children.is_empty(),
            // absent, or a file in that spot: nothing to delete
            _ => return Ok(()),
        };
        if has_children && !recursive {
            return Err(VfsError::DirectoryNotEmpty(path.to_string()));
        }

        // Collect the subtree depth-first, then drop it in one pass
        let mut to_visit = vec![Self::key(path)];
        let mut to_remove = Vec::new();
        while let Some(current) = to_visit.pop() {
            if let Some(Node::Directory { children }) = nodes.get(&current) {
                for name in children {
                    let mut child = current.clone();
                    child.push(name.clone());
                    to_visit.push(child);
                }
            }
            to_remove.push(current);
        }
        for key in &to_remove {
            nodes.remove(key);
        }
        Self::unlink_child(&mut nodes, path.segments());

        Ok(())
    }

    pub(super) fn child_directories_impl(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<DirectoryPath>> {
        self.children_where(path, filter, Node::is_dir, |name| {
            DirectoryPath::from_trusted(extend(path.segments(), name))
        })
    }

    pub(super) fn child_files_impl(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
    ) -> VfsResult<Vec<FilePath>> {
        self.children_where(path, filter, Node::is_file, |name| {
            FilePath::from_trusted(extend(path.segments(), name))
        })
    }

    fn children_where<T>(
        &self,
        path: &DirectoryPath,
        filter: &Pattern,
        kind: fn(&Node) -> bool,
        build: impl Fn(&str) -> T,
    ) -> VfsResult<Vec<T>> {
        let nodes = self.nodes.read();
        let children = match nodes.get(path.segments()) {
            Some(Node::Directory { children }) => children,
            _ => return Err(VfsError::DirectoryNotFound(path.to_string())),
        };

        let mut child_key = Self::key(path);
        let mut result = Vec::new();
        for name in children.iter().filter(|name| filter.matches(name)) {
            child_key.push(name.clone());
            if nodes.get(&child_key).is_some_and(kind) {
                result.push(build(name));
            }
            child_key.pop();
        }
        Ok(result)
    }
}

fn extend(base: &[String], name: &str) -> std::sync::Arc<[String]> {
    base.iter().cloned().chain(std::iter::once(name.to_string())).collect()
}
