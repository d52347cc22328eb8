/*!
 * File Operations Implementation
 * FileSystem trait methods for file I/O
 */

use super::super::path::{FilePath, VfsPath};
use super::super::traits::OpenFile;
use super::super::types::*;
use super::file_handle::MemFile;
use super::node::Node;
use super::MemoryFileSystem;

impl MemoryFileSystem {
    pub(super) fn file_exists_impl(&self, path: &FilePath) -> bool {
        self.nodes
            .read()
            .get(path.segments())
            .is_some_and(Node::is_file)
    }

    pub(super) fn create_file_impl(
        &self,
        path: &FilePath,
        options: CreateOptions,
    ) -> VfsResult<Box<dyn OpenFile>> {
        let key = Self::key(path);
        let mut nodes = self.nodes.write();

        if nodes.contains_key(&key) {
            return Err(VfsError::AlreadyExists(path.to_string()));
        }
        Self::prepare_parent(&mut nodes, path, options.create_parents)?;

        nodes.insert(key.clone(), Node::empty_file());
        Self::link_child(&mut nodes, &key)?;
        drop(nodes);

        Ok(Box::new(MemFile::new(
            self.clone(),
            key,
            Vec::new(),
            options.access(),
        )))
    }

    pub(super) fn delete_file_impl(&self, path: &FilePath) -> VfsResult<()> {
        let mut nodes = self.nodes.write();
        let is_file = nodes.get(path.segments()).is_some_and(Node::is_file);
        if is_file {
            nodes.remove(path.segments());
            Self::unlink_child(&mut nodes, path.segments());
        }
        Ok(())
    }

    pub(super) fn open_impl(
        &self,
        path: &FilePath,
        access: FileAccess,
    ) -> VfsResult<Box<dyn OpenFile>> {
        let key = Self::key(path);
        let mut nodes = self.nodes.write();

        let data = match nodes.get(&key).cloned() {
            Some(Node::File { data }) => data,
            Some(Node::Directory { .. }) => {
                return Err(if access.can_write() {
                    VfsError::AlreadyExists(format!("a directory occupies {}", path))
                } else {
                    VfsError::NotFound(path.to_string())
                });
            }
            None if !access.can_write() => return Err(VfsError::NotFound(path.to_string())),
            None => {
                Self::prepare_parent(&mut nodes, path, false)?;
                nodes.insert(key.clone(), Node::empty_file());
                Self::link_child(&mut nodes, &key)?;
                Vec::new()
            }
        };
        drop(nodes);

        Ok(Box::new(MemFile::new(self.clone(), key, data, access)))
    }
}
