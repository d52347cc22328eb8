/*!
 * Filesystem Node Types
 * Internal representation of files and directories
 */

use std::collections::BTreeSet;

/// In-memory filesystem node
#[derive(Debug, Clone)]
pub(super) enum Node {
    File {
        data: Vec<u8>,
    },
    Directory {
        // Sorted so listings are stable
        children: BTreeSet<String>,
    },
}

impl Node {
    pub fn empty_file() -> Self {
        Node::File { data: Vec::new() }
    }

    pub fn empty_dir() -> Self {
        Node::Directory {
            children: BTreeSet::new(),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}
