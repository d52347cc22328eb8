/*!
 * VFS Configuration
 *
 * Declarative mount table loaded from JSON.
 */

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::path::DirectoryPath;
use super::types::{VfsError, VfsResult};

/// Leaf store behind a mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BackendConfig {
    /// Host directory
    Local {
        root: PathBuf,
        /// Create the host directory if it is missing
        #[serde(default)]
        create: bool,
    },
    /// Volatile in-memory store
    Memory,
}

/// One entry of the mount table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountConfig {
    pub name: String,
    pub backend: BackendConfig,

    /// Expose only this directory of the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtree: Option<DirectoryPath>,

    /// Reject every mutation through this mount
    #[serde(default)]
    pub read_only: bool,
}

impl MountConfig {
    pub fn new<S: Into<String>>(name: S, backend: BackendConfig) -> Self {
        Self {
            name: name.into(),
            backend,
            subtree: None,
            read_only: false,
        }
    }

    pub fn with_subtree(mut self, base: DirectoryPath) -> Self {
        self.subtree = Some(base);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Mount table configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VfsConfig {
    #[serde(default)]
    pub mounts: Vec<MountConfig>,

    /// Freeze the table once every mount is in place
    #[serde(default)]
    pub lock: bool,
}

impl VfsConfig {
    /// Parse a JSON document
    pub fn from_json(json: &str) -> VfsResult<Self> {
        serde_json::from_str(json).map_err(|e| VfsError::Config(format!("invalid config: {}", e)))
    }

    /// Read and parse a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> VfsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| VfsError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&text)
    }

    pub fn with_mount(mut self, mount: MountConfig) -> Self {
        self.mounts.push(mount);
        self
    }

    pub fn locked(mut self) -> Self {
        self.lock = true;
        self
    }
}
