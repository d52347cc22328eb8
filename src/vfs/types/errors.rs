/*!
 * VFS Error Types
 * Structured, type-safe error handling shared by every filesystem and adapter
 */

use miette::Diagnostic;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// VFS operation result
///
/// # Must Use
/// VFS operations can fail and must be handled to prevent data loss
#[must_use = "VFS operations can fail and must be handled"]
pub type VfsResult<T> = Result<T, VfsError>;

/// VFS errors
///
/// Leaves and adapters signal failures with the same variants so a wrapping
/// adapter can propagate a child's error unchanged.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum VfsError {
    #[error("Invalid path: {0}")]
    #[diagnostic(
        code(vfs::invalid_path),
        help("Path segments must be non-empty after trimming and must not contain '/'.")
    )]
    InvalidPath(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Root path has no parent: {0}")]
    #[diagnostic(code(vfs::no_parent))]
    NoParent(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Mount not found: {0}")]
    #[diagnostic(
        code(vfs::mount_not_found),
        help("The first path segment must name a mounted filesystem.")
    )]
    MountNotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Mount conflict: {0}")]
    #[diagnostic(
        code(vfs::mount_conflict),
        help("Mount names must be unique and must not be '.', or contain '/' or '..'.")
    )]
    MountConflict(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Invalid operation: {0}")]
    #[diagnostic(code(vfs::invalid_operation))]
    InvalidOperation(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Already exists: {0}")]
    #[diagnostic(code(vfs::already_exists))]
    AlreadyExists(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Not found: {0}")]
    #[diagnostic(code(vfs::not_found))]
    NotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Directory not found: {0}")]
    #[diagnostic(
        code(vfs::directory_not_found),
        help("Create the parent directory first or pass create_parents.")
    )]
    DirectoryNotFound(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Directory not empty: {0}")]
    #[diagnostic(
        code(vfs::directory_not_empty),
        help("Pass recursive = true to delete a directory together with its children.")
    )]
    DirectoryNotEmpty(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Access denied: {0}")]
    #[diagnostic(code(vfs::access_denied))]
    AccessDenied(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Invalid pattern: {0}")]
    #[diagnostic(code(vfs::invalid_pattern))]
    InvalidPattern(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(vfs::io))]
    Io(#[serde(deserialize_with = "deserialize_nonempty_string")] String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(vfs::config))]
    Config(#[serde(deserialize_with = "deserialize_nonempty_string")] String),
}

impl VfsError {
    /// Map a host I/O error onto the taxonomy, keeping `context` as the message
    pub fn from_io(e: std::io::Error, context: impl Into<String>) -> Self {
        use std::io::ErrorKind;
        let context = context.into();
        match e.kind() {
            ErrorKind::NotFound => VfsError::NotFound(context),
            ErrorKind::PermissionDenied => VfsError::AccessDenied(context),
            ErrorKind::AlreadyExists => VfsError::AlreadyExists(context),
            _ => VfsError::Io(format!("{}: {}", context, e)),
        }
    }
}

/// Deserialize and validate non-empty string for error messages
pub(super) fn deserialize_nonempty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Err(serde::de::Error::custom("error message must not be empty"));
    }
    Ok(s)
}
