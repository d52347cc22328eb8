/*!
 * MountPointFileSystem Tests
 * Dispatch, depth rules, table management and disposal
 */

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::sync::Arc;

use layered_vfs::vfs::{
    DirectoryPath, FileAccess, FileSystem, FileSystemExt, MemoryFileSystem,
    MountPointFileSystem, Pattern, VfsError,
};

use super::support::{dir, file, DisposeCounter};

#[test]
fn test_mount_then_unmount_changes_existence() {
    let table = MountPointFileSystem::new();
    table.mount("name", Arc::new(MemoryFileSystem::new())).unwrap();
    assert!(table.directory_exists(&dir("/name/")));

    table.unmount("name").unwrap();
    assert!(!table.directory_exists(&dir("/name/")));
}

#[test]
fn test_file_inside_mount_is_visible() {
    let fs_a = MemoryFileSystem::new();
    fs_a.write_all(&file("/f.txt"), b"f").unwrap();

    let table = MountPointFileSystem::new();
    table.mount("name", Arc::new(fs_a)).unwrap();

    assert!(table.file_exists(&file("/name/f.txt")));
    assert!(table
        .child_files(&dir("/name/"), &Pattern::any())
        .unwrap()
        .contains(&file("/name/f.txt")));
}

#[test]
fn test_nested_directories_round_trip() {
    let table = MountPointFileSystem::new();
    table.mount("m", Arc::new(MemoryFileSystem::new())).unwrap();

    table.create_directory(&dir("/m/x/y/")).unwrap();
    assert!(table.directory_exists(&dir("/m/x/y/")));
    assert_eq!(
        table.child_directories(&dir("/m/x/"), &Pattern::any()).unwrap(),
        vec![dir("/m/x/y/")]
    );

    assert!(matches!(
        table.delete_directory(&dir("/m/x/"), false),
        Err(VfsError::DirectoryNotEmpty(_))
    ));
    table.delete_directory(&dir("/m/x/"), true).unwrap();
    assert!(!table.directory_exists(&dir("/m/x/")));
}

#[test]
fn test_root_lists_mount_names_only() {
    let table = MountPointFileSystem::new();
    table.mount("docs", Arc::new(MemoryFileSystem::new())).unwrap();
    table.mount("other", Arc::new(MemoryFileSystem::new())).unwrap();

    let listed: BTreeSet<String> = table
        .child_directories(&DirectoryPath::root(), &Pattern::any())
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    let expected: BTreeSet<String> = ["/docs/", "/other/"].iter().map(|s| s.to_string()).collect();
    assert_eq!(listed, expected);

    assert!(table
        .child_files(&DirectoryPath::root(), &Pattern::any())
        .unwrap()
        .is_empty());
}

#[test]
fn test_root_and_mount_level_files() {
    let table = MountPointFileSystem::new();
    table.mount("docs", Arc::new(MemoryFileSystem::new())).unwrap();

    assert!(!table.file_exists(&file("/docs")));
    for access in [FileAccess::Read, FileAccess::Write, FileAccess::ReadWrite] {
        assert!(matches!(
            table.open(&file("/docs"), access),
            Err(VfsError::InvalidOperation(_))
        ));
    }
}

#[test]
fn test_errors_from_child_propagate() {
    let table = MountPointFileSystem::new();
    table.mount("m", Arc::new(MemoryFileSystem::new())).unwrap();
    assert!(matches!(
        table.open(&file("/m/absent.txt"), FileAccess::Read),
        Err(VfsError::NotFound(_))
    ));
    assert!(matches!(
        table.child_files(&dir("/m/absent/"), &Pattern::any()),
        Err(VfsError::DirectoryNotFound(_))
    ));
    assert!(matches!(
        table.child_files(&dir("/ghost/"), &Pattern::any()),
        Err(VfsError::MountNotFound(_))
    ));
}

#[test]
fn test_dispose_cascades_once() {
    let (counter, disposed) = DisposeCounter::new();
    let table = MountPointFileSystem::new();
    table.mount("p", Arc::new(counter)).unwrap();

    table.dispose();
    table.dispose();
    assert_eq!(DisposeCounter::count(&disposed), 1);
    assert!(table.mount_names().is_empty());

    drop(table);
    assert_eq!(DisposeCounter::count(&disposed), 1);
}

#[test]
fn test_drop_disposes_children() {
    let (counter, disposed) = DisposeCounter::new();
    {
        let table = MountPointFileSystem::new();
        table.mount("p", Arc::new(counter)).unwrap();
    }
    assert_eq!(DisposeCounter::count(&disposed), 1);
}

#[test]
fn test_unmount_does_not_dispose() {
    let (counter, disposed) = DisposeCounter::new();
    let table = MountPointFileSystem::new();
    table.mount("p", Arc::new(counter)).unwrap();

    let released = table.unmount("p").unwrap().unwrap();
    drop(table);
    assert_eq!(DisposeCounter::count(&disposed), 0);

    released.dispose();
    assert_eq!(DisposeCounter::count(&disposed), 1);
}

#[test]
fn test_nested_mount_tables() {
    let inner = MountPointFileSystem::new();
    inner.mount("leaf", Arc::new(MemoryFileSystem::new())).unwrap();

    let outer = MountPointFileSystem::new();
    outer.mount("inner", Arc::new(inner)).unwrap();

    outer
        .write_all(&file("/inner/leaf/deep.txt"), b"nested")
        .unwrap();
    assert_eq!(
        outer.read_all(&file("/inner/leaf/deep.txt")).unwrap(),
        b"nested"
    );
    assert!(outer.directory_exists(&dir("/inner/leaf/")));
    assert_eq!(
        outer
            .child_directories(&dir("/inner/"), &Pattern::any())
            .unwrap(),
        vec![dir("/inner/leaf/")]
    );
    // one level below the outer mount is still mount level for the inner table
    assert!(matches!(
        outer.open(&file("/inner/leaf"), FileAccess::Read),
        Err(VfsError::InvalidOperation(_))
    ));
}
