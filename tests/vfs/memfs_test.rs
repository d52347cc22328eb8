/*!
 * MemoryFileSystem Tests
 * Contract behaviour of the in-memory leaf
 */

use std::io::{Read, Seek, SeekFrom, Write};
use std::sync::Arc;
use std::thread;

use layered_vfs::vfs::{
    CreateOptions, DirectoryPath, FileAccess, FileSystem, FileSystemExt, MemoryFileSystem,
    Pattern, VfsError,
};

use super::support::{dir, file};

#[test]
fn test_memfs_basic() {
    let fs = MemoryFileSystem::new();

    fs.write_all(&file("/test.txt"), b"hello").unwrap();
    assert_eq!(fs.read_all(&file("/test.txt")).unwrap(), b"hello");

    assert!(fs.file_exists(&file("/test.txt")));
    assert!(!fs.file_exists(&file("/missing.txt")));
    assert!(!fs.directory_exists(&dir("/test.txt/")));

    fs.delete_file(&file("/test.txt")).unwrap();
    assert!(!fs.file_exists(&file("/test.txt")));
}

#[test]
fn test_write_all_replaces_contents() {
    let fs = MemoryFileSystem::new();
    let path = file("/notes.txt");
    fs.write_all(&path, b"a long first draft").unwrap();
    fs.write_all(&path, b"short").unwrap();
    assert_eq!(fs.read_all(&path).unwrap(), b"short");
}

#[test]
fn test_write_open_does_not_truncate() {
    let fs = MemoryFileSystem::new();
    let path = file("/log.txt");
    fs.write_all(&path, b"0123456789").unwrap();

    let mut handle = fs.open(&path, FileAccess::Write).unwrap();
    handle.write_all(b"ab").unwrap();
    drop(handle);
    assert_eq!(fs.read_all(&path).unwrap(), b"ab23456789");

    let mut handle = fs.open(&path, FileAccess::Write).unwrap();
    handle.seek(SeekFrom::End(0)).unwrap();
    handle.write_all(b"!").unwrap();
    handle.sync().unwrap();
    assert_eq!(fs.read_all(&path).unwrap(), b"ab23456789!");
}

#[test]
fn test_create_file_read_write_handle() {
    let fs = MemoryFileSystem::new();
    let mut handle = fs
        .create_file(&file("/deep/er/rw.bin"), CreateOptions::read_write())
        .unwrap();
    assert_eq!(handle.access(), FileAccess::ReadWrite);

    handle.write_all(b"xyz").unwrap();
    handle.seek(SeekFrom::Start(1)).unwrap();
    let mut rest = Vec::new();
    handle.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, b"yz");

    assert!(fs.directory_exists(&dir("/deep/er/")));
}

#[test]
fn test_child_paths_mixed() {
    let fs = MemoryFileSystem::new();
    fs.create_directory(&dir("/p/q/")).unwrap();
    fs.write_all(&file("/p/r.txt"), b"").unwrap();

    let children = fs.child_paths(&dir("/p/"), &Pattern::any()).unwrap();
    let rendered: Vec<String> = children.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["/p/q/", "/p/r.txt"]);
    assert!(children.iter().all(|c| fs.exists(c)));
}

#[test]
fn test_plain_pattern_is_anchored() {
    let fs = MemoryFileSystem::new();
    for name in ["log", "log.old", "catalog"] {
        fs.write_all(&DirectoryPath::root().append_file(name).unwrap(), b"")
            .unwrap();
    }
    let hits = fs
        .child_files(&DirectoryPath::root(), &Pattern::new("log").unwrap())
        .unwrap();
    assert_eq!(hits, vec![file("/log")]);
}

#[test]
fn test_clones_share_store_across_threads() {
    let fs = Arc::new(MemoryFileSystem::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let fs = Arc::clone(&fs);
            thread::spawn(move || {
                let path = file(&format!("/t/{}.txt", i));
                fs.create_file(&path, CreateOptions::default())
                    .unwrap()
                    .write_all(b"done")
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        fs.child_files(&dir("/t/"), &Pattern::any()).unwrap().len(),
        8
    );
    assert_eq!(fs.read_all(&file("/t/3.txt")).unwrap(), b"done");
}

#[test]
fn test_open_directory_as_file() {
    let fs = MemoryFileSystem::new();
    fs.create_directory(&dir("/d/")).unwrap();
    assert!(matches!(
        fs.open(&file("/d"), FileAccess::Read),
        Err(VfsError::NotFound(_))
    ));
    assert!(matches!(
        fs.open(&file("/d"), FileAccess::Write),
        Err(VfsError::AlreadyExists(_))
    ));
}
