/*!
 * LocalFileSystem Tests
 * Contract behaviour of the host-directory leaf
 */

use std::io::Write;
use tempfile::TempDir;

use layered_vfs::vfs::{
    DirectoryPath, FileAccess, FileSystem, FileSystemExt, LocalFileSystem, Pattern, VfsError,
};

use super::support::{dir, file};

#[test]
fn test_contents_land_on_host() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());

    assert!(matches!(
        fs.write_all(&file("/a/b.txt"), b"bee"),
        Err(VfsError::DirectoryNotFound(_))
    ));
    fs.create_directory(&dir("/a/")).unwrap();
    fs.write_all(&file("/a/b.txt"), b"bee").unwrap();

    assert_eq!(std::fs::read(temp.path().join("a").join("b.txt")).unwrap(), b"bee");
    assert_eq!(fs.host_root(), temp.path());
}

#[test]
fn test_host_changes_are_visible() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());
    std::fs::create_dir(temp.path().join("made-outside")).unwrap();
    std::fs::write(temp.path().join("outside.txt"), b"o").unwrap();

    assert!(fs.directory_exists(&dir("/made-outside/")));
    assert_eq!(
        fs.child_files(&DirectoryPath::root(), &Pattern::any()).unwrap(),
        vec![file("/outside.txt")]
    );
}

#[test]
fn test_write_open_keeps_existing_bytes() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());
    fs.write_all(&file("/f.txt"), b"abcdef").unwrap();

    let mut handle = fs.open(&file("/f.txt"), FileAccess::Write).unwrap();
    handle.write_all(b"XY").unwrap();
    handle.sync().unwrap();
    drop(handle);

    assert_eq!(fs.read_all(&file("/f.txt")).unwrap(), b"XYcdef");
}

#[test]
fn test_enumerate_missing_directory() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());
    assert!(matches!(
        fs.child_directories(&dir("/ghost/"), &Pattern::any()),
        Err(VfsError::DirectoryNotFound(_))
    ));
}

#[test]
fn test_filtered_listing() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());
    for name in ["a.rs", "b.rs", "c.md"] {
        fs.write_all(&DirectoryPath::root().append_file(name).unwrap(), b"")
            .unwrap();
    }
    let mut rs = fs
        .child_files(&DirectoryPath::root(), &Pattern::new(r".*\.rs").unwrap())
        .unwrap();
    rs.sort();
    assert_eq!(rs, vec![file("/a.rs"), file("/b.rs")]);
}

#[test]
fn test_listing_skips_names_that_are_not_segments() {
    let temp = TempDir::new().unwrap();
    let fs = LocalFileSystem::new(temp.path());
    std::fs::write(temp.path().join("good.txt"), b"g").unwrap();
    std::fs::write(temp.path().join(" padded.txt"), b"p").unwrap();
    std::fs::write(temp.path().join("   "), b"w").unwrap();
    std::fs::create_dir(temp.path().join("dir ")).unwrap();
    std::fs::create_dir(temp.path().join("sub")).unwrap();

    let files = fs
        .child_files(&DirectoryPath::root(), &Pattern::any())
        .unwrap();
    assert_eq!(files, vec![file("/good.txt")]);
    assert!(files.iter().all(|f| fs.file_exists(f)));

    let dirs = fs
        .child_directories(&DirectoryPath::root(), &Pattern::any())
        .unwrap();
    assert_eq!(dirs, vec![dir("/sub/")]);
}
