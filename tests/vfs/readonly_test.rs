/*!
 * ReadOnlyFileSystem Tests
 */

use std::sync::Arc;

use layered_vfs::vfs::{
    CreateOptions, DirectoryPath, FileAccess, FileSystem, FileSystemExt, MemoryFileSystem,
    Pattern, ReadOnlyFileSystem, SubtreeFileSystem, VfsError, VfsPath,
};

use super::support::{dir, file, DisposeCounter};

#[test]
fn test_every_mutation_denied() {
    let base = MemoryFileSystem::new();
    base.create_directory(&dir("/x/")).unwrap();
    base.write_all(&file("/x/f.txt"), b"f").unwrap();
    let ro = ReadOnlyFileSystem::new(Arc::new(base.clone()));

    let existing = file("/x/f.txt");
    let absent = file("/x/none.txt");
    for target in [&existing, &absent] {
        assert!(matches!(
            ro.create_file(target, CreateOptions::default()),
            Err(VfsError::AccessDenied(_))
        ));
        assert!(matches!(ro.delete_file(target), Err(VfsError::AccessDenied(_))));
        assert!(matches!(
            ro.open(target, FileAccess::Write),
            Err(VfsError::AccessDenied(_))
        ));
        assert!(matches!(
            ro.open(target, FileAccess::ReadWrite),
            Err(VfsError::AccessDenied(_))
        ));
    }
    for target in [dir("/x/"), dir("/y/")] {
        assert!(matches!(
            ro.create_directory(&target),
            Err(VfsError::AccessDenied(_))
        ));
        assert!(matches!(
            ro.delete_directory(&target, true),
            Err(VfsError::AccessDenied(_))
        ));
    }

    assert_eq!(base.read_all(&existing).unwrap(), b"f");
    assert!(!base.directory_exists(&dir("/y/")));
}

#[test]
fn test_read_open_matches_base() {
    let base = MemoryFileSystem::new();
    base.write_all(&file("/here.txt"), b"h").unwrap();
    let ro = ReadOnlyFileSystem::new(Arc::new(base.clone()));

    for path in [file("/here.txt"), file("/gone.txt")] {
        assert_eq!(
            ro.open(&path, FileAccess::Read).is_ok(),
            base.open(&path, FileAccess::Read).is_ok()
        );
    }
    assert_eq!(
        ro.child_files(&DirectoryPath::root(), &Pattern::any()).unwrap(),
        vec![file("/here.txt")]
    );
}

#[test]
fn test_root_is_forwarded() {
    let base = MemoryFileSystem::new();
    let sub: Arc<dyn FileSystem> =
        Arc::new(SubtreeFileSystem::new(Arc::new(base), DirectoryPath::root()).unwrap());
    let ro = ReadOnlyFileSystem::new(Arc::clone(&sub));
    assert_eq!(ro.root(), sub.root());
    assert!(ro.root().is_root());
    assert_eq!(ro.inner().name(), "subtree");
}

#[test]
fn test_dispose_does_not_cascade() {
    let (counter, disposed) = DisposeCounter::new();
    let ro = ReadOnlyFileSystem::new(Arc::new(counter));
    ro.dispose();
    ro.dispose();
    assert_eq!(DisposeCounter::count(&disposed), 0);
}
