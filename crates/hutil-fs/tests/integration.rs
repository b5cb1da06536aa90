use std::io::Write;

use hutil_fs::{PendingFile, Result, atomic_write, read_text, remove_all, write_text};
use tempfile::tempdir;

#[test]
fn test_atomic_write_basic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.txt");

    atomic_write(&path, b"hello world").unwrap();

    assert!(path.exists());
    assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
}

#[test]
fn test_atomic_write_replaces_existing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("existing.txt");

    std::fs::write(&path, "original").unwrap();
    write_text("new content", &path).unwrap();

    assert_eq!(read_text(&path).unwrap(), "new content");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_pending_file_never_visible_at_destination() -> Result<()> {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("artifact.bin");

    let mut pending = PendingFile::for_destination(&dest)?;
    pending.write_all(b"partial").unwrap();
    assert!(!dest.exists());

    drop(pending);
    assert!(!dest.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    Ok(())
}

#[test]
fn test_remove_all_nested() -> Result<()> {
    let dir = tempdir().unwrap();
    let root = dir.path().join("root");
    std::fs::create_dir_all(root.join("a/b/c")).unwrap();
    std::fs::write(root.join("a/b/c/leaf.txt"), "leaf").unwrap();

    remove_all(&root)?;

    assert!(!root.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_write_text_preserves_executable_mode() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sh");
    std::fs::write(&path, "#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    write_text("#!/bin/sh\necho new\n", &path).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o755);
}

#[cfg(unix)]
#[test]
fn test_atomic_write_new_file_follows_umask() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let reference = dir.path().join("plain.txt");
    std::fs::write(&reference, "x").unwrap();
    let path = dir.path().join("staged.txt");

    atomic_write(&path, b"x").unwrap();

    let mode = |p: &std::path::Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&reference));
}
