use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary notes root
pub fn create_test_notes_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Create a (possibly nested) directory under `parent`
pub fn create_test_dir(parent: &Path, relative: &str) -> PathBuf {
    let dir = parent.join(relative);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Create `parent/top` as the head of a directory chain whose deepest path is
/// longer than the OS path limit, so listing the bottom levels fails.
///
/// Each level is built at a short path and moved under a new parent, so no
/// single call ever sees the full length.
pub fn create_overlong_dir_chain(parent: &Path, top: &str) -> PathBuf {
    let segment = "d".repeat(200);
    let staging = parent.join(".staging");
    fs::create_dir(&staging).unwrap();
    let chain = staging.join("chain");
    fs::create_dir(&chain).unwrap();

    for _ in 0..25 {
        let next = staging.join("next");
        fs::create_dir(&next).unwrap();
        fs::rename(&chain, next.join(&segment)).unwrap();
        fs::rename(&next, &chain).unwrap();
    }

    let top_dir = parent.join(top);
    fs::rename(&chain, &top_dir).unwrap();
    fs::remove_dir(&staging).unwrap();
    top_dir
}
