use std::fs;
use std::path::{Path, PathBuf};

/// Any file whose name contains this substring is a note source.
pub const NOTE_SOURCE_MARKER: &str = "notes.md";

/// Name of the page written next to each note source.
pub const NOTE_OUTPUT_NAME: &str = "notes.html";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to read note {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write page {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to list directory {path}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid notes root: {0} is not a directory")]
    InvalidRoot(PathBuf),
}

/// Whether a file name marks a note source.
///
/// This is plain substring containment, so `my-notes.md.bak` matches while the
/// generated `notes.html` never does.
pub fn is_note_source(file_name: &str) -> bool {
    file_name.contains(NOTE_SOURCE_MARKER)
}

/// Read a note file as UTF-8 text
pub fn read_note(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a page as `notes.html` in `dir`, replacing any previous one.
pub fn write_page(dir: &Path, page: &str) -> Result<PathBuf, IoError> {
    let output = dir.join(NOTE_OUTPUT_NAME);
    fs::write(&output, page).map_err(|source| IoError::Write {
        path: output.clone(),
        source,
    })?;
    Ok(output)
}

/// Scan for note sources anywhere under `root`.
///
/// Depth-first and top-down: a directory's own files come before anything in
/// its subdirectories, and entries are visited in name order. Only the root
/// has to be listable; a subdirectory that cannot be listed is logged and
/// skipped along with everything below it.
pub fn scan_note_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_entries(list_directory(root)?, &mut files);
    Ok(files)
}

fn list_directory(dir: &Path) -> Result<Vec<fs::DirEntry>, IoError> {
    let walk_error = |source: std::io::Error| IoError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(walk_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(walk_error)?;
    entries.sort_by_key(|entry| entry.file_name());
    Ok(entries)
}

fn scan_entries(entries: Vec<fs::DirEntry>, files: &mut Vec<PathBuf>) {
    let mut subdirs = Vec::new();
    for entry in entries {
        let path = entry.path();

        // An entry whose type cannot be read is treated as a plain file.
        if entry.file_type().is_ok_and(|file_type| file_type.is_dir()) {
            subdirs.push(path);
        } else if path.is_dir() {
            // Symlinked directories are listed but never followed.
            continue;
        } else if is_note_source(&entry.file_name().to_string_lossy()) {
            files.push(path);
        }
    }

    for subdir in subdirs {
        match list_directory(&subdir) {
            Ok(entries) => scan_entries(entries, files),
            Err(e) => log::warn!("Skipping subtree: {e}"),
        }
    }
}
