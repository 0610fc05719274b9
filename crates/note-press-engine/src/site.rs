//! Walks a notes root and writes a `notes.html` page next to every note source.

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};
use crate::page::{PAGE_TITLE, render_page};
use crate::render::render;

/// What to do when a single note cannot be read or its page cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole build at the first failure.
    #[default]
    Halt,
    /// Log the failure, record it in the report and move on.
    Continue,
}

/// A note source and the page generated from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenNote {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl WrittenNote {
    /// Directory the page was written into.
    pub fn directory(&self) -> &Path {
        self.output.parent().unwrap_or(Path::new(""))
    }
}

#[derive(Debug)]
pub struct NoteFailure {
    pub source_path: PathBuf,
    pub error: IoError,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<WrittenNote>,
    /// Only ever populated under [`FailurePolicy::Continue`].
    pub failures: Vec<NoteFailure>,
}

impl BuildReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("Failed to scan notes root: {0}")]
    Scan(#[from] IoError),
    #[error("Failed to convert {source_path}: {error}")]
    Note {
        source_path: PathBuf,
        #[source]
        error: IoError,
    },
}

/// Convert one note source into a sibling `notes.html` page.
pub fn convert_note(source: &Path) -> Result<WrittenNote, IoError> {
    let note = io::read_note(source)?;
    let page = render_page(PAGE_TITLE, &render(&note));
    let dir = source.parent().unwrap_or(Path::new("."));
    let output = io::write_page(dir, &page)?;

    log::debug!("Converted {} -> {}", source.display(), output.display());
    Ok(WrittenNote {
        source: source.to_path_buf(),
        output,
    })
}

#[derive(Debug, Clone, Default)]
pub struct SiteBuilder {
    policy: FailurePolicy,
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn build(&self, root: &Path) -> Result<BuildReport, SiteError> {
        self.build_with(root, |_| {})
    }

    /// Build every note under `root`, calling `on_written` after each page is
    /// written so progress is visible even if a later note fails.
    pub fn build_with<F>(&self, root: &Path, mut on_written: F) -> Result<BuildReport, SiteError>
    where
        F: FnMut(&WrittenNote),
    {
        let sources = io::scan_note_files(root)?;
        log::debug!("Found {} note files under {}", sources.len(), root.display());

        let mut report = BuildReport::default();
        for source in sources {
            match convert_note(&source) {
                Ok(written) => {
                    on_written(&written);
                    report.written.push(written);
                }
                Err(error) => match self.policy {
                    FailurePolicy::Halt => {
                        return Err(SiteError::Note {
                            source_path: source,
                            error,
                        });
                    }
                    FailurePolicy::Continue => {
                        log::warn!("Skipping {}: {error}", source.display());
                        report.failures.push(NoteFailure {
                            source_path: source,
                            error,
                        });
                    }
                },
            }
        }

        Ok(report)
    }
}
