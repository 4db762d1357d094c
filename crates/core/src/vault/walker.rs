//! Recursive vault directory walker.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Directory name whose subtree is never published, at any depth.
pub const EXCLUDED_DIR: &str = "99-Extras";

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Information about a discovered markdown file.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Path to the file (vault root joined with the relative path).
    pub absolute_path: PathBuf,
    /// Path relative to vault root.
    pub relative_path: PathBuf,
}

/// Walker for discovering markdown files in a vault.
///
/// Traversal is depth-first and top-down. Inside a directory, files are
/// yielded before subdirectories and both groups are ordered by file name,
/// so every note of a folder precedes the notes of its subfolders.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    excluded_dir: String,
}

impl VaultWalker {
    /// Create a new walker for the given vault root.
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusion(root, EXCLUDED_DIR)
    }

    /// Create a walker that prunes every directory named `excluded_dir`.
    pub fn with_exclusion(root: &Path, excluded_dir: &str) -> Result<Self, VaultWalkerError> {
        if !root.is_dir() {
            return Err(VaultWalkerError::MissingRoot(root.display().to_string()));
        }

        Ok(Self { root: root.to_path_buf(), excluded_dir: excluded_dir.to_string() })
    }

    /// Walk the vault and return all markdown files in traversal order.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by(files_first_by_name)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }

            let relative_path =
                path.strip_prefix(&self.root).unwrap_or(path).to_path_buf();

            files.push(WalkedFile { absolute_path: path.to_path_buf(), relative_path });
        }

        Ok(files)
    }

    /// Check if an entry should be excluded from walking.
    fn is_excluded(&self, entry: &DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 {
            return false;
        }

        entry.file_type().is_dir() && entry.file_name() == self.excluded_dir.as_str()
    }
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_dir = a.file_type().is_dir();
    let b_dir = b.file_type().is_dir();
    a_dir.cmp(&b_dir).then_with(|| a.file_name().cmp(b.file_name()))
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}
