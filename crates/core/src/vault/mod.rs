//! Vault access: attachment directory and publishable note discovery.

pub mod walker;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{ConfigError, ConfigLoader};
use crate::frontmatter::{self, FrontmatterParseError};

pub use walker::{EXCLUDED_DIR, VaultWalker, VaultWalkerError, WalkedFile};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Walker(#[from] VaultWalkerError),

    #[error("failed to read note {path}: {source}")]
    ReadNote {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A note whose metadata block could not be parsed.
#[derive(Debug)]
pub struct SkippedNote {
    pub path: PathBuf,
    pub error: FrontmatterParseError,
}

/// Result of scanning a vault for publishable notes.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Notes with `publish: true`, in traversal order.
    pub publishable: Vec<PathBuf>,
    /// Notes skipped because of malformed frontmatter.
    pub skipped: Vec<SkippedNote>,
    /// Number of markdown files inspected.
    pub scanned: usize,
}

/// An Obsidian vault on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    attachment_dir: PathBuf,
}

impl Vault {
    /// Open the vault at `root`, reading its attachment folder from
    /// `.obsidian/app.json`.
    pub fn open(root: &Path) -> Result<Self, VaultError> {
        let attachment_dir = ConfigLoader::attachment_dir(root)?;
        Ok(Self { root: root.to_path_buf(), attachment_dir })
    }

    pub fn attachment_dir(&self) -> &Path {
        &self.attachment_dir
    }

    /// Find every note flagged `publish: true`.
    ///
    /// Notes with malformed frontmatter are logged and returned in
    /// [`Discovery::skipped`] instead of failing the scan. An unreadable
    /// note is an error.
    pub fn find_publishable(&self) -> Result<Discovery, VaultError> {
        let files = VaultWalker::new(&self.root)?.walk()?;
        let mut discovery = Discovery { scanned: files.len(), ..Discovery::default() };

        for file in files {
            let content = fs::read_to_string(&file.absolute_path).map_err(|e| {
                VaultError::ReadNote { path: file.absolute_path.display().to_string(), source: e }
            })?;

            match frontmatter::parse(&content) {
                Ok(Some(fm)) if fm.is_publishable() => {
                    tracing::debug!("publishable: {}", file.relative_path.display());
                    discovery.publishable.push(file.absolute_path);
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(
                        "Skipping {}: {}",
                        file.relative_path.display(),
                        error
                    );
                    discovery.skipped.push(SkippedNote { path: file.absolute_path, error });
                }
            }
        }

        Ok(discovery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_vault(attachment_folder: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".obsidian")).unwrap();
        fs::write(
            dir.path().join(".obsidian/app.json"),
            format!(r#"{{"attachmentFolderPath": "{attachment_folder}"}}"#),
        )
        .unwrap();
        dir
    }

    fn file_names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect()
    }

    #[test]
    fn open_resolves_attachment_dir() {
        let dir = create_vault("attachments");
        let vault = Vault::open(dir.path()).unwrap();
        assert_eq!(vault.attachment_dir(), dir.path().join("attachments"));
    }

    #[test]
    fn open_fails_without_config() {
        let dir = TempDir::new().unwrap();
        let err = Vault::open(dir.path()).unwrap_err();
        assert!(matches!(err, VaultError::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn only_publish_true_is_selected() {
        let dir = create_vault("");
        let root = dir.path();
        fs::write(root.join("a.md"), "---\npublish: true\n---\nA").unwrap();
        fs::write(root.join("b.md"), "---\npublish: false\n---\nB").unwrap();
        fs::write(root.join("c.md"), "---\npublish: \"true\"\n---\nC").unwrap();
        fs::write(root.join("d.md"), "no frontmatter\npublish: true\n").unwrap();
        fs::write(root.join("e.md"), "---\ntitle: E\n---\nE").unwrap();

        let found = Vault::open(root).unwrap().find_publishable().unwrap();
        assert_eq!(file_names(&found.publishable), vec!["a.md"]);
        assert_eq!(found.scanned, 5);
        assert!(found.skipped.is_empty());
    }

    #[test]
    fn excluded_subtree_is_never_selected() {
        let dir = create_vault("");
        let root = dir.path();
        fs::create_dir_all(root.join("notes/99-Extras")).unwrap();
        fs::write(root.join("notes/99-Extras/hidden.md"), "---\npublish: true\n---\n").unwrap();
        fs::write(root.join("notes/post.md"), "---\npublish: true\n---\n").unwrap();

        let found = Vault::open(root).unwrap().find_publishable().unwrap();
        assert_eq!(file_names(&found.publishable), vec!["post.md"]);
    }

    #[test]
    fn malformed_frontmatter_is_skipped() {
        let dir = create_vault("");
        let root = dir.path();
        fs::write(root.join("bad.md"), "---\npublish: [true\n---\n").unwrap();
        fs::write(root.join("good.md"), "---\npublish: true\n---\n").unwrap();

        let found = Vault::open(root).unwrap().find_publishable().unwrap();
        assert_eq!(file_names(&found.publishable), vec!["good.md"]);
        assert_eq!(found.skipped.len(), 1);
        assert!(found.skipped[0].path.ends_with("bad.md"));
    }

    #[test]
    fn source_notes_are_not_modified() {
        let dir = create_vault("");
        let note = dir.path().join("note.md");
        let content = "---\npublish: true\n---\n![[pic.png]]\n";
        fs::write(&note, content).unwrap();

        Vault::open(dir.path()).unwrap().find_publishable().unwrap();
        assert_eq!(fs::read_to_string(&note).unwrap(), content);
    }
}
