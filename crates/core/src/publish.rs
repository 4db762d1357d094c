//! Publish orchestration: vault notes in, Hexo posts and images out.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::document::{Document, DocumentError};
use crate::site::{Site, SiteError};
use crate::vault::{Vault, VaultError};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Counters from a publish run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    /// Markdown files inspected in the vault.
    pub notes_scanned: usize,
    /// Notes written to the posts directory.
    pub notes_published: usize,
    /// Notes skipped because of malformed frontmatter.
    pub notes_skipped: usize,
    /// Images copied into the images directory.
    pub images_copied: usize,
    /// Referenced images not found in the attachment directory.
    pub images_missing: usize,
    /// Images found but not copied (e.g. destination subfolder missing).
    pub images_failed: usize,
}

/// Outcome of copying one referenced image.
#[derive(Debug)]
enum ImageOutcome {
    Copied,
    Missing,
    Failed,
}

/// Publish every `publish: true` note of the vault at `vault_root` into the
/// Hexo project at `site_root`.
///
/// Configuration problems abort before anything is written. Notes are
/// processed in vault traversal order; a later note with the same file name
/// overwrites an earlier one. Missing or uncopyable images are logged and
/// never abort the run.
pub fn publish(vault_root: &Path, site_root: &Path) -> Result<PublishReport, PublishError> {
    let vault = Vault::open(vault_root)?;
    let site = Site::open(site_root)?;
    Publisher::new(&vault, &site).run()
}

/// Copies notes and their images from one vault into one site.
pub struct Publisher<'a> {
    vault: &'a Vault,
    site: &'a Site,
}

impl<'a> Publisher<'a> {
    pub fn new(vault: &'a Vault, site: &'a Site) -> Self {
        Self { vault, site }
    }

    pub fn run(&self) -> Result<PublishReport, PublishError> {
        let discovery = self.vault.find_publishable()?;
        let mut report = PublishReport {
            notes_scanned: discovery.scanned,
            notes_skipped: discovery.skipped.len(),
            ..PublishReport::default()
        };

        for path in &discovery.publishable {
            let images = self.publish_note(path)?;
            report.notes_published += 1;

            for image in images {
                match self.copy_image(&image) {
                    ImageOutcome::Copied => report.images_copied += 1,
                    ImageOutcome::Missing => report.images_missing += 1,
                    ImageOutcome::Failed => report.images_failed += 1,
                }
            }
        }

        Ok(report)
    }

    /// Write the rewritten note to the posts directory and return the image
    /// references of the original note.
    fn publish_note(&self, path: &Path) -> Result<Vec<String>, PublishError> {
        let Some(file_name) = path.file_name() else {
            return Ok(Vec::new());
        };
        let post = self.site.posts_dir().join(file_name);

        tracing::info!("Processing {}", file_name.to_string_lossy());
        let document = Document::load(path)?;
        let images = document.image_references();

        tracing::info!(
            "- copying markdown {} to {}",
            file_name.to_string_lossy(),
            post.display()
        );
        document.write_rewritten(&post, Site::IMAGE_URL_BASE)?;

        Ok(images)
    }

    fn copy_image(&self, reference: &str) -> ImageOutcome {
        let source = self.vault.attachment_dir().join(reference);
        if !source.exists() {
            tracing::warn!("- {} is missing", source.display());
            return ImageOutcome::Missing;
        }

        let dest = self.site.images_dir().join(reference);
        if is_same_file(&source, &dest) {
            tracing::warn!(
                "- not copying {}: {} is the same file as the source",
                reference,
                dest.display()
            );
            return ImageOutcome::Failed;
        }

        match fs::copy(&source, &dest) {
            Ok(_) => {
                tracing::info!("- copying {} to {}", reference, dest.display());
                ImageOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("- failed to copy {} to {}: {}", reference, dest.display(), e);
                ImageOutcome::Failed
            }
        }
    }
}

/// Copying a file onto itself truncates it, so detect that first.
/// A destination that does not exist yet cannot be the source.
fn is_same_file(source: &Path, dest: &Path) -> bool {
    match (source.canonicalize(), dest.canonicalize()) {
        (Ok(source), Ok(dest)) => source == dest,
        _ => false,
    }
}
