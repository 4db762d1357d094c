//! Hexo project layout.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("hexo directory does not exist: {0}")]
    MissingDirectory(String),
}

/// Destination Hexo project. Posts and images live at fixed locations
/// under `source/`; neither directory is created by this tool.
#[derive(Debug, Clone)]
pub struct Site {
    posts_dir: PathBuf,
    images_dir: PathBuf,
}

impl Site {
    /// URL prefix used for rewritten image links.
    pub const IMAGE_URL_BASE: &'static str = "/images";

    pub fn new(root: &Path) -> Self {
        let source = root.join("source");
        Self {
            posts_dir: source.join("_posts"),
            images_dir: source.join("images"),
        }
    }

    /// Like [`Site::new`], but fails if the posts or images directory is missing.
    pub fn open(root: &Path) -> Result<Self, SiteError> {
        let site = Self::new(root);
        for dir in [&site.posts_dir, &site.images_dir] {
            if !dir.is_dir() {
                return Err(SiteError::MissingDirectory(dir.display().to_string()));
            }
        }
        Ok(site)
    }

    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}
