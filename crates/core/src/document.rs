//! Image reference extraction and rewriting for a single note.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

// Matches ![alt](target), capturing target
static MARKDOWN_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").unwrap());

// Matches ![[target]], capturing target
static EMBED_IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[(.*?)\]\]").unwrap());

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A note loaded from the vault. The source file is never written back.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    content: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|e| DocumentError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::new(path, content))
    }

    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self { path: path.into(), content: content.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// All image targets in the note: markdown images first, then embeds.
    ///
    /// Targets are returned verbatim and duplicates are kept.
    pub fn image_references(&self) -> Vec<String> {
        let markdown = MARKDOWN_IMAGE_RE.captures_iter(&self.content);
        let embeds = EMBED_IMAGE_RE.captures_iter(&self.content);

        markdown.chain(embeds).map(|cap| cap[1].to_string()).collect()
    }

    /// Content with every image pointed at `new_base`.
    ///
    /// Both passes emit `![target](new_base/target)`: the captured target is
    /// reused as the alt text, so the original alt text of `![alt](x)` is
    /// replaced by `x`.
    pub fn rewrite(&self, new_base: &str) -> String {
        let pass = MARKDOWN_IMAGE_RE
            .replace_all(&self.content, |cap: &Captures| relink(&cap[1], new_base));
        EMBED_IMAGE_RE
            .replace_all(&pass, |cap: &Captures| relink(&cap[1], new_base))
            .into_owned()
    }

    /// Write the rewritten note to `dest`, replacing any existing file.
    pub fn write_rewritten(&self, dest: &Path, new_base: &str) -> Result<(), DocumentError> {
        fs::write(dest, self.rewrite(new_base)).map_err(|e| DocumentError::Write {
            path: dest.display().to_string(),
            source: e,
        })
    }
}

fn relink(target: &str, new_base: &str) -> String {
    format!("![{target}]({new_base}/{target})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(content: &str) -> Document {
        Document::new("note.md", content)
    }

    #[test]
    fn extracts_markdown_then_embeds() {
        let d = doc("![[first.png]]\n![alt](img/second.png)\n![[third.jpg]]");
        assert_eq!(d.image_references(), vec!["img/second.png", "first.png", "third.jpg"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let d = doc("![a](x.png) ![b](x.png) ![[x.png]]");
        assert_eq!(d.image_references(), vec!["x.png", "x.png", "x.png"]);
    }

    #[test]
    fn plain_links_are_not_images() {
        let d = doc("[link](page.md) and [[Other note]]");
        assert!(d.image_references().is_empty());
    }

    #[test]
    fn rewrites_markdown_image() {
        assert_eq!(doc("![a](b.png)").rewrite("/images"), "![b.png](/images/b.png)");
    }

    #[test]
    fn rewrites_embed() {
        assert_eq!(doc("![[pic.png]]").rewrite("/images"), "![pic.png](/images/pic.png)");
    }

    #[test]
    fn alt_text_is_replaced_by_target() {
        let d = doc("Look: ![A cat](cats/cat 1.png) done");
        assert_eq!(d.rewrite("/images"), "Look: ![cats/cat 1.png](/images/cats/cat 1.png) done");
    }

    #[test]
    fn replacement_is_literal() {
        let d = doc("![[a.png]]");
        assert_eq!(d.rewrite("/img$1"), "![a.png](/img$1/a.png)");
    }

    #[test]
    fn text_without_images_is_unchanged() {
        let content = "---\npublish: true\n---\n# Title\n\n[link](x.md)\n";
        assert_eq!(doc(content).rewrite("/images"), content);
    }

    #[test]
    fn write_rewritten_overwrites_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out.md");
        fs::write(&dest, "stale").unwrap();

        doc("![[pic.png]]").write_rewritten(&dest, "/images").unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "![pic.png](/images/pic.png)");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing/out.md");
        let err = doc("x").write_rewritten(&dest, "/images").unwrap_err();
        assert!(matches!(err, DocumentError::Write { .. }));
    }

    #[test]
    fn load_reads_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("n.md");
        fs::write(&path, "![[a.png]]").unwrap();

        let d = Document::load(&path).unwrap();
        assert_eq!(d.path(), path);
        assert_eq!(d.content(), "![[a.png]]");
    }
}
