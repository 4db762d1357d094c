//! Frontmatter parsing from markdown documents.

use super::types::Frontmatter;
use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

const DELIMITER: &str = "---";

/// Extract the raw text of the leading metadata block.
///
/// The first line must be a `---` delimiter, otherwise there is no block.
/// Lines up to the next delimiter are joined with `\n`; when no closing
/// delimiter exists every remaining line belongs to the block.
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
pub fn split(content: &str) -> Option<String> {
    let mut lines = content.lines();

    if !is_delimiter(lines.next()?) {
        return None;
    }

    let block: Vec<&str> = lines.take_while(|line| !is_delimiter(line)).collect();
    Some(block.join("\n"))
}

/// Parse the frontmatter of a markdown document.
///
/// Returns `Ok(None)` when the document has no metadata block, or when the
/// block is empty or not a mapping.
pub fn parse(content: &str) -> Result<Option<Frontmatter>, FrontmatterParseError> {
    let Some(block) = split(content) else {
        return Ok(None);
    };

    if block.trim().is_empty() {
        return Ok(None);
    }

    match serde_yaml::from_str::<Value>(&block)? {
        Value::Mapping(fields) => Ok(Some(Frontmatter { fields, raw: block })),
        _ => Ok(None),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}
