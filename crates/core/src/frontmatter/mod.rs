//! Front matter parsing for vault notes.
//!
//! A note may start with a YAML block delimited by `---` lines. Only the
//! `publish` key matters for publishing, but the whole block is parsed so
//! malformed metadata is reported rather than silently ignored.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, parse, split};
pub use types::Frontmatter;
