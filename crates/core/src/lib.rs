//! Publish Obsidian notes into a Hexo blog.
//!
//! Notes whose frontmatter sets `publish: true` are copied to
//! `source/_posts` of a Hexo project, with image links rewritten to
//! `/images/...`, and the referenced attachments are copied to
//! `source/images`.

pub mod config;
pub mod document;
pub mod frontmatter;
pub mod publish;
pub mod site;
pub mod vault;

pub use document::Document;
pub use publish::{PublishError, PublishReport, Publisher, publish};
pub use site::Site;
pub use vault::Vault;
