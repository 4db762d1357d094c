//! Frontmatter types.

use serde_yaml::{Mapping, Value};

/// Plain scalars that YAML 1.1 resolves to `true` but YAML 1.2 reads as
/// strings. `true`/`True`/`TRUE` are already booleans after parsing.
const YAML11_TRUE: &[&str] = &["yes", "Yes", "YES", "on", "On", "ON"];

/// Parsed YAML frontmatter of a note.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Top-level fields in document order.
    pub fields: Mapping,
    /// Block text the fields were parsed from.
    pub raw: String,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// True only when `publish` is a YAML boolean `true`.
    ///
    /// The YAML 1.1 spellings `yes` and `on` count when written unquoted.
    /// Quoted strings such as `"true"` or `"yes"` do not.
    pub fn is_publishable(&self) -> bool {
        match self.get("publish") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                YAML11_TRUE.contains(&s.as_str()) && self.plain_value("publish") == Some(s.as_str())
            }
            _ => false,
        }
    }

    /// Unquoted value text of a top-level `key: value` line.
    fn plain_value(&self, key: &str) -> Option<&str> {
        self.raw.lines().find_map(|line| {
            let rest = line.strip_prefix(key)?.trim_start().strip_prefix(':')?;
            let value = rest.split(" #").next().unwrap_or(rest).trim();
            Some(value)
        })
    }
}
