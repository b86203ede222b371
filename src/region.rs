//! Tagged regions of a comment body.
//!
//! A region is delimited by `<!-- start:KEY -->` and `<!-- end:KEY -->`, which lets several
//! independent reporters share one comment, each owning the region with its own key.

use std::{fmt::Display, ops::Range};

use crate::error::{Error, Result};

/// Identifies a tagged region. Safe to embed in an HTML comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(String);

impl Key {
    /// # Errors
    ///
    /// [`Error::InvalidKey`] unless `key` is non-empty ASCII letters, digits, `-`, `_` and `.`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(Self(key))
        } else {
            Err(Error::InvalidKey(key))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn start_marker(&self) -> String {
        format!("<!-- start:{} -->", self.0)
    }

    fn end_marker(&self) -> String {
        format!("<!-- end:{} -->", self.0)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A freshly tagged region containing `message`.
#[must_use]
pub fn fragment(key: &Key, message: &str) -> String {
    format!(
        "\n{}\n{message}\n{}\n",
        key.start_marker(),
        key.end_marker()
    )
}

/// Finds the first region tagged with `key`.
///
/// Returns the byte range of its content, trimmed of surrounding whitespace. An empty range
/// means the region exists but is empty.
#[must_use]
pub fn find(body: &str, key: &Key) -> Option<Range<usize>> {
    let start_marker = key.start_marker();
    let inner_start = body.find(&start_marker)? + start_marker.len();
    let inner_end = inner_start + body[inner_start..].find(&key.end_marker())?;

    let inner = &body[inner_start..inner_end];
    let trimmed = inner.trim_start();
    let start = inner_start + (inner.len() - trimmed.len());
    Some(start..start + trimmed.trim_end().len())
}

/// Puts `message` into the region tagged with `key`.
///
/// If `body` has such a region, only its trimmed content is replaced. Otherwise a new region is
/// appended after a blank line.
#[must_use]
pub fn splice(body: &str, key: &Key, message: &str) -> String {
    match find(body, key) {
        Some(range) => {
            let mut spliced = body.to_owned();
            spliced.replace_range(range, message);
            spliced
        }
        None => format!("{body}\n\n{}", fragment(key, message)),
    }
}
