use std::borrow::Cow;

use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How line terminators are treated before a text is split into lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineEndingMode {
    /// Rewrite `\r\n` to `\n` before splitting
    #[default]
    #[display(fmt = "unix")]
    Unix,

    /// Split on `\n` only; a `\r` stays part of the line content
    #[display(fmt = "preserve")]
    Preserve,
}

impl LineEndingMode {
    /// Apply this mode to a text, borrowing when nothing needs rewriting
    pub fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            LineEndingMode::Unix if text.contains("\r\n") => Cow::Owned(text.replace("\r\n", "\n")),
            _ => Cow::Borrowed(text),
        }
    }
}

/// Split a text into lines on `\n`.
///
/// An empty text has zero lines. The terminal newline does not produce a
/// trailing empty line, but a blank line right before it is kept:
/// `"a\n\n"` splits into `["a", ""]`.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}
