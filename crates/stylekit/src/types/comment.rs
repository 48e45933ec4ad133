//! Block comments attached to stylesheets, media blocks and selectors.

use std::fmt;

use crate::render::{ToCss, word_wrap};

/// Default column width for wrapping single-line comments.
pub const DEFAULT_WRAP: usize = 80;

/// A C-style block comment.
///
/// Rendered as a doc-style block:
///
/// ```text
/// /**
///  * first line
///  * second line
///  */
/// ```
///
/// Text that already contains line breaks keeps them. Otherwise text longer
/// than `wrap` columns is word-wrapped; a `wrap` of 0 disables wrapping.
/// With `trailing_newline` set, a blank line separates the comment from
/// whatever follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: String,
    wrap: usize,
    trailing_newline: bool,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wrap: DEFAULT_WRAP,
            trailing_newline: true,
        }
    }

    pub fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn wrap(&self) -> usize {
        self.wrap
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// The body lines of the rendered block, before the ` * ` prefix.
    pub fn lines(&self) -> Vec<String> {
        if self.text.contains('\n') {
            self.text.split('\n').map(str::to_string).collect()
        } else if self.wrap > 0 && self.text.len() > self.wrap {
            word_wrap(&self.text, self.wrap)
        } else {
            vec![self.text.clone()]
        }
    }
}

impl ToCss for Comment {
    /// Comments are dropped entirely from minified output.
    fn write_css(&self, out: &mut String, minify: bool) {
        if minify {
            return;
        }

        out.push_str("/**\n");
        for line in self.lines() {
            if line.is_empty() {
                out.push_str(" *\n");
            } else {
                out.push_str(" * ");
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push_str(" */\n");
        if self.trailing_newline {
            out.push('\n');
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(false))
    }
}
