//! The top-level stylesheet container.

use std::fmt;
use std::fs;
use std::path::Path;

use log::debug;

use crate::CssError;
use crate::parser;
use crate::render::ToCss;
use crate::types::{Media, RuleSet, SelectorContainer};

/// A parsed or hand-built stylesheet.
///
/// Holds top-level selectors and comments (through [`SelectorContainer`])
/// and an ordered list of media blocks. Rendering prints comments, then
/// element, id and class selectors, then media blocks.
///
/// # Examples
///
/// ```
/// use stylekit::{SelectorContainer, Stylesheet};
///
/// let mut sheet = Stylesheet::parse_str("html { margin: 0; padding: 0; }");
/// assert!(sheet.has_selector("html"));
///
/// sheet.set_minify(true);
/// assert_eq!(sheet.render(), "html{margin:0;padding:0;}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    rules: RuleSet,
    media: Vec<Media>,
    minify: bool,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSS text into a new stylesheet.
    pub fn parse_str(css: &str) -> Self {
        parser::parse_css(css)
    }

    /// Reads and parses a CSS file.
    ///
    /// # Errors
    ///
    /// [`CssError::FileNotFound`] if `path` does not exist, [`CssError::Io`]
    /// if it cannot be read.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Self, CssError> {
        let mut sheet = Self::new();
        sheet.parse_css_file(path)?;
        Ok(sheet)
    }

    /// Fetches and parses a stylesheet over HTTP.
    #[cfg(feature = "uri")]
    pub fn parse_uri(uri: &str) -> Result<Self, CssError> {
        let mut sheet = Self::new();
        sheet.parse_css_uri(uri)?;
        Ok(sheet)
    }

    /// Parses CSS text and appends its contents to this stylesheet.
    pub fn parse_css(&mut self, css: &str) -> &mut Self {
        parser::parse_into(self, css);
        self
    }

    pub fn parse_css_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, CssError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CssError::FileNotFound(path.to_path_buf()));
        }

        let bytes = fs::read(path)?;
        let css = String::from_utf8_lossy(&bytes);
        debug!("loaded stylesheet {} ({} bytes)", path.display(), css.len());
        Ok(self.parse_css(&css))
    }

    #[cfg(feature = "uri")]
    pub fn parse_css_uri(&mut self, uri: &str) -> Result<&mut Self, CssError> {
        let css = crate::net::fetch_text(uri)?;
        debug!("fetched stylesheet {uri} ({} bytes)", css.len());
        Ok(self.parse_css(&css))
    }

    pub fn add_media(&mut self, media: Media) {
        self.media.push(media);
    }

    pub fn media(&self, index: usize) -> Option<&Media> {
        self.media.get(index)
    }

    pub fn media_mut(&mut self, index: usize) -> Option<&mut Media> {
        self.media.get_mut(index)
    }

    pub fn all_media(&self) -> &[Media] {
        &self.media
    }

    /// Removes the media block at `index`; later blocks shift down.
    pub fn remove_media(&mut self, index: usize) -> Option<Media> {
        (index < self.media.len()).then(|| self.media.remove(index))
    }

    pub fn remove_all_media(&mut self) {
        self.media.clear();
    }

    pub fn set_minify(&mut self, minify: bool) {
        self.minify = minify;
    }

    pub fn with_minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    pub fn is_minified(&self) -> bool {
        self.minify
    }

    /// Renders using this stylesheet's own minify setting.
    pub fn render(&self) -> String {
        self.to_css(self.minify)
    }

    /// Renders the stylesheet and writes it to `path`.
    ///
    /// # Errors
    ///
    /// [`CssError::WriteFailure`] if the file cannot be written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<(), CssError> {
        let path = path.as_ref();
        let css = self.render();
        fs::write(path, &css).map_err(|source| CssError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote stylesheet {} ({} bytes)", path.display(), css.len());
        Ok(())
    }
}

impl SelectorContainer for Stylesheet {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl ToCss for Stylesheet {
    fn write_css(&self, out: &mut String, minify: bool) {
        for comment in self.rules.comments() {
            comment.write_css(out, minify);
        }
        for selector in self.rules.iter() {
            selector.write_css(out, minify);
            if !minify {
                out.push('\n');
            }
        }
        for media in &self.media {
            media.write_css(out, minify);
            if !minify {
                out.push('\n');
            }
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Comment, Selector};

    #[test]
    fn test_parse_css_appends() {
        let mut sheet = Stylesheet::parse_str("a { x: 1; }");
        sheet.parse_css("b { y: 2; }").parse_css("@media print { c { z: 3; } }");
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.all_media().len(), 1);
    }

    #[test]
    fn test_media_list() {
        let mut sheet = Stylesheet::new();
        sheet.add_media(Media::new().with_tab_size(1));
        sheet.add_media(Media::new().with_tab_size(2));
        sheet.add_media(Media::new().with_tab_size(3));

        let removed = sheet.remove_media(1).unwrap();
        assert_eq!(removed.tab_size(), 2);
        assert_eq!(sheet.media(1).unwrap().tab_size(), 3);
        assert!(sheet.remove_media(5).is_none());

        sheet.remove_all_media();
        assert!(sheet.all_media().is_empty());
    }

    #[test]
    fn test_minified_drops_comments() {
        let mut sheet = Stylesheet::new().with_minify(true);
        sheet.add_comment(Comment::new("top"));
        let mut a = Selector::new("a").with_properties([("x", "1")]);
        a.add_comment(Comment::new("above a"));
        sheet.add_selector(a);
        assert_eq!(sheet.render(), "a{x:1;}");
        assert_eq!(sheet.to_string(), "a{x:1;}");
    }
}
