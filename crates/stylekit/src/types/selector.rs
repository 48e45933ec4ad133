//! A selector with its ordered declarations.

use std::fmt;

use bitflags::bitflags;
use chroma::Color;

use crate::CssError;
use crate::render::ToCss;
use crate::types::Comment;

/// Indentation used for declarations when no tab size is given.
pub const DEFAULT_TAB_SIZE: usize = 4;

bitflags! {
    /// What a selector name contains, derived whenever the name is set.
    ///
    /// A selector with neither flag is an element selector. A name can carry
    /// both (`a#top.active`); containers file such a selector as an id.
    ///
    /// # Example
    ///
    /// ```
    /// use stylekit::{Selector, SelectorKind};
    ///
    /// let selector = Selector::new("a#top.active");
    /// assert!(selector.kind().contains(SelectorKind::ID | SelectorKind::CLASS));
    /// assert!(Selector::new("html").kind().is_empty());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SelectorKind: u8 {
        /// Name contains `#`.
        const ID = 1 << 0;
        /// Name contains `.`.
        const CLASS = 1 << 1;
    }
}

impl SelectorKind {
    fn of(name: &str) -> Self {
        let mut kind = Self::empty();
        if name.contains('#') {
            kind |= Self::ID;
        }
        if name.contains('.') {
            kind |= Self::CLASS;
        }
        kind
    }
}

/// Box sides expanded from a `margin` or `padding` shorthand.
///
/// Follows the usual 1 to 4 value forms:
/// - `a`: all four sides
/// - `a b`: vertical, horizontal
/// - `a b c`: top, horizontal, bottom
/// - `a b c d`: top, right, bottom, left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sides<'a> {
    pub top: &'a str,
    pub right: &'a str,
    pub bottom: &'a str,
    pub left: &'a str,
}

impl<'a> Sides<'a> {
    /// Returns `None` for an empty value or one with more than four parts.
    pub fn from_shorthand(value: &'a str) -> Option<Self> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        let (top, right, bottom, left) = match parts[..] {
            [all] => (all, all, all, all),
            [vertical, horizontal] => (vertical, horizontal, vertical, horizontal),
            [top, horizontal, bottom] => (top, horizontal, bottom, horizontal),
            [top, right, bottom, left] => (top, right, bottom, left),
            _ => return None,
        };
        Some(Self {
            top,
            right,
            bottom,
            left,
        })
    }

    pub fn side(&self, side: &str) -> Option<&'a str> {
        match side {
            "top" => Some(self.top),
            "right" => Some(self.right),
            "bottom" => Some(self.bottom),
            "left" => Some(self.left),
            _ => None,
        }
    }
}

/// A CSS rule: a selector name, its declarations in source order and the
/// comments written above it.
///
/// Setting a property that already exists replaces its value in place, so
/// the original position is kept.
///
/// # Examples
///
/// ```
/// use stylekit::Selector;
///
/// let mut html = Selector::new("html").with_tab_size(2);
/// html.set_property("margin", "0");
/// html.set_property("padding", "0");
///
/// assert_eq!(html.to_string(), "html {\n  margin: 0;\n  padding: 0;\n}\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    name: String,
    kind: SelectorKind,
    properties: Vec<(String, String)>,
    comments: Vec<Comment>,
    tab_size: usize,
}

impl Selector {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: SelectorKind::of(&name),
            name,
            properties: Vec::new(),
            comments: Vec::new(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn with_properties<K, V>(mut self, properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_properties(properties);
        self
    }

    /// Renames the selector and recomputes its kind.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.kind = SelectorKind::of(&self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    pub fn is_element(&self) -> bool {
        self.kind.is_empty()
    }

    pub fn is_id(&self) -> bool {
        self.kind.contains(SelectorKind::ID)
    }

    pub fn is_class(&self) -> bool {
        self.kind.contains(SelectorKind::CLASS)
    }

    /// True for a selector list such as `h1, h2`.
    pub fn is_multiple(&self) -> bool {
        self.name.contains(',')
    }

    /// True when the name uses the child combinator `>`.
    pub fn has_descendant(&self) -> bool {
        self.name.contains('>')
    }

    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size;
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    pub fn set_property(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((property, value)),
        }
    }

    pub fn set_properties<K, V>(&mut self, properties: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (property, value) in properties {
            self.set_property(property, value);
        }
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.property(property).is_some()
    }

    /// The value stored under exactly this property name.
    pub fn property(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Looks up a property, falling back to the `margin` or `padding`
    /// shorthand for their `-top`, `-right`, `-bottom` and `-left` longhands.
    ///
    /// An explicit longhand always wins over the shorthand.
    ///
    /// ```
    /// use stylekit::Selector;
    ///
    /// let mut html = Selector::new("html");
    /// html.set_property("margin", "10px 5px 15px 20px");
    /// assert_eq!(html.get("margin-left"), Some("20px"));
    ///
    /// html.set_property("margin-left", "0");
    /// assert_eq!(html.get("margin-left"), Some("0"));
    /// ```
    pub fn get(&self, property: &str) -> Option<&str> {
        if let Some(value) = self.property(property) {
            return Some(value);
        }

        let (shorthand, side) = property.split_once('-')?;
        if shorthand != "margin" && shorthand != "padding" {
            return None;
        }
        Sides::from_shorthand(self.property(shorthand)?)?.side(side)
    }

    pub fn remove_property(&mut self, property: &str) -> Option<String> {
        let index = self.properties.iter().position(|(name, _)| name == property)?;
        Some(self.properties.remove(index).1)
    }

    /// Declarations in source order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Reads a property value as a color.
    ///
    /// Returns `Ok(None)` when the property is not set.
    pub fn color(&self, property: &str) -> Result<Option<Color>, CssError> {
        self.property(property)
            .map(|value| Color::parse(value).map_err(CssError::from))
            .transpose()
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn has_comments(&self) -> bool {
        !self.comments.is_empty()
    }
}

impl ToCss for Selector {
    fn write_css(&self, out: &mut String, minify: bool) {
        if minify {
            out.push_str(&self.name);
            out.push('{');
            for (property, value) in &self.properties {
                out.push_str(property);
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            out.push('}');
            return;
        }

        for comment in &self.comments {
            comment.write_css(out, false);
        }
        out.push_str(&self.name);
        out.push_str(" {\n");
        let pad = " ".repeat(self.tab_size);
        for (property, value) in &self.properties {
            out.push_str(&pad);
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str("}\n");
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(false))
    }
}
