//! Selector bookkeeping shared by stylesheets and media blocks.

use std::collections::HashMap;

use crate::CssError;
use crate::types::{Comment, Media, Selector};

/// Selectors keyed by name, plus the order they were added in per category.
///
/// Output order is all element selectors, then ids, then classes, each in
/// insertion order. The map is authoritative: a name left in an order list
/// without a map entry is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    selectors: HashMap<String, Selector>,
    elements: Vec<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    comments: Vec<Comment>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selector, replacing any selector with the same name.
    ///
    /// A replaced selector keeps its original position.
    pub fn insert(&mut self, selector: Selector) {
        let name = selector.name().to_string();
        let is_new = !self.selectors.contains_key(&name);
        let order = if selector.is_element() {
            &mut self.elements
        } else if selector.is_id() {
            &mut self.ids
        } else {
            &mut self.classes
        };
        if is_new {
            order.push(name.clone());
        }
        self.selectors.insert(name, selector);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.selectors.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Selector> {
        self.selectors.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Selector> {
        self.selectors.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Selector> {
        let selector = self.selectors.remove(name)?;
        for order in [&mut self.elements, &mut self.ids, &mut self.classes] {
            order.retain(|entry| entry != name);
        }
        Some(selector)
    }

    /// Selectors in output order.
    pub fn iter(&self) -> impl Iterator<Item = &Selector> {
        self.elements
            .iter()
            .chain(&self.ids)
            .chain(&self.classes)
            .filter_map(|name| self.selectors.get(name))
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn push_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

/// Any node that can sit in a stylesheet.
///
/// Used for index-style assignment, which only accepts selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Selector(Selector),
    Comment(Comment),
    Media(Media),
}

impl From<Selector> for Node {
    fn from(selector: Selector) -> Self {
        Self::Selector(selector)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

impl From<Media> for Node {
    fn from(media: Media) -> Self {
        Self::Media(media)
    }
}

/// Selector and comment handling shared by [`Stylesheet`](crate::Stylesheet)
/// and [`Media`].
///
/// Implementors only expose their [`RuleSet`]; everything else is provided.
///
/// # Example
///
/// ```
/// use stylekit::{Selector, SelectorContainer, Stylesheet};
///
/// let mut sheet = Stylesheet::new();
/// sheet.add_selector(Selector::new(".b"));
/// sheet.add_selector(Selector::new("#a"));
/// sheet.add_selector(Selector::new("html"));
///
/// let names: Vec<_> = sheet.selectors().map(|s| s.name()).collect();
/// assert_eq!(names, ["html", "#a", ".b"]);
///
/// sheet.remove_selector("#a");
/// assert!(!sheet.has_selector("#a"));
/// assert_eq!(sheet.len(), 2);
/// ```
pub trait SelectorContainer {
    fn rule_set(&self) -> &RuleSet;

    fn rule_set_mut(&mut self) -> &mut RuleSet;

    fn add_selector(&mut self, selector: Selector) {
        self.rule_set_mut().insert(selector);
    }

    fn add_selectors(&mut self, selectors: impl IntoIterator<Item = Selector>) {
        for selector in selectors {
            self.add_selector(selector);
        }
    }

    fn has_selector(&self, name: &str) -> bool {
        self.rule_set().contains(name)
    }

    fn selector(&self, name: &str) -> Option<&Selector> {
        self.rule_set().get(name)
    }

    fn selector_mut(&mut self, name: &str) -> Option<&mut Selector> {
        self.rule_set_mut().get_mut(name)
    }

    fn remove_selector(&mut self, name: &str) -> Option<Selector> {
        self.rule_set_mut().remove(name)
    }

    /// Selectors in output order: elements, ids, then classes.
    fn selectors(&self) -> impl Iterator<Item = &Selector> {
        self.rule_set().iter()
    }

    fn len(&self) -> usize {
        self.rule_set().len()
    }

    fn is_empty(&self) -> bool {
        self.rule_set().is_empty()
    }

    fn add_comment(&mut self, comment: Comment) {
        self.rule_set_mut().push_comment(comment);
    }

    fn comments(&self) -> &[Comment] {
        self.rule_set().comments()
    }

    fn has_comments(&self) -> bool {
        !self.comments().is_empty()
    }

    fn get(&self, name: &str) -> Option<&Selector> {
        self.selector(name)
    }

    /// Stores a selector under `name`, renaming it to match.
    ///
    /// Any other kind of node is rejected with [`CssError::TypeInvalid`].
    fn set(&mut self, name: &str, node: impl Into<Node>) -> Result<(), CssError> {
        match node.into() {
            Node::Selector(mut selector) => {
                if selector.name() != name {
                    selector.set_name(name);
                }
                self.add_selector(selector);
                Ok(())
            }
            Node::Comment(_) | Node::Media(_) => Err(CssError::TypeInvalid("selector")),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.has_selector(name)
    }

    fn delete(&mut self, name: &str) -> Option<Selector> {
        self.remove_selector(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let mut rules = RuleSet::new();
        rules.insert(Selector::new(".login"));
        rules.insert(Selector::new("#main"));
        rules.insert(Selector::new("body"));
        rules.insert(Selector::new("html"));

        let names: Vec<_> = rules.iter().map(Selector::name).collect();
        assert_eq!(names, vec!["body", "html", "#main", ".login"]);
        assert_eq!(rules.elements(), ["body", "html"]);
    }

    #[test]
    fn test_id_wins_over_class() {
        let mut rules = RuleSet::new();
        rules.insert(Selector::new("a#top.active"));
        assert_eq!(rules.ids(), ["a#top.active"]);
        assert!(rules.classes().is_empty());
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut rules = RuleSet::new();
        rules.insert(Selector::new("a"));
        rules.insert(Selector::new("b"));
        rules.insert(Selector::new("a").with_properties([("color", "red")]));

        let names: Vec<_> = rules.iter().map(Selector::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(rules.get("a").and_then(|s| s.property("color")), Some("red"));
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_remove_clears_order() {
        let mut rules = RuleSet::new();
        rules.insert(Selector::new("#a"));
        assert!(rules.remove("#a").is_some());
        assert!(rules.ids().is_empty());
        assert!(rules.remove("#a").is_none());
    }

    #[test]
    fn test_reinsert_after_remove_moves_to_end() {
        let mut rules = RuleSet::new();
        rules.insert(Selector::new("a"));
        rules.insert(Selector::new("b"));
        rules.remove("a");
        rules.insert(Selector::new("a"));
        rules.insert(Selector::new("a"));

        assert_eq!(rules.elements(), ["b", "a"]);
    }
}
