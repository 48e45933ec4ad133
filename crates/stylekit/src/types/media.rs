//! `@media` blocks.

use std::fmt;
use std::str::FromStr;

use crate::render::{ToCss, indent};
use crate::types::{RuleSet, SelectorContainer, selector::DEFAULT_TAB_SIZE};

/// Media types recognised in a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    All,
    Print,
    Screen,
    Speech,
}

impl MediaType {
    /// Detection order when reading a query: the first type found wins.
    pub const ALL: [Self; 4] = [Self::All, Self::Print, Self::Screen, Self::Speech];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Print => "print",
            Self::Screen => "screen",
            Self::Speech => "speech",
        }
    }
}

/// Leading condition of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCondition {
    Not,
    Only,
}

impl MediaCondition {
    /// Both conditions. When a query names both, the later entry wins.
    pub const ALL: [Self; 2] = [Self::Not, Self::Only];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Only => "only",
        }
    }
}

/// Error for a media type or condition keyword that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown media keyword `{0}`")]
pub struct UnknownMediaKeyword(pub String);

impl FromStr for MediaType {
    type Err = UnknownMediaKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMediaKeyword(s.to_string()))
    }
}

impl FromStr for MediaCondition {
    type Err = UnknownMediaKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMediaKeyword(s.to_string()))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MediaCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `@media` block: a query plus the selectors and comments it groups.
///
/// # Examples
///
/// ```
/// use stylekit::{Media, MediaType, Selector, SelectorContainer};
///
/// let mut media = Media::new().with_type(MediaType::Screen).with_tab_size(2);
/// media.set_feature("max-width", "480px");
/// media.add_selector(Selector::new("body").with_tab_size(2).with_properties([("color", "red")]));
///
/// assert_eq!(
///     media.to_string(),
///     "@media screen and (max-width: 480px) {\n  body {\n    color: red;\n  }\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    media_type: Option<MediaType>,
    condition: Option<MediaCondition>,
    features: Vec<(String, String)>,
    rules: RuleSet,
    tab_size: usize,
}

impl Default for Media {
    fn default() -> Self {
        Self::new()
    }
}

impl Media {
    pub fn new() -> Self {
        Self {
            media_type: None,
            condition: None,
            features: Vec::new(),
            rules: RuleSet::default(),
            tab_size: DEFAULT_TAB_SIZE,
        }
    }

    pub fn with_type(mut self, media_type: MediaType) -> Self {
        self.media_type = Some(media_type);
        self
    }

    pub fn with_condition(mut self, condition: MediaCondition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn with_features<K, V>(mut self, features: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_features(features);
        self
    }

    pub fn with_tab_size(mut self, tab_size: usize) -> Self {
        self.tab_size = tab_size;
        self
    }

    pub fn set_type(&mut self, media_type: Option<MediaType>) {
        self.media_type = media_type;
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    pub fn set_condition(&mut self, condition: Option<MediaCondition>) {
        self.condition = condition;
    }

    pub fn condition(&self) -> Option<MediaCondition> {
        self.condition
    }

    /// Sets a feature, replacing the value in place if it already exists.
    pub fn set_feature(&mut self, feature: impl Into<String>, value: impl Into<String>) {
        let feature = feature.into();
        let value = value.into();
        match self.features.iter_mut().find(|(name, _)| *name == feature) {
            Some((_, existing)) => *existing = value,
            None => self.features.push((feature, value)),
        }
    }

    pub fn set_features<K, V>(&mut self, features: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (feature, value) in features {
            self.set_feature(feature, value);
        }
    }

    pub fn feature(&self, feature: &str) -> Option<&str> {
        self.features
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.feature(feature).is_some()
    }

    pub fn features(&self) -> impl Iterator<Item = (&str, &str)> {
        self.features
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size;
    }

    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// The query between `@media` and `{`, e.g. `only screen and (max-width: 480px)`.
    pub fn query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(condition) = self.condition {
            parts.push(condition.to_string());
        }
        if let Some(media_type) = self.media_type {
            parts.push(media_type.to_string());
        }
        if !self.features.is_empty() {
            if !parts.is_empty() {
                parts.push("and".to_string());
            }
            let features: Vec<String> = self
                .features
                .iter()
                .map(|(name, value)| format!("({name}: {value})"))
                .collect();
            parts.push(features.join(" and "));
        }
        parts.join(" ")
    }
}

impl SelectorContainer for Media {
    fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    fn rule_set_mut(&mut self) -> &mut RuleSet {
        &mut self.rules
    }
}

impl ToCss for Media {
    fn write_css(&self, out: &mut String, minify: bool) {
        let query = self.query();

        if minify {
            out.push_str(" @media");
            if !query.is_empty() {
                out.push(' ');
                out.push_str(&query);
            }
            out.push('{');
            for selector in self.rules.iter() {
                selector.write_css(out, true);
            }
            out.push('}');
            return;
        }

        for comment in self.rules.comments() {
            comment.write_css(out, false);
        }
        out.push_str("@media");
        if !query.is_empty() {
            out.push(' ');
            out.push_str(&query);
        }
        out.push_str(" {\n");

        let blocks: Vec<String> = self
            .rules
            .iter()
            .map(|selector| indent(&selector.to_css(false), self.tab_size))
            .collect();
        out.push_str(&blocks.join("\n"));
        out.push_str("}\n");
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Selector;

    #[test]
    fn test_keywords_round_trip() {
        for kind in MediaType::ALL {
            assert_eq!(kind.as_str().parse::<MediaType>(), Ok(kind));
        }
        assert_eq!("ONLY".parse::<MediaCondition>(), Ok(MediaCondition::Only));
        assert!("tv".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_query_parts() {
        let media = Media::new()
            .with_condition(MediaCondition::Only)
            .with_type(MediaType::Screen)
            .with_features([("min-width", "100px"), ("max-width", "480px")]);
        assert_eq!(
            media.query(),
            "only screen and (min-width: 100px) and (max-width: 480px)"
        );

        assert_eq!(Media::new().with_type(MediaType::Print).query(), "print");
        assert_eq!(
            Media::new().with_features([("orientation", "landscape")]).query(),
            "(orientation: landscape)"
        );
    }

    #[test]
    fn test_feature_replaced_in_place() {
        let mut media = Media::new().with_features([("a", "1"), ("b", "2")]);
        media.set_feature("a", "3");
        let features: Vec<_> = media.features().collect();
        assert_eq!(features, vec![("a", "3"), ("b", "2")]);
        assert!(media.has_feature("b"));
        assert_eq!(media.feature("c"), None);
    }

    #[test]
    fn test_minified() {
        let mut media = Media::new().with_type(MediaType::Screen);
        media.add_selector(Selector::new("p").with_properties([("margin", "0")]));
        media.add_selector(Selector::new(".x").with_properties([("color", "red")]));
        assert_eq!(media.to_css(true), " @media screen{p{margin:0;}.x{color:red;}}");
    }

    #[test]
    fn test_selectors_separated_by_blank_line() {
        let mut media = Media::new().with_type(MediaType::Print).with_tab_size(2);
        media.add_selector(Selector::new("p").with_tab_size(2).with_properties([("margin", "0")]));
        media.add_selector(Selector::new("b").with_tab_size(2).with_properties([("margin", "1px")]));
        assert_eq!(
            media.to_string(),
            "@media print {\n  p {\n    margin: 0;\n  }\n\n  b {\n    margin: 1px;\n  }\n}\n"
        );
    }
}
