//! CSS text to stylesheet graph.
//!
//! Parsing is best effort and never fails: declarations without a single
//! `:`, unterminated blocks and comments with nothing to attach to are
//! dropped.
//!
//! The passes run in this order:
//!
//! 1. [`media`]: every brace-balanced `@media` block is lifted out of the
//!    text, together with the comment written above it, and parsed on its own.
//! 2. [`comments`]: the remaining block comments are collected. A comment at
//!    the very start of the text belongs to the stylesheet; any other belongs
//!    to the selector named right after it.
//! 3. [`selectors`]: the comment-free text is split into selector blocks and
//!    declarations, and the collected comments are attached by name.
//!
//! ## Example
//!
//! ```rust
//! use stylekit::parser::parse_css;
//! use stylekit::{MediaType, SelectorContainer};
//!
//! let sheet = parse_css("@media screen and (max-width: 480px) { body { color: red; } } ");
//! assert!(sheet.is_empty());
//!
//! let media = sheet.media(0).unwrap();
//! assert_eq!(media.media_type(), Some(MediaType::Screen));
//! assert_eq!(media.feature("max-width"), Some("480px"));
//! assert_eq!(media.selector("body").unwrap().property("color"), Some("red"));
//! ```

pub mod comments;
pub mod media;
pub mod selectors;

use std::collections::HashMap;

use log::{debug, trace};

use crate::Stylesheet;
use crate::types::{Comment, Media, SelectorContainer};

use self::comments::{
    clean_comment, collapse_blank_lines, find_comments, following_selector, strip_ranges,
};
use self::media::{find_media_blocks, leading_comment, parse_query};
use self::selectors::parse_selectors;

/// Parses CSS text into a new stylesheet.
pub fn parse_css(text: &str) -> Stylesheet {
    let mut sheet = Stylesheet::new();
    parse_into(&mut sheet, text);
    sheet
}

/// Parses CSS text, appending everything found to `sheet`.
pub fn parse_into(sheet: &mut Stylesheet, text: &str) {
    let mut remaining = text.to_string();
    let mut media_count = 0;

    for block in find_media_blocks(text) {
        trace!("@media block at {}: `{}`", block.start, block.query);
        remaining = remaining.replace(block.source, "");

        let query = parse_query(block.query);
        let mut media = Media::new().with_features(query.features);
        media.set_type(query.media_type);
        media.set_condition(query.condition);
        if let Some(comment) = leading_comment(text, block.start) {
            media.add_comment(Comment::new(comment));
        }

        let ranges = find_comments(block.body);
        let pending: HashMap<String, Comment> = ranges
            .iter()
            .filter_map(|range| named_comment(block.body, range))
            .collect();
        let body = collapse_blank_lines(&strip_ranges(block.body, &ranges));
        media.add_selectors(parse_selectors(&body));
        attach_comments(&mut media, pending);

        sheet.add_media(media);
        media_count += 1;
    }

    let ranges = find_comments(&remaining);
    let mut pending = HashMap::new();
    for range in &ranges {
        if range.start == 0 {
            sheet.add_comment(Comment::new(clean_comment(&remaining[range.clone()])));
        } else if let Some((name, comment)) = named_comment(&remaining, range) {
            pending.insert(name, comment);
        }
    }

    let body = collapse_blank_lines(&strip_ranges(&remaining, &ranges));
    let selectors = parse_selectors(&body);
    let selector_count = selectors.len();
    sheet.add_selectors(selectors);
    attach_comments(sheet, pending);

    debug!(
        "parsed {} bytes: {} selectors, {} media blocks, {} comments",
        text.len(),
        selector_count,
        media_count,
        ranges.len()
    );
}

/// Pairs a comment with the selector name that follows it.
fn named_comment(text: &str, range: &std::ops::Range<usize>) -> Option<(String, Comment)> {
    let comment = Comment::new(clean_comment(&text[range.clone()]));
    match following_selector(text, range.end) {
        Some(name) => Some((name.to_string(), comment)),
        None => {
            trace!("comment `{}` has no following selector", comment.text());
            None
        }
    }
}

/// Attaches one comment per selector name; a later comment for the same name
/// replaces an earlier one.
fn attach_comments<C: SelectorContainer>(container: &mut C, pending: HashMap<String, Comment>) {
    for (name, comment) in pending {
        match container.selector_mut(&name) {
            Some(selector) => selector.add_comment(comment),
            None => trace!("no selector `{name}` for comment `{}`", comment.text()),
        }
    }
}
