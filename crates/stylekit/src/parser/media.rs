//! `@media` block scanning and query parsing.

use nom::{
    IResult,
    bytes::complete::take_until,
    character::complete::char,
    multi::many0,
    sequence::{delimited, preceded},
};

use crate::parser::comments::clean_comment;
use crate::types::{MediaCondition, MediaType};

const AT_MEDIA: &str = "@media";

/// One `@media` block found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MediaBlock<'a> {
    /// Offset of the `@` in the scanned text.
    pub start: usize,
    /// The whole block, `@media` through the closing brace.
    pub source: &'a str,
    /// Text between `@media` and the opening brace, trimmed.
    pub query: &'a str,
    /// Text between the outer braces, trimmed.
    pub body: &'a str,
}

/// Finds every `@media` block whose braces balance.
///
/// Braces are counted naively: quotes and comments get no special
/// treatment. A block whose braces never balance is skipped and the scan
/// resumes after its `@media` keyword.
pub(crate) fn find_media_blocks(text: &str) -> Vec<MediaBlock<'_>> {
    let mut blocks = Vec::new();
    let mut offset = 0;

    while let Some(found) = text[offset..].find(AT_MEDIA) {
        let start = offset + found;
        let after_keyword = start + AT_MEDIA.len();
        offset = after_keyword;

        let at_word_boundary = text[after_keyword..]
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        if !at_word_boundary {
            continue;
        }

        let Some(open) = text[after_keyword..].find('{').map(|i| after_keyword + i) else {
            break;
        };
        let Some(close) = matching_brace(text, open) else {
            continue;
        };

        blocks.push(MediaBlock {
            start,
            source: &text[start..=close],
            query: text[after_keyword..open].trim(),
            body: text[open + 1..close].trim(),
        });
        offset = close + 1;
    }
    blocks
}

/// Offset of the `}` that closes the `{` at `open`.
fn matching_brace(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// The comment written directly above the block starting at `start`.
///
/// Walks backward to the nearest `/` or `}`. Landing on a `/` means a
/// comment ends there, and its text runs back to the previous `/*`.
pub(crate) fn leading_comment(text: &str, start: usize) -> Option<String> {
    let before = &text[..start];
    let pos = before.rfind(['/', '}'])?;
    if before[pos..].starts_with('}') {
        return None;
    }

    let upto = &before[..=pos];
    let open = upto.rfind("/*")?;
    let comment = clean_comment(&upto[open..]);
    (!comment.is_empty()).then_some(comment)
}

/// What a media query string says, as far as this crate models it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MediaQuery {
    pub media_type: Option<MediaType>,
    pub condition: Option<MediaCondition>,
    pub features: Vec<(String, String)>,
}

/// Reads type, condition and features out of a query.
///
/// Type and condition are plain substring checks. For the type the first hit
/// in `all`, `print`, `screen`, `speech` wins; for the condition `only`
/// overrides `not` when both appear. Features are the
/// `(name: value)` groups between the first `(` and the last `)`; a group
/// without exactly one `:` is ignored.
pub(crate) fn parse_query(query: &str) -> MediaQuery {
    let media_type = MediaType::ALL
        .into_iter()
        .find(|kind| query.contains(kind.as_str()));
    let condition = MediaCondition::ALL
        .into_iter()
        .rev()
        .find(|condition| query.contains(condition.as_str()));

    let features = match (query.find('('), query.rfind(')')) {
        (Some(open), Some(close)) if open < close => feature_groups(&query[open..=close])
            .into_iter()
            .filter_map(split_feature)
            .collect(),
        _ => Vec::new(),
    };

    MediaQuery {
        media_type,
        condition,
        features,
    }
}

/// One parenthesized group, skipping whatever joins it to the previous one.
fn feature_group(input: &str) -> IResult<&str, &str> {
    preceded(
        take_until("("),
        delimited(char('('), take_until(")"), char(')')),
    )(input)
}

fn feature_groups(input: &str) -> Vec<&str> {
    many0(feature_group)(input)
        .map(|(_, groups)| groups)
        .unwrap_or_default()
}

fn split_feature(group: &str) -> Option<(String, String)> {
    let mut parts = group.split(':');
    let (name, value) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    Some((name.trim().to_string(), value.trim().to_string()))
}
