//! Block comment extraction and association.

use std::ops::Range;

use nom::{
    IResult,
    bytes::complete::{tag, take_until},
    combinator::recognize,
    sequence::tuple,
};

/// Matches one `/* ... */` comment, shortest first.
fn block_comment(input: &str) -> IResult<&str, &str> {
    recognize(tuple((tag("/*"), take_until("*/"), tag("*/"))))(input)
}

/// Byte ranges of every terminated block comment, in source order.
///
/// An unterminated `/*` ends the scan and stays in the text.
pub(crate) fn find_comments(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut offset = 0;

    while let Some(found) = text[offset..].find("/*") {
        let start = offset + found;
        match block_comment(&text[start..]) {
            Ok((rest, _)) => {
                let end = text.len() - rest.len();
                ranges.push(start..end);
                offset = end;
            }
            Err(_) => break,
        }
    }
    ranges
}

/// Strips comment markers and stray `*` from each line, trimming as it goes.
///
/// ```text
/// /**
///  * Login form
///  */
/// ```
///
/// becomes `Login form`.
pub(crate) fn clean_comment(raw: &str) -> String {
    let lines: Vec<String> = raw
        .split('\n')
        .map(|line| {
            line.replace("/*", "")
                .replace("*/", "")
                .replace('*', "")
                .trim()
                .to_string()
        })
        .collect();
    lines.join("\n").trim().to_string()
}

/// The selector name written between a comment's end and the next `{`.
pub(crate) fn following_selector(text: &str, comment_end: usize) -> Option<&str> {
    let rest = &text[comment_end..];
    let open = rest.find('{')?;
    Some(rest[..open].trim())
}

/// Removes the given ranges, which must be sorted and disjoint.
pub(crate) fn strip_ranges(text: &str, ranges: &[Range<usize>]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        out.push_str(&text[cursor..range.start]);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Collapses every run of whitespace that spans two or more line breaks
/// into a single `\n`.
pub(crate) fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('\n') {
        out.push_str(&rest[..=pos]);
        let after = &rest[pos + 1..];
        let run = after.len() - after.trim_start().len();
        rest = match after[..run].rfind('\n') {
            Some(last) => &after[last + 1..],
            None => after,
        };
    }
    out.push_str(rest);
    out
}
