//! Selector blocks and their declarations.

use log::trace;

use crate::types::Selector;

/// Scans `name { declarations }` blocks in source order.
///
/// A block runs from a `{` to the first `}` after it. The name is whatever
/// sits between the previous block and that `{`. Text after the last closing
/// brace is ignored.
pub(crate) fn parse_selectors(text: &str) -> Vec<Selector> {
    let mut selectors = Vec::new();
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find('{') {
        let open = cursor + found;
        let Some(close) = text[open..].find('}').map(|i| open + i) else {
            break;
        };

        let name = text[cursor..open].trim();
        let body = text[open + 1..close].replace('{', "");
        selectors.push(Selector::new(name).with_properties(parse_declarations(&body)));
        cursor = close + 1;
    }
    selectors
}

/// Splits a block body into `(property, value)` pairs.
///
/// Fragments are separated by `;`. A fragment must contain exactly one `:`;
/// anything else is dropped.
pub(crate) fn parse_declarations(body: &str) -> Vec<(String, String)> {
    body.split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .filter_map(|fragment| match fragment.split_once(':') {
            Some((property, value)) if !value.contains(':') => {
                Some((property.trim().to_string(), value.trim().to_string()))
            }
            _ => {
                trace!("dropping declaration `{fragment}`");
                None
            }
        })
        .collect()
}
