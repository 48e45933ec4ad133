//! Serialization of style nodes back to CSS text.

/// Types that serialize to CSS.
///
/// `minify` is decided by whoever starts the render and is handed down to
/// every nested node, so a node never has to remember how its parent wants
/// it printed.
pub trait ToCss {
    /// Appends this node's CSS to `out`.
    fn write_css(&self, out: &mut String, minify: bool);

    fn to_css(&self, minify: bool) -> String {
        let mut out = String::new();
        self.write_css(&mut out, minify);
        out
    }
}

/// Greedy word wrap at `width` columns.
///
/// Words longer than `width` are left intact on their own line.
pub(crate) fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Prefixes every non-empty line of `block` with `width` spaces.
pub(crate) fn indent(block: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    let mut out = String::with_capacity(block.len());
    for line in block.split_inclusive('\n') {
        if line.trim().is_empty() {
            out.push_str(line.trim_start_matches(' '));
        } else {
            out.push_str(&pad);
            out.push_str(line);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_wrap_long_word() {
        assert_eq!(
            word_wrap("a supercalifragilistic b", 5),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("a {\n\n}\n", 2), "  a {\n\n  }\n");
    }
}
