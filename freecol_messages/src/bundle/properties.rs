//! Line-oriented `key=value` resource parsing.

/// Parses `text` into `(key, value)` pairs in file order.
///
/// Lines are trimmed; blank lines, `#` comments, and lines without a key
/// before the first `=` are skipped. Keys and values are trimmed and the
/// `\n` and `\t` escapes in values are expanded.
pub(crate) fn parse(text: &str) -> impl Iterator<Item = (&str, String)> {
    text.lines().filter_map(parse_line)
}

fn parse_line(raw: &str) -> Option<(&str, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.trim(), unescape(value.trim())))
}

fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}
