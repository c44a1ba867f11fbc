//! Property-list grammar.
//!
//! ```text
//! list     := (pair ","?)*
//! pair     := key "=" value
//! key      := [^,=:*?]+
//! value    := quoted | unquoted
//! quoted   := '"' ( [^\\"]* ( '\' <any char but a line terminator> )? )* '"'
//! unquoted := [^,=:"]*
//! ```
//!
//! Matching is greedy and stops silently at the first position where no pair
//! matches. Values are kept verbatim: quotes and escapes are not removed.
//! Every delimiter is ASCII, so byte offsets found by scanning for them are
//! always char boundaries.

use beanprop_core::KeyPropertyList;

/// Parse an encoded key property list into its ordered pairs.
///
/// Never fails. Malformed input yields the pairs matched before the first
/// position where the grammar no longer applies, possibly none.
pub fn parse_key_property_list(input: &str) -> KeyPropertyList {
    let mut properties = KeyPropertyList::new();
    let mut rest = input;

    while let Some((key, value, consumed)) = match_pair(rest) {
        properties.insert(key, value);
        rest = &rest[consumed..];
        if let Some(after_separator) = rest.strip_prefix(',') {
            rest = after_separator;
        }
    }

    properties
}

/// Match one `key=value` at the start of `s`, returning the pair and the
/// number of bytes consumed.
fn match_pair(s: &str) -> Option<(&str, &str, usize)> {
    let key_len = scan_while(s, |b| !is_key_delimiter(b));
    if key_len == 0 || s.as_bytes().get(key_len) != Some(&b'=') {
        return None;
    }

    let value_start = key_len + 1;
    let value_src = &s[value_start..];
    let value_len = match_quoted(value_src).unwrap_or_else(|| match_unquoted(value_src));
    let end = value_start + value_len;

    Some((&s[..key_len], &s[value_start..end], end))
}

/// Length of a quoted value at the start of `s`, including both quotes.
///
/// `None` when `s` does not open with a quote or the closing quote is never
/// reached; the caller then falls back to the unquoted form.
fn match_quoted(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'"') {
        return None;
    }

    let mut pos = 1;
    loop {
        match bytes.get(pos).copied()? {
            b'"' => return Some(pos + 1),
            b'\\' => {
                let escaped = s[pos + 1..].chars().next()?;
                if is_line_terminator(escaped) {
                    return None;
                }
                pos += 1 + escaped.len_utf8();
            }
            _ => pos += 1,
        }
    }
}

/// Length of an unquoted value at the start of `s`. May be zero.
fn match_unquoted(s: &str) -> usize {
    scan_while(s, |b| !matches!(b, b',' | b'=' | b':' | b'"'))
}

fn scan_while(s: &str, accept: impl Fn(u8) -> bool) -> usize {
    s.bytes().position(|b| !accept(b)).unwrap_or(s.len())
}

fn is_key_delimiter(b: u8) -> bool {
    matches!(b, b',' | b'=' | b':' | b'*' | b'?')
}

// An escape consumes any single char except these.
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}
