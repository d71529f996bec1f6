//! Small byte-string helpers shared by the layout parser and the content writer.
//!
//! Layout files are treated as single-byte text and never decoded: whitespace is
//! ASCII whitespace, case folding only touches ASCII letters, and every other byte
//! passes through untouched into the PDF.

/// Whitespace as the C locale sees it, which includes vertical tab
fn is_space(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Strip leading and trailing whitespace
pub fn trim(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| !is_space(b)).unwrap_or(s.len());
    let end = s.iter().rposition(|b| !is_space(b)).map_or(start, |i| i + 1);
    &s[start..end]
}

/// Lowercase the ASCII letters of `s`, leaving everything else untouched
pub fn to_lower(s: &[u8]) -> Vec<u8> {
    s.to_ascii_lowercase()
}

/// Position of the first occurrence of `needle` in `haystack`
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Split `s` on commas, trimming each part.
///
/// Interior empty parts are kept so that positional parameters stay in place
/// (`"14,,right"` is size, default colour, alignment). A trailing segment that
/// is completely empty is dropped, so `"14,"` yields just `["14"]`.
pub fn split_by_comma(s: &[u8]) -> Vec<&[u8]> {
    let mut parts: Vec<&[u8]> = s.split(|&b| b == b',').collect();
    if parts.last().is_some_and(|last| last.is_empty()) {
        parts.pop();
    }
    parts.into_iter().map(trim).collect()
}

/// Parse the integer at the start of `s` the way C's `atoi` does: leading
/// whitespace is skipped, an optional sign is honoured, and parsing stops at the
/// first non-digit. Returns 0 when there are no digits. Saturates rather than
/// overflowing.
pub fn parse_leading_int(s: &[u8]) -> i64 {
    let start = s.iter().position(|b| !is_space(b)).unwrap_or(s.len());
    let s = &s[start..];
    let (negative, digits) = match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }

    if negative {
        -value
    } else {
        value
    }
}

/// Escape the bytes that are special inside a PDF literal string:
/// `(`, `)` and `\` are each prefixed with a backslash.
pub fn escape_pdf_string(s: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for &b in s {
        if matches!(b, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parts(s: &str) -> Vec<String> {
        split_by_comma(s.as_bytes())
            .into_iter()
            .map(|part| String::from_utf8_lossy(part).into_owned())
            .collect()
    }

    #[test]
    fn trims_c_whitespace() {
        assert_eq!(trim(b"  hello \t\r"), b"hello");
        assert_eq!(trim(b"\x0bboxed\x0c"), b"boxed");
        assert_eq!(trim(b"   "), b"");
        assert_eq!(trim(b""), b"");
        assert_eq!(trim(b"a b"), b"a b");
    }

    #[test]
    fn high_bytes_are_not_whitespace() {
        assert_eq!(trim(b"\xa0caf\xe9\xa0"), b"\xa0caf\xe9\xa0");
    }

    #[test]
    fn lowercases_ascii_only() {
        assert_eq!(to_lower(b"BoTtOm"), b"bottom");
        assert_eq!(to_lower(b"GREY \xC9"), b"grey \xC9");
    }

    #[test]
    fn finds_subsequences() {
        assert_eq!(find(b"text // note", b"//"), Some(5));
        assert_eq!(find(b"a / b", b"//"), None);
        assert_eq!(find(b"/", b"//"), None);
    }

    #[test]
    fn splits_and_trims_parts() {
        assert_eq!(parts("14, red , center"), vec!["14", "red", "center"]);
        assert_eq!(parts("14,,right"), vec!["14", "", "right"]);
        assert_eq!(parts("14"), vec!["14"]);
    }

    #[test]
    fn split_drops_only_a_truly_empty_tail() {
        assert_eq!(parts("14,"), vec!["14"]);
        assert_eq!(parts("14, "), vec!["14", ""]);
        assert_eq!(parts(""), Vec::<String>::new());
        assert_eq!(parts(","), vec![""]);
    }

    #[test]
    fn parses_like_atoi() {
        assert_eq!(parse_leading_int(b"14"), 14);
        assert_eq!(parse_leading_int(b"  18pt"), 18);
        assert_eq!(parse_leading_int(b"-5"), -5);
        assert_eq!(parse_leading_int(b"+7"), 7);
        assert_eq!(parse_leading_int(b"big"), 0);
        assert_eq!(parse_leading_int(b""), 0);
        assert_eq!(parse_leading_int(b"-"), 0);
        assert_eq!(parse_leading_int(b"99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn escapes_literal_string_delimiters() {
        assert_eq!(escape_pdf_string(b"plain"), b"plain");
        assert_eq!(escape_pdf_string(b"f(x)"), b"f\\(x\\)");
        assert_eq!(escape_pdf_string(b"C:\\dir"), b"C:\\\\dir");
        assert_eq!(escape_pdf_string(b"caf\xe9"), b"caf\xe9");
    }
}
