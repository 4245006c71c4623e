use regex::Regex;
use std::sync::LazyLock;

pub const ELLIPSIS: &str = "…";

// Control characters other than tab, LF and CR, plus the C1 range
static NON_PRINTABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x{80}-\x{9F}]").unwrap());

/// Replace non-printable characters with U+FFFD
pub fn sanitize(text: &str) -> String {
    NON_PRINTABLE.replace_all(text, "\u{fffd}").into_owned()
}

/// Sanitize and crop `text` to `limit` characters by eliding its middle.
///
/// The head keeps the extra character when the remaining budget is odd.
/// A limit of 0 disables cropping.
pub fn crop_string(text: &str, limit: usize) -> String {
    let text = sanitize(text);
    if limit == 0 {
        return text;
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    let limit = limit.max(ellipsis_len + 1);
    let len = text.chars().count();
    if len <= limit {
        return text;
    }

    let budget = limit - ellipsis_len;
    let head = budget.div_ceil(2);
    let tail = budget / 2;
    let head_text: String = text.chars().take(head).collect();
    let tail_text: String = text.chars().skip(len - tail).collect();
    format!("{}{}{}", head_text, ELLIPSIS, tail_text)
}

/// Show line breaks as their escape sequences
pub fn escape_newlines(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

/// Wrap `text` in double quotes, escaping backslashes, quotes and line breaks
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Display form of a URL: sanitized, cropped in the middle so the file name survives
pub fn url_display_string(url: &str, limit: usize) -> String {
    crop_string(url, limit)
}
