//! Quote/unquote codec shared by the parser and the formatter.
//!
//! Three value forms exist:
//!
//! * **bare** — written as-is, e.g. `0.7`
//! * **quoted** — `"..."`, used when the value is empty, has a newline or
//!   leading/trailing space, or starts with `"`
//! * **triple-quoted** — `"""..."""`, used when such a value also contains
//!   a double quote
//!
//! There is no escape sequence. A `"` inside the single-quoted form is an
//! error.

use std::borrow::Cow;

const QUOTE: char = '"';
const TRIPLE_QUOTE: &str = "\"\"\"";

/// Why a value could not be unquoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnquoteError {
    /// Nothing to unquote.
    Empty,
    /// Opening quote with no matching closing quote (yet).
    Unterminated,
    /// Single-quoted form containing another `"`; no amount of further
    /// input can make it valid.
    InteriorQuote,
}

/// Quote `value` only when it needs it.
///
/// Besides newlines and edge spaces, an empty value or one that starts
/// with `"` is quoted too, since neither would read back as written.
pub fn quote(value: &str) -> Cow<'_, str> {
    let needs_quotes = value.is_empty()
        || value.starts_with(QUOTE)
        || value.contains(['\n', '\r'])
        || value.starts_with(' ')
        || value.ends_with(' ');
    if !needs_quotes {
        return Cow::Borrowed(value);
    }

    if value.contains(QUOTE) {
        Cow::Owned(format!("{TRIPLE_QUOTE}{value}{TRIPLE_QUOTE}"))
    } else {
        Cow::Owned(format!("{QUOTE}{value}{QUOTE}"))
    }
}

/// Strip the quotes from `text`, or `None` if it is empty or malformed.
pub fn unquote(text: &str) -> Option<&str> {
    try_unquote(text).ok()
}

/// Like [`unquote`], but says why the text was rejected.
pub fn try_unquote(text: &str) -> Result<&str, UnquoteError> {
    if text.is_empty() {
        return Err(UnquoteError::Empty);
    }

    if text.starts_with(TRIPLE_QUOTE) {
        // The opening and closing delimiters must not overlap.
        if text.len() >= 2 * TRIPLE_QUOTE.len() && text.ends_with(TRIPLE_QUOTE) {
            return Ok(&text[TRIPLE_QUOTE.len()..text.len() - TRIPLE_QUOTE.len()]);
        }
        return Err(UnquoteError::Unterminated);
    }

    if let Some(rest) = text.strip_prefix(QUOTE) {
        return match rest.strip_suffix(QUOTE) {
            Some(inner) if inner.contains(QUOTE) => Err(UnquoteError::InteriorQuote),
            Some(inner) => Ok(inner),
            None if rest.contains(QUOTE) => Err(UnquoteError::InteriorQuote),
            None => Err(UnquoteError::Unterminated),
        };
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_values_stay_bare() {
        assert!(matches!(quote("llama3"), Cow::Borrowed("llama3")));
        assert_eq!(quote("say \"hi\""), "say \"hi\"");
    }

    #[test]
    fn empty_value_is_quoted() {
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn leading_quote_uses_triple_form() {
        assert_eq!(quote("\"hi\" there"), "\"\"\"\"hi\" there\"\"\"");
        assert_eq!(quote("\""), "\"\"\"\"\"\"\"");
    }

    #[test]
    fn edge_spaces_and_newlines_get_quoted() {
        assert_eq!(quote(" padded"), "\" padded\"");
        assert_eq!(quote("padded "), "\"padded \"");
        assert_eq!(quote("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn embedded_quote_uses_triple_form() {
        assert_eq!(quote("a \"b\"\nc"), "\"\"\"a \"b\"\nc\"\"\"");
        assert_eq!(quote(" \"x\""), "\"\"\" \"x\"\"\"\"");
    }

    #[test]
    fn unquote_bare_and_quoted() {
        assert_eq!(unquote("0.7"), Some("0.7"));
        assert_eq!(unquote("\"Hello there\""), Some("Hello there"));
        assert_eq!(unquote("\"\""), Some(""));
        assert_eq!(unquote("\"\"\"line1\nline2\"\"\""), Some("line1\nline2"));
        assert_eq!(unquote("\"\"\"\"\"\""), Some(""));
    }

    #[test]
    fn unquote_keeps_triple_content_verbatim() {
        assert_eq!(unquote("\"\"\"say \"hi\"\"\"\""), Some("say \"hi\""));
    }

    #[test]
    fn unquote_rejects_malformed() {
        assert_eq!(try_unquote(""), Err(UnquoteError::Empty));
        assert_eq!(try_unquote("\""), Err(UnquoteError::Unterminated));
        assert_eq!(try_unquote("\"open"), Err(UnquoteError::Unterminated));
        assert_eq!(try_unquote("\"\"\""), Err(UnquoteError::Unterminated));
        assert_eq!(try_unquote("\"\"\"\"\""), Err(UnquoteError::Unterminated));
        assert_eq!(try_unquote("\"\"\"open"), Err(UnquoteError::Unterminated));
    }

    #[test]
    fn interior_quote_in_single_form_is_rejected() {
        assert_eq!(try_unquote("\"a\"b\""), Err(UnquoteError::InteriorQuote));
        assert_eq!(try_unquote("\"a\"b"), Err(UnquoteError::InteriorQuote));
        assert_eq!(unquote("\"say \"hi\" now\""), None);
    }

    #[test]
    fn quoted_output_unquotes_to_input() {
        let values = [
            "x",
            "",
            " lead",
            "trail ",
            "two\nlines",
            "q\"uote\nd",
            "\r\n",
            "\"hi\" there",
            "\"\"",
        ];
        for value in values {
            assert_eq!(unquote(&quote(value)), Some(value), "value {value:?}");
        }
    }
}
