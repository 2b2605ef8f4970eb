//! Shared utility functions.

use std::borrow::Cow;

/// Shorten `text` to at most `max_chars` characters for one-line display.
///
/// Text that fits is borrowed unchanged. Longer text is cut on a character
/// boundary and ends with `…`, which counts toward `max_chars`.
pub fn shorten(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = text.chars().take(keep).collect();
    out.push('…');
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_borrowed() {
        assert!(matches!(shorten("python", 10), Cow::Borrowed("python")));
        assert_eq!(shorten("", 3), "");
    }

    #[test]
    fn test_long_text_gets_ellipsis() {
        assert_eq!(shorten("Find Python developers", 8), "Find Py…");
        assert_eq!(shorten("Find Python developers", 8).chars().count(), 8);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(shorten("Müller, Søren", 13), "Müller, Søren");
        assert_eq!(shorten("Müller, Søren", 7), "Müller…");
    }
}
