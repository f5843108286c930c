//! Character counting and terminal width for transliterated text.

use unicode_width::UnicodeWidthStr;

/// Number of Unicode scalar values, which is what users see counted.
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Terminal column width. Nonspacing signs such as the virama take no column
/// of their own.
pub fn display_width(s: &str) -> usize {
    s.width()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("abc"), 3);
        assert_eq!(char_count("कि"), 2);
        assert_eq!(char_count("क\u{094D}"), 2);
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("क"), 1);
        assert!(display_width("क\u{094D}") < char_count("क\u{094D}"));
    }
}
