// src/util/text.rs

/// First non-empty line of `text`, trimmed and cut to `max_chars` characters.
///
/// An ellipsis marks a cut, either because the line was too long or because
/// more lines follow.
///
/// # Examples
///
/// ```
/// use notedeck::util::text::excerpt;
///
/// assert_eq!(excerpt("10am standup\nroom 4", 40), "10am standup…");
/// assert_eq!(excerpt("short", 40), "short");
/// ```
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());
    let first = lines.next().unwrap_or("");
    let more_lines = lines.next().is_some();

    let mut out: String = first.chars().take(max_chars).collect();
    if first.chars().count() > max_chars || more_lines {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_single_short_line_when_excerpting_then_returns_it_unchanged() {
        assert_eq!(excerpt("Buy milk", 20), "Buy milk");
    }

    #[test]
    fn given_long_line_when_excerpting_then_cuts_at_char_limit() {
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn given_multibyte_text_when_excerpting_then_cuts_on_char_boundary() {
        assert_eq!(excerpt("Catatan über alles", 9), "Catatan ü…");
    }

    #[test]
    fn given_leading_blank_lines_when_excerpting_then_skips_them() {
        assert_eq!(excerpt("\n  \n  First\n", 20), "First");
    }

    #[test]
    fn given_empty_text_when_excerpting_then_returns_empty_string() {
        assert_eq!(excerpt("", 20), "");
    }
}
