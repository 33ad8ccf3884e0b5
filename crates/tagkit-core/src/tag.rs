//! Turning arbitrary selected text into a tag token.
//!
//! Tokens are lowercase Latin or Cyrillic letters, ASCII digits, `_` and `-`,
//! with no leading, trailing or doubled hyphens.

use unicode_normalization::UnicodeNormalization;

/// Normalizes `text` into a tag token. Returns an empty string when nothing
/// usable is left (the caller treats that as "invalid").
pub fn normalize_tag(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .trim()
        .nfc()
        .map(|c| if is_allowed(c) { c } else { '-' })
        .collect();

    let mut tag = String::with_capacity(replaced.len());
    for c in replaced.trim_matches('-').chars() {
        if c == '-' && tag.ends_with('-') {
            continue;
        }
        tag.push(c);
    }
    tag
}

/// Like [normalize_tag], but reports an empty result as [TagError::Invalid].
pub fn tag_from_selection(text: &str) -> Result<String, TagError> {
    let tag = normalize_tag(text);
    if tag.is_empty() {
        return Err(TagError::Invalid);
    }
    Ok(tag)
}

/// True when `s` already is a tag token (non-empty, allowed chars only,
/// no stray hyphens).
pub fn is_tag_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars().all(is_allowed)
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
}

fn is_allowed(c: char) -> bool {
    matches!(c, 'a'..='z' | 'а'..='я' | 'ё' | '0'..='9' | '_' | '-')
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    #[error("selection does not normalize to a valid tag")]
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_latin_phrase() {
        assert_eq!(normalize_tag("Hello World!"), "hello-world");
    }

    #[test]
    fn normalize_cyrillic_phrase() {
        assert_eq!(normalize_tag("Привет мир"), "привет-мир");
        assert_eq!(normalize_tag("ЁЖИК"), "ёжик");
    }

    #[test]
    fn normalize_composes_combining_marks() {
        // Е + combining diaeresis composes to ё before filtering.
        assert_eq!(normalize_tag("\u{0415}\u{0308}лка"), "ёлка");
    }

    #[test]
    fn normalize_only_disallowed_is_empty() {
        assert_eq!(normalize_tag("!!!@@@"), "");
        assert_eq!(normalize_tag("   "), "");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn normalize_strips_and_collapses_hyphens() {
        assert_eq!(normalize_tag("  --Foo---Bar--  "), "foo-bar");
        assert_eq!(normalize_tag("a / b & c"), "a-b-c");
    }

    #[test]
    fn normalize_keeps_digits_and_underscores() {
        assert_eq!(normalize_tag("snake_case 2024"), "snake_case-2024");
    }

    #[test]
    fn normalize_replaces_accented_latin() {
        assert_eq!(normalize_tag("Café Noir"), "caf-noir");
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["Hello World!", "Привет мир", "--x--y--", "Ёлка 2", "a_b-c"] {
            let once = normalize_tag(input);
            assert_eq!(normalize_tag(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn normalized_output_is_a_token() {
        for input in ["Hello World!", "  ~~tag~~ ", "Мой -- тег", "x"] {
            assert!(is_tag_token(&normalize_tag(input)), "input {input:?}");
        }
        assert!(!is_tag_token(""));
        assert!(!is_tag_token("-a"));
        assert!(!is_tag_token("a--b"));
        assert!(!is_tag_token("Upper"));
    }

    #[test]
    fn tag_from_selection_reports_invalid() {
        assert_eq!(tag_from_selection("Rust"), Ok("rust".to_string()));
        assert_eq!(tag_from_selection("???"), Err(TagError::Invalid));
    }
}
