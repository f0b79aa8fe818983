//! Text normalization ahead of classification
//!
//! Both classifier layers expect input restricted to lowercase ASCII
//! letters and spaces. Punctuation, digits, and anything outside that
//! alphabet carries no signal for the keyword rules or the model
//! vocabulary, so it is stripped rather than escaped.

use std::sync::OnceLock;

use regex::Regex;

/// Characters outside the classification alphabet (lowercase ASCII
/// letters and whitespace). Compiled once per process.
fn strip_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z\s]+").expect("static pattern compiles"))
}

/// Normalize a raw expense description for classification.
///
/// Lowercases, removes every character that is not a lowercase ASCII
/// letter or a space, and trims the ends. The empty string is a valid
/// result and means "no classifiable content", e.g. an input of `"!!!"`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    strip_pattern().replace_all(&lowered, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Buy new Shoes!!"), "buy new shoes");
    }

    #[test]
    fn test_digits_and_symbols_removed() {
        assert_eq!(normalize("KFC #42 - 12.50$"), "kfc");
    }

    #[test]
    fn test_interior_spaces_survive() {
        assert_eq!(normalize("grab  to   airport"), "grab  to   airport");
    }

    #[test]
    fn test_symbol_only_input_is_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("123 456"), "");
    }

    #[test]
    fn test_whitespace_only_input_is_empty() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_non_ascii_letters_removed() {
        // Lowercasing happens first, so uppercase non-ASCII doesn't sneak
        // through as-is either.
        assert_eq!(normalize("Ăn phở Hà Nội"), "n ph h ni");
    }
}
