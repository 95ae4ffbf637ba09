//! Text normalization for lyric comparison.
//!
//! Two projections of the same text are used throughout the crate:
//! - the display form keeps casing and accents, only apostrophes are unified;
//! - the comparison key is lowercased, accent-stripped and punctuation-free,
//!   and is the only thing ever compared for equality.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonical apostrophe every variant is folded into.
pub const APOSTROPHE: char = '\'';

/// Typographic apostrophes and look-alikes found in scraped lyrics.
const APOSTROPHE_VARIANTS: &[char] = &['\u{2019}', '\u{2018}', '\u{00B4}', '\u{0060}'];

/// Anything that is not a word character, whitespace or an apostrophe.
#[allow(clippy::expect_used)]
static RE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s']").expect("valid regex: RE_PUNCTUATION")
});

/// Fold every apostrophe variant into [`APOSTROPHE`].
///
/// Casing and accents are preserved, so this is safe for display text.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| if APOSTROPHE_VARIANTS.contains(&c) { APOSTROPHE } else { c })
        .collect()
}

/// Remove diacritics by decomposing (NFD) and dropping combining marks.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Build the comparison key of a word or phrase.
///
/// Apostrophes become word separators (`l'amour` and `l amour` share a key),
/// other punctuation is dropped, and whitespace is collapsed and trimmed.
pub fn comparison_key(text: &str) -> String {
    let folded = strip_accents(&normalize(text).to_lowercase())
        .replace('œ', "oe")
        .replace('æ', "ae");

    let mut key = String::with_capacity(folded.len());
    let mut pending_space = false;
    for c in folded.chars() {
        if c.is_alphanumeric() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.push(c);
        } else if c.is_whitespace() || c == APOSTROPHE {
            pending_space = true;
        }
    }
    key
}

/// Whether two strings are equal under the comparison rule.
///
/// This is the rule used to judge guesses and to detect repeated phrases.
pub fn compare_equal(a: &str, b: &str) -> bool {
    comparison_key(a) == comparison_key(b)
}

/// Split one lyric line into display words.
///
/// Line-break characters are deleted, punctuation other than apostrophes
/// separates words, and fragments with nothing to compare (a lone `'` or
/// `--`) are dropped.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let unbroken: String = normalize(line).chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let spaced = RE_PUNCTUATION.replace_all(&unbroken, " ");

    spaced
        .split_whitespace()
        .filter(|word| !comparison_key(word).is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use proptest::prelude::*;

    const FRENCH_TEXT: &str = "[a-zA-Zàâçéèêëîïôûùüœ’‘'`´ ,.!?\\-]{0,40}";

    #[test]
    fn test_normalize_unifies_apostrophes() {
        assert_eq!(normalize("l’amour"), "l'amour");
        assert_eq!(normalize("l‘amour"), "l'amour");
        assert_eq!(normalize("l`amour"), "l'amour");
        assert_eq!(normalize("L’Été"), "L'Été");
    }

    #[test]
    fn test_strip_accents() {
        assert_eq!(strip_accents("café où garçon"), "cafe ou garcon");
        assert_eq!(strip_accents("Noël"), "Noel");
    }

    #[test]
    fn test_compare_equal_is_tolerant() {
        assert!(compare_equal("café", "cafe"));
        assert!(compare_equal("où", "ou"));
        assert!(compare_equal("l'amour", "l amour"));
        assert!(compare_equal("l’amour", "L'AMOUR"));
        assert!(compare_equal("  Bruxelles ", "bruxelles"));
        assert!(compare_equal("cœur", "coeur"));
        assert!(compare_equal("pays,", "pays"));
    }

    #[test]
    fn test_compare_equal_rejects_different_words() {
        assert!(!compare_equal("chat", "chien"));
        assert!(!compare_equal("chat", "chats"));
        assert!(!compare_equal("", "a"));
    }

    #[test]
    fn test_comparison_key() {
        assert_eq!(comparison_key("Qu’il   PLEUVE!"), "qu il pleuve");
        assert_eq!(comparison_key("'"), "");
        assert_eq!(comparison_key("--"), "");
    }

    #[test]
    fn test_tokenize_line_strips_punctuation() {
        assert_eq!(
            tokenize_line("Ne me quitte pas, il faut oublier…"),
            vec!["Ne", "me", "quitte", "pas", "il", "faut", "oublier"]
        );
    }

    #[test]
    fn test_tokenize_line_keeps_elisions() {
        assert_eq!(
            tokenize_line("Quand on n’a que l’amour"),
            vec!["Quand", "on", "n'a", "que", "l'amour"]
        );
    }

    #[test]
    fn test_tokenize_line_deletes_line_breaks() {
        assert_eq!(tokenize_line("le plat pays\r\n"), vec!["le", "plat", "pays"]);
        assert!(tokenize_line(" ' -- ! ").is_empty());
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(text in FRENCH_TEXT) {
            let once = normalize(&text);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn comparison_key_is_idempotent(text in FRENCH_TEXT) {
            let once = comparison_key(&text);
            prop_assert_eq!(comparison_key(&once), once);
        }

        #[test]
        fn tokens_always_have_a_key(line in "[a-zA-Zéè’' ,.!?\\-\r\n]{0,60}") {
            for word in tokenize_line(&line) {
                prop_assert!(!comparison_key(&word).is_empty());
                prop_assert!(!word.contains('\n'));
            }
        }
    }
}
