//! URL slugs for rebuilding market page links.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum slug length in characters.
pub const MAX_SLUG_LEN: usize = 60;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Slugify a display title: lower-case, runs of anything else become `-`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let hyphenated = NON_ALNUM.replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');

    // Output is ASCII, so byte and char positions agree.
    let cut = &trimmed[..trimmed.len().min(MAX_SLUG_LEN)];
    cut.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_titles() {
        assert_eq!(slugify("Fed decision in March?"), "fed-decision-in-march");
        assert_eq!(slugify("  Who will win the 2028 election?! "), "who-will-win-the-2028-election");
        assert_eq!(slugify("S&P 500 > 6,000"), "s-p-500-6-000");
    }

    #[test]
    fn non_ascii_letters_become_separators() {
        assert_eq!(slugify("Pokémon sales"), "pok-mon-sales");
    }

    #[test]
    fn empty_and_symbol_only_titles() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!"), "");
    }

    #[test]
    fn long_titles_are_cut_without_dangling_hyphen() {
        let title = format!("{} tail", "a".repeat(59));
        let slug = slugify(&title);
        assert_eq!(slug, "a".repeat(59));

        let long = "word ".repeat(30);
        assert!(slugify(&long).len() <= MAX_SLUG_LEN);
    }

    proptest! {
        #[test]
        fn slug_is_idempotent(title in ".{0,120}") {
            let once = slugify(&title);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn slug_shape(title in ".{0,120}") {
            let slug = slugify(&title);
            prop_assert!(slug.chars().count() <= MAX_SLUG_LEN);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
