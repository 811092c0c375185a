//! Fake-review pattern matching
//!
//! A fixed ordered list of regexes is checked against the lowercased review
//! text. Each match emits a positional `fake_pattern_N` tag; a handful of
//! independent checks (hype-word density, exclamation count, text length)
//! append their own tags afterwards.

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered fake-review indicator patterns, checked against lowercased text
static FAKE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Two superlative-praise words anywhere in the text
        r"\b(amazing|incredible|outstanding|perfect|excellent)\b.*\b(amazing|incredible|outstanding|perfect|excellent)\b",
        // Canned promotional phrases
        r"\b(highly recommend|must buy|best purchase|love it so much)\b",
        // "Five stars" mentioned twice
        r"\b(five stars?|5 stars?|⭐⭐⭐⭐⭐)\b.*\b(five stars?|5 stars?|⭐⭐⭐⭐⭐)\b",
        // Shipping praise combined with quality praise
        r"\b(fast shipping|quick delivery)\b.*\b(great quality|excellent product)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("fake pattern is valid"))
    .collect()
});

/// Generic hype words counted for the excessive-positive check
static HYPE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(great|good|nice|awesome|amazing)\b").expect("hype pattern is valid"));

/// Check the text against the fake-review pattern tables.
///
/// Positional tags come first in pattern-list order, followed by the
/// independent checks in fixed order.
pub fn check_fake_patterns(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut flags = Vec::new();

    for (i, pattern) in FAKE_PATTERNS.iter().enumerate() {
        if pattern.is_match(&lower) {
            flags.push(format!("fake_pattern_{}", i + 1));
        }
    }

    if HYPE_WORDS.find_iter(&lower).count() > 3 {
        flags.push("excessive_positive_words".to_string());
    }

    if text.matches('!').count() > 3 {
        flags.push("excessive_exclamation".to_string());
    }

    let chars = text.chars().count();
    if chars < 20 {
        flags.push("too_short".to_string());
    }
    if chars > 2000 {
        flags.push("too_long".to_string());
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_has_no_flags() {
        let flags = check_fake_patterns("The stand wobbles a little but holds my monitor fine.");
        assert!(flags.is_empty(), "unexpected flags: {flags:?}");
    }

    #[test]
    fn double_superlative_is_pattern_one() {
        let flags = check_fake_patterns("Amazing build and an excellent finish overall, solid metal frame.");
        assert_eq!(flags, vec!["fake_pattern_1"]);
    }

    #[test]
    fn promotional_phrase_is_pattern_two() {
        let flags = check_fake_patterns("Would highly recommend to anyone on the fence about it.");
        assert_eq!(flags, vec!["fake_pattern_2"]);
    }

    #[test]
    fn double_five_stars_is_pattern_three() {
        let flags = check_fake_patterns("five stars from me, definitely 5 stars without question here");
        assert_eq!(flags, vec!["fake_pattern_3"]);
    }

    #[test]
    fn shipping_plus_quality_is_pattern_four() {
        let flags = check_fake_patterns("fast shipping and honestly great quality for the price point");
        assert_eq!(flags, vec!["fake_pattern_4"]);
    }

    #[test]
    fn pattern_order_is_stable() {
        let flags = check_fake_patterns(
            "Amazing product, truly excellent. Highly recommend, fast shipping and great quality.",
        );
        assert_eq!(flags, vec!["fake_pattern_1", "fake_pattern_2", "fake_pattern_4"]);
    }

    #[test]
    fn hype_word_density_flags() {
        let flags = check_fake_patterns("good screen, great keyboard, nice trackpad, awesome battery life overall");
        assert!(flags.contains(&"excessive_positive_words".to_string()));
    }

    #[test]
    fn three_hype_words_do_not_flag() {
        let flags = check_fake_patterns("good screen, great keyboard, and a nice trackpad for typing on");
        assert!(!flags.contains(&"excessive_positive_words".to_string()));
    }

    #[test]
    fn exclamations_over_three_flag() {
        let flags = check_fake_patterns("Wow! Just wow! Buy it! Seriously! It works fine too.");
        assert!(flags.contains(&"excessive_exclamation".to_string()));
    }

    #[test]
    fn length_bounds_flag() {
        assert!(check_fake_patterns("Nope.").contains(&"too_short".to_string()));

        let long = "The device works as described and I keep finding small uses for it. "
            .repeat(40);
        assert!(check_fake_patterns(&long).contains(&"too_long".to_string()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let flags = check_fake_patterns("HIGHLY RECOMMEND THIS TO EVERYONE I KNOW");
        assert!(flags.contains(&"fake_pattern_2".to_string()));
    }
}
