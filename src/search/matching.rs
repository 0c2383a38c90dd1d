//! Case-insensitive char matching shared by the search engine and snippet builder.
//!
//! Folding maps each char to its lowercase form only when that form is a single char,
//! so a folded string always has the same number of chars as the original. Offsets
//! found on folded text can therefore index the original text directly.

/// Fold a single char for case-insensitive comparison
pub fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Fold a whole string into a char buffer
pub fn fold(s: &str) -> Vec<char> {
    s.chars().map(fold_char).collect()
}

/// Char index of the first occurrence of `needle` in `haystack`, both already folded.
/// An empty needle is never found.
pub fn find_folded(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Char index of the first case-insensitive occurrence of `needle` in `haystack`
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    find_folded(&fold(haystack), &fold(needle))
}

/// Whether `haystack` contains `needle`, ignoring case
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_ignore_case_ascii() {
        assert_eq!(find_ignore_case("The Quick Brown Fox", "brown"), Some(10));
        assert_eq!(find_ignore_case("The Quick Brown Fox", "FOX"), Some(16));
        assert_eq!(find_ignore_case("The Quick Brown Fox", "wolf"), None);
    }

    #[test]
    fn test_find_returns_first_occurrence() {
        assert_eq!(find_ignore_case("abc ABC abc", "abc"), Some(0));
        assert_eq!(find_ignore_case("xx ABC abc", "abc"), Some(3));
    }

    #[test]
    fn test_find_empty_needle() {
        assert_eq!(find_ignore_case("anything", ""), None);
        assert!(!contains_ignore_case("", ""));
    }

    #[test]
    fn test_needle_longer_than_haystack() {
        assert_eq!(find_ignore_case("ab", "abc"), None);
    }

    #[test]
    fn test_offsets_are_char_based() {
        // 'é' is two bytes but one char
        assert_eq!(find_ignore_case("café au lait", "AU"), Some(5));
    }

    #[test]
    fn test_multi_char_lowercase_keeps_length() {
        // 'İ' lowercases to two chars, so it folds to itself
        let folded = fold("İstanbul");
        assert_eq!(folded.len(), "İstanbul".chars().count());
        assert_eq!(find_ignore_case("İstanbul", "STANBUL"), Some(1));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(contains_ignore_case("ÜBER alles", "über"));
        assert!(contains_ignore_case("Привет мир", "МИР"));
    }
}
