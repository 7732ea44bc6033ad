//! Classification of search terms into generic category words vs. specific
//! venue names.
//!
//! Generic terms ("coffee", "tea") skip the name-filtered search pass
//! entirely; a name filter built from them would be about as selective as no
//! filter at all, and the category pass answers them better.

/// Broad category words that should not be treated as venue names.
const GENERIC_TERMS: &[&str] = &[
    "coffee",
    "cafe",
    "café",
    "tea",
    "boba",
    "espresso",
    "latte",
    "bubble tea",
];

/// Returns `true` when `term` names a broad category rather than a specific
/// venue. Empty and whitespace-only terms are generic.
#[must_use]
pub fn is_generic_term(term: &str) -> bool {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    GENERIC_TERMS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_generic_term_classifies_generic() {
        for term in GENERIC_TERMS {
            assert!(is_generic_term(term), "{term} should be generic");
        }
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert!(is_generic_term("Coffee"));
        assert!(is_generic_term("BOBA"));
        assert!(is_generic_term("Bubble Tea"));
    }

    #[test]
    fn empty_and_whitespace_are_generic() {
        assert!(is_generic_term(""));
        assert!(is_generic_term("   "));
    }

    #[test]
    fn venue_names_are_specific() {
        assert!(!is_generic_term("insomnia"));
        assert!(!is_generic_term("Peet's"));
        assert!(!is_generic_term("Blue Bottle"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(is_generic_term("  latte  "));
        assert!(!is_generic_term("  latte art society  "));
    }
}
