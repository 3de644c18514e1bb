//! Fixed vocabulary of risk-indicative phrases and the surface patterns
//! that mitigate them.
//!
//! The lexicon is data, not code: adding a phrase must never require
//! touching the matching algorithm. Phrases are matched as case-insensitive
//! literal substrings; they are escaped before compilation, so none of the
//! entries here is ever interpreted as regex syntax. If this table ever
//! becomes user-supplied, that escaping is the boundary that keeps pattern
//! injection out.

/// Risk-indicative phrases scanned for in disclosure text, in fixed order.
pub const RISK_PHRASES: [&str; 23] = [
    "material uncertainty",
    "going concern",
    "impairment",
    "waiver",
    "liquidity risk",
    "non-compliance",
    "estimates",
    "internal investigation",
    "losses",
    "reclassification",
    "change in accounting policies",
    "doubt on ability to continue",
    "conflict of interest",
    "misstatement",
    "irregularities",
    "overstatement",
    "embezzlement",
    "collusion",
    "off-balance sheet",
    "forensic accounting",
    "kickback",
    "whistleblower",
    "revenue recognition",
];

/// Mitigation prefixes. An occurrence of `"<prefix> <phrase>"` marks the
/// phrase occurrence as negated rather than risk-bearing. Whitespace between
/// prefix words is elastic (`\s+`) when compiled.
pub const NEGATION_PREFIXES: [&str; 3] = ["no material", "without significant", "no instances of"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_has_no_duplicate_phrases() {
        let mut seen = std::collections::HashSet::new();
        for phrase in RISK_PHRASES {
            assert!(seen.insert(phrase), "duplicate lexicon entry: {phrase}");
        }
    }

    #[test]
    fn phrases_are_lowercase_literals() {
        for phrase in RISK_PHRASES {
            assert_eq!(phrase, phrase.to_lowercase());
            assert!(!phrase.trim().is_empty());
        }
    }
}
