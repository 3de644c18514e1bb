use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::lexicon::{NEGATION_PREFIXES, RISK_PHRASES};

/// Net occurrence counts per lexicon phrase. Only phrases with a strictly
/// positive net count are present; a phrase whose negated occurrences meet
/// or exceed its raw occurrences drops out of the tally entirely.
#[derive(Debug, Clone, Default)]
pub struct MatchTally {
    // Lexicon order. Display order is derived in `ranked`.
    entries: Vec<(&'static str, usize)>,
}

impl MatchTally {
    pub fn net_count(&self, phrase: &str) -> usize {
        self.entries
            .iter()
            .find(|(p, _)| *p == phrase)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.net_count(phrase) > 0
    }

    /// Sum of all net counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by net count descending. The sort is stable, so ties
    /// keep lexicon order, which makes display output deterministic.
    pub fn ranked(&self) -> Vec<(&'static str, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

struct CompiledPhrase {
    phrase: &'static str,
    raw: Regex,
    negated: Regex,
}

/// Case-insensitive scanner for the fixed risk lexicon.
///
/// Each phrase compiles to two patterns: the escaped literal phrase itself,
/// and an alternation of the mitigation prefixes in front of that literal.
/// Prefix words are joined with `\s+`, so "no   material   impairment" with
/// irregular internal spacing still counts as negated.
pub struct PhraseMatcher {
    phrases: Vec<CompiledPhrase>,
}

impl PhraseMatcher {
    pub fn new() -> Result<Self> {
        let elastic_prefixes: Vec<String> = NEGATION_PREFIXES
            .iter()
            .map(|prefix| prefix.split_whitespace().collect::<Vec<_>>().join(r"\s+"))
            .collect();

        let mut phrases = Vec::with_capacity(RISK_PHRASES.len());
        for phrase in RISK_PHRASES {
            let literal = regex::escape(phrase);

            let raw = RegexBuilder::new(&literal)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("failed to compile phrase pattern: {phrase}"))?;

            let negated_pattern =
                format!(r"(?:{})\s+{literal}", elastic_prefixes.join("|"));
            let negated = RegexBuilder::new(&negated_pattern)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("failed to compile negation pattern: {phrase}"))?;

            phrases.push(CompiledPhrase {
                phrase,
                raw,
                negated,
            });
        }

        Ok(Self { phrases })
    }

    /// Count net occurrences of every lexicon phrase in `text`.
    ///
    /// Per phrase: raw case-insensitive occurrences minus occurrences
    /// absorbed by a negation prefix. A negated occurrence is counted once
    /// by each pattern, so the subtraction cancels it exactly. Phrases are
    /// independent of each other; scanning order is lexicon order.
    pub fn scan(&self, text: &str) -> MatchTally {
        let mut entries = Vec::new();

        for compiled in &self.phrases {
            let raw_count = compiled.raw.find_iter(text).count();
            let negated_count = compiled.negated.find_iter(text).count();

            let net = raw_count.saturating_sub(negated_count);
            if net > 0 {
                entries.push((compiled.phrase, net));
            }
        }

        MatchTally { entries }
    }
}
