//! Parallel string rewriting.
//!
//! Every generation rewrites every symbol of the previous generation at
//! once; a replacement never sees the output of another replacement from
//! the same generation. Symbols without a rule are copied through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};

/// Production rules: single symbol → replacement string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct RuleSet {
    rules: BTreeMap<char, String>,
}

impl RuleSet {
    /// Creates an empty rule set (every symbol is terminal).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `symbol`.
    #[must_use]
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.rules.insert(symbol, replacement.into());
        self
    }

    /// Builds a rule set from `(symbol, replacement)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`FractalError::InvalidRuleKey`] if a key is not exactly one
    /// character long.
    pub fn from_pairs<K, V, I>(pairs: I) -> FractalResult<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut rules = BTreeMap::new();
        for (key, replacement) in pairs {
            let key = key.as_ref();
            let mut chars = key.chars();
            let symbol = match (chars.next(), chars.next()) {
                (Some(symbol), None) => symbol,
                _ => return Err(FractalError::InvalidRuleKey(key.to_owned())),
            };
            rules.insert(symbol, replacement.into());
        }
        Ok(Self { rules })
    }

    /// Replacement for `symbol`, if it is not terminal.
    #[inline]
    #[must_use]
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Rewrites `axiom` for `iterations` generations.
    #[must_use]
    pub fn expand(&self, axiom: &str, iterations: u32) -> String {
        let mut current = axiom.to_owned();
        if self.rules.is_empty() {
            return current;
        }

        let mut next = String::new();
        for generation in 0..iterations {
            next.clear();
            next.reserve(self.next_len(&current));
            for symbol in current.chars() {
                match self.rules.get(&symbol) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(symbol),
                }
            }
            std::mem::swap(&mut current, &mut next);
            tracing::trace!("generation {}: {} bytes", generation + 1, current.len());
        }

        current
    }

    /// Byte length of `expand(axiom, iterations)`, without building it.
    ///
    /// Tracks how many copies of each symbol exist per generation, so the
    /// cost is independent of the output length.
    #[must_use]
    pub fn expanded_len(&self, axiom: &str, iterations: u32) -> u128 {
        let mut counts: BTreeMap<char, u128> = BTreeMap::new();
        for symbol in axiom.chars() {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        for _ in 0..iterations {
            let mut next: BTreeMap<char, u128> = BTreeMap::new();
            for (&symbol, &count) in &counts {
                match self.rules.get(&symbol) {
                    Some(replacement) => {
                        for produced in replacement.chars() {
                            let slot = next.entry(produced).or_insert(0);
                            *slot = slot.saturating_add(count);
                        }
                    }
                    None => {
                        let slot = next.entry(symbol).or_insert(0);
                        *slot = slot.saturating_add(count);
                    }
                }
            }
            counts = next;
        }

        counts
            .iter()
            .map(|(symbol, count)| count.saturating_mul(symbol.len_utf8() as u128))
            .fold(0u128, u128::saturating_add)
    }

    /// Exact byte length of the next generation of `current`.
    fn next_len(&self, current: &str) -> usize {
        current
            .chars()
            .map(|symbol| self.rules.get(&symbol).map_or(symbol.len_utf8(), String::len))
            .sum()
    }
}

impl TryFrom<BTreeMap<String, String>> for RuleSet {
    type Error = FractalError;

    fn try_from(map: BTreeMap<String, String>) -> FractalResult<Self> {
        Self::from_pairs(map)
    }
}

impl From<RuleSet> for BTreeMap<String, String> {
    fn from(rules: RuleSet) -> Self {
        rules
            .rules
            .into_iter()
            .map(|(symbol, replacement)| (symbol.to_string(), replacement))
            .collect()
    }
}

/// Rewrites `axiom` with `rules` for `iterations` generations.
///
/// Generation 0 is the axiom itself.
#[must_use]
pub fn expand(axiom: &str, rules: &RuleSet, iterations: u32) -> String {
    rules.expand(axiom, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koch_rules() -> RuleSet {
        RuleSet::new().with_rule('F', "F+F--F+F")
    }

    fn tree_rules() -> RuleSet {
        RuleSet::new().with_rule('1', "11").with_rule('0', "1[0]0")
    }

    #[test]
    fn test_generation_zero_is_axiom() {
        assert_eq!(expand("F-F", &koch_rules(), 0), "F-F");
    }

    #[test]
    fn test_no_rules_no_change() {
        let empty = RuleSet::new();
        for n in 0..5 {
            assert_eq!(expand("F+[0]1", &empty, n), "F+[0]1");
        }
    }

    #[test]
    fn test_koch_rewriting() {
        assert_eq!(expand("F", &koch_rules(), 1), "F+F--F+F");

        // 4 F's become 8 symbols each, the 4 turns pass through
        let second = expand("F", &koch_rules(), 2);
        assert_eq!(second.len(), 4 * 8 + 4);
        assert_eq!(&second[..8], "F+F--F+F");
        assert_eq!(second.matches('F').count(), 16);
    }

    #[test]
    fn test_tree_rewriting_is_simultaneous() {
        assert_eq!(expand("0", &tree_rules(), 1), "1[0]0");
        // '1' produced in generation 1 is rewritten only in generation 2
        assert_eq!(expand("0", &tree_rules(), 2), "11[1[0]0]1[0]0");
    }

    #[test]
    fn test_expanded_len_matches_expand() {
        for (axiom, rules) in [("F", koch_rules()), ("0", tree_rules())] {
            for n in 0..6 {
                let actual = rules.expand(axiom, n).len() as u128;
                assert_eq!(rules.expanded_len(axiom, n), actual, "axiom {axiom} gen {n}");
            }
        }
    }

    #[test]
    fn test_from_pairs_rejects_long_keys() {
        let ok = RuleSet::from_pairs([("F", "FF")]).unwrap();
        assert_eq!(ok.get('F'), Some("FF"));

        let err = RuleSet::from_pairs([("FF", "F")]).unwrap_err();
        assert!(matches!(err, FractalError::InvalidRuleKey(ref k) if k == "FF"));
        assert!(RuleSet::from_pairs([("", "F")]).is_err());
    }

    #[test]
    fn test_rules_from_toml_table() {
        let rules: RuleSet = toml::from_str("1 = \"11\"\n0 = \"1[0]0\"").unwrap();
        assert_eq!(rules, tree_rules());

        let bad: Result<RuleSet, _> = toml::from_str("ab = \"x\"");
        assert!(bad.is_err());
    }
}
