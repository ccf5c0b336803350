//! Suffix rules and ordered rule tables
//!
//! A [`SuffixRule`] matches the end of a word case-insensitively and rewrites
//! the matched suffix. Patterns may carry one capture group which is expanded
//! in the replacement with `${1}`, e.g. `(ind|vert)ex` → `${1}ices`.
//!
//! A [`RuleTable`] is an ordered chain of rules: the first rule that matches
//! wins, even when its replacement leaves the word unchanged.

use regex::Regex;

/// A single case-insensitive suffix rewrite
#[derive(Debug, Clone)]
pub struct SuffixRule {
    pattern: &'static str,
    replacement: &'static str,
    matcher: Regex,
}

impl SuffixRule {
    /// Build a rule from a regular-expression suffix pattern
    ///
    /// The pattern is anchored to the end of the word and matched without
    /// regard to case.
    pub fn new(pattern: &'static str, replacement: &'static str) -> Result<Self, regex::Error> {
        let matcher = Regex::new(&format!("(?i){}$", pattern))?;
        Ok(Self {
            pattern,
            replacement,
            matcher,
        })
    }

    /// Build a rule that matches `suffix` literally
    pub fn literal(suffix: &'static str, replacement: &'static str) -> Result<Self, regex::Error> {
        let matcher = Regex::new(&format!("(?i){}$", regex::escape(suffix)))?;
        Ok(Self {
            pattern: suffix,
            replacement,
            matcher,
        })
    }

    /// The source pattern, without anchoring or flags
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Check whether the word ends with this rule's suffix
    pub fn is_match(&self, word: &str) -> bool {
        self.matcher.is_match(word)
    }

    /// Rewrite the matched suffix, or `None` if the rule does not apply
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.matcher.is_match(word) {
            return None;
        }
        Some(self.matcher.replace(word, self.replacement).into_owned())
    }
}

/// An ordered sequence of suffix rules evaluated top-to-bottom
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<SuffixRule>,
}

impl RuleTable {
    /// Compile a table of regular-expression rules, keeping their order
    pub fn from_patterns(pairs: &[(&'static str, &'static str)]) -> Result<Self, regex::Error> {
        let rules = pairs
            .iter()
            .map(|&(pattern, replacement)| SuffixRule::new(pattern, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Compile a table of literal suffix rules, keeping their order
    pub fn from_literals(pairs: &[(&'static str, &'static str)]) -> Result<Self, regex::Error> {
        let rules = pairs
            .iter()
            .map(|&(suffix, replacement)| SuffixRule::literal(suffix, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Compile the inverse of a literal table (replacement → pattern)
    pub fn from_literals_inverted(
        pairs: &[(&'static str, &'static str)],
    ) -> Result<Self, regex::Error> {
        let rules = pairs
            .iter()
            .map(|&(suffix, replacement)| SuffixRule::literal(replacement, suffix))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Apply the first matching rule
    ///
    /// Returns `None` only when no rule matches. A matching no-op rule such as
    /// `itis` → `itis` returns the word unchanged and stops the scan.
    pub fn rewrite(&self, word: &str) -> Option<String> {
        let rule = self.find(word)?;
        tracing::trace!(word, pattern = rule.pattern(), "suffix rule matched");
        rule.apply(word)
    }

    /// Check whether any rule matches the word
    pub fn matches(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Find the first rule matching the word
    pub fn find(&self, word: &str) -> Option<&SuffixRule> {
        self.rules.iter().find(|rule| rule.is_match(word))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
