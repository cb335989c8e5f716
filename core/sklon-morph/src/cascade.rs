//! Ordered suffix-rule cascades.
//!
//! A cascade is a list of [`Rule`]s evaluated top to bottom against the end
//! of a word; the first rule whose pattern and guard both hold rewrites the
//! word and stops the scan. Patterns overlap on purpose, so the list order
//! is part of the behaviour: most specific exceptions first, the broadest
//! fallback last. A word no rule accepts is returned unchanged.

use log::trace;
use regex::Regex;
use sklon_protocol::{Case, Gender};

use crate::tables::EndingTable;

/// Extra condition a rule needs beyond its suffix pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// Word length in characters must exceed the bound.
    LongerThan(usize),
    /// Only for callers declining a word of this gender.
    Gender(Gender),
}

/// What a matching rule does to the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The nominative form already serves every case.
    Keep,
    /// Drop `strip` trailing characters, then append the ending in `slot`.
    Replace { strip: usize, slot: usize },
    /// As `Replace`, with a fixed `infix` between the stem and the ending.
    Splice { strip: usize, infix: &'static str, slot: usize },
    /// Append the ending in `slot` to the whole word.
    Append { slot: usize },
}

impl Action {
    fn slot(self) -> Option<usize> {
        match self {
            Action::Keep => None,
            Action::Replace { slot, .. } | Action::Splice { slot, .. } | Action::Append { slot } => {
                Some(slot)
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub label: &'static str,
    /// Regex fragment matched case-insensitively at the end of the word.
    pub pattern: &'static str,
    pub guard: Guard,
    pub action: Action,
    /// Repair applied to the rewritten word when this rule fired.
    pub repair: Option<fn(String) -> String>,
}

impl Rule {
    pub const fn keep(label: &'static str, pattern: &'static str) -> Self {
        Self::with(label, pattern, Action::Keep)
    }

    pub const fn replace(label: &'static str, pattern: &'static str, strip: usize, slot: usize) -> Self {
        Self::with(label, pattern, Action::Replace { strip, slot })
    }

    pub const fn splice(
        label: &'static str,
        pattern: &'static str,
        strip: usize,
        infix: &'static str,
        slot: usize,
    ) -> Self {
        Self::with(label, pattern, Action::Splice { strip, infix, slot })
    }

    pub const fn append(label: &'static str, pattern: &'static str, slot: usize) -> Self {
        Self::with(label, pattern, Action::Append { slot })
    }

    pub const fn when(self, guard: Guard) -> Self {
        Self { guard, ..self }
    }

    pub const fn then(self, repair: fn(String) -> String) -> Self {
        Self { repair: Some(repair), ..self }
    }

    const fn with(label: &'static str, pattern: &'static str, action: Action) -> Self {
        Self {
            label,
            pattern,
            guard: Guard::Always,
            action,
            repair: None,
        }
    }

    fn admits(&self, word: &str, gender: Option<Gender>) -> bool {
        match self.guard {
            Guard::Always => true,
            Guard::LongerThan(bound) => word.chars().count() > bound,
            Guard::Gender(required) => gender == Some(required),
        }
    }
}

/// A compiled cascade bound to the ending table its rules index into.
pub struct Cascade<const N: usize> {
    name: &'static str,
    rules: Vec<(Regex, Rule)>,
    table: &'static EndingTable<N>,
}

impl<const N: usize> Cascade<N> {
    /// Compiles `rules` in order.
    ///
    /// Panics on a malformed pattern or a slot past the end of `table`;
    /// both are defects of the static rule set.
    pub fn new(name: &'static str, rules: &[Rule], table: &'static EndingTable<N>) -> Self {
        let rules = rules
            .iter()
            .map(|rule| {
                if let Some(slot) = rule.action.slot() {
                    assert!(
                        slot < N,
                        "{} rule '{}' points at slot {} of a {}-slot table",
                        name,
                        rule.label,
                        slot,
                        N
                    );
                }
                let regex = Regex::new(&format!("(?i)(?:{})$", rule.pattern))
                    .unwrap_or_else(|e| panic!("{name} rule '{}': {e}", rule.label));
                (regex, *rule)
            })
            .collect();

        Self { name, rules, table }
    }

    /// First rule that accepts `word`, if any.
    pub fn select(&self, word: &str, gender: Option<Gender>) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|(regex, rule)| regex.is_match(word) && rule.admits(word, gender))
            .map(|(_, rule)| rule)
    }

    pub fn apply(&self, word: &str, gender: Option<Gender>, case: Case) -> String {
        let Some(rule) = self.select(word, gender) else {
            trace!("{}: no rule for '{}'", self.name, word);
            return word.to_string();
        };
        trace!("{}: '{}' -> rule '{}'", self.name, word, rule.label);

        let rewritten = match rule.action {
            Action::Keep => word.to_string(),
            Action::Replace { strip, slot } => {
                format!("{}{}", strip_chars(word, strip), self.table.ending(case, slot))
            }
            Action::Splice { strip, infix, slot } => format!(
                "{}{}{}",
                strip_chars(word, strip),
                infix,
                self.table.ending(case, slot)
            ),
            Action::Append { slot } => format!("{}{}", word, self.table.ending(case, slot)),
        };

        match rule.repair {
            Some(repair) => repair(rewritten),
            None => rewritten,
        }
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|(_, rule)| rule)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// `word` without its last `n` characters.
pub(crate) fn strip_chars(word: &str, n: usize) -> &str {
    if n == 0 {
        return word;
    }
    word.char_indices()
        .rev()
        .nth(n - 1)
        .map_or("", |(at, _)| &word[..at])
}
