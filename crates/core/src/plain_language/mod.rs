//! Plain-language substitution of medical terms.
//!
//! A [`PlainLanguageDictionary`] maps technical terms to pre-authored simplified forms.
//! Matching is case-insensitive and whole-word. All terms are compiled into a single
//! alternation ordered by descending length, so at any position the longest known term wins
//! ("chronic heart failure" before "heart failure" before "chronic") regardless of the order
//! the entries were supplied in. Whitespace inside multi-word terms matches any run of
//! whitespace.

mod terms;

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Broad grouping of a dictionary entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermCategory {
    Condition,
    Medication,
    Procedure,
    Measurement,
    General,
}

impl TermCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TermCategory::Condition => "condition",
            TermCategory::Medication => "medication",
            TermCategory::Procedure => "procedure",
            TermCategory::Measurement => "measurement",
            TermCategory::General => "general",
        }
    }
}

impl fmt::Display for TermCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "condition" => Ok(TermCategory::Condition),
            "medication" => Ok(TermCategory::Medication),
            "procedure" => Ok(TermCategory::Procedure),
            "measurement" => Ok(TermCategory::Measurement),
            "general" => Ok(TermCategory::General),
            other => Err(CoreError::InvalidInput(format!(
                "unknown term category '{other}'"
            ))),
        }
    }
}

/// A single dictionary entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalTerm {
    pub term: String,
    pub simplified_form: String,
    pub description: String,
    pub category: TermCategory,
}

impl MedicalTerm {
    pub fn new(
        term: impl Into<String>,
        simplified_form: impl Into<String>,
        description: impl Into<String>,
        category: TermCategory,
    ) -> Self {
        Self {
            term: term.into(),
            simplified_form: simplified_form.into(),
            description: description.into(),
            category,
        }
    }
}

/// A located occurrence of a dictionary term in some text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermMatch<'t, 'd> {
    /// Byte offset of the match start.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// The matched text as written in the input.
    pub text: &'t str,
    pub entry: &'d MedicalTerm,
}

/// Medical term dictionary with a precompiled matcher.
#[derive(Debug)]
pub struct PlainLanguageDictionary {
    entries: Vec<MedicalTerm>,
    index: HashMap<String, usize>,
    pattern: Option<Regex>,
}

static BUILTIN: Lazy<PlainLanguageDictionary> = Lazy::new(|| {
    PlainLanguageDictionary::new(terms::BUILTIN_TERMS.iter().map(
        |(term, simplified, description, category)| {
            MedicalTerm::new(*term, *simplified, *description, *category)
        },
    ))
});

impl PlainLanguageDictionary {
    /// Build a dictionary from entries.
    ///
    /// Terms are keyed case-insensitively with collapsed whitespace; when two entries share a
    /// key the first one wins. Blank terms are skipped.
    pub fn new(entries: impl IntoIterator<Item = MedicalTerm>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();

        for entry in entries {
            let key = normalise(&entry.term);
            if key.is_empty() {
                tracing::warn!("skipping dictionary entry with blank term");
                continue;
            }
            if index.contains_key(&key) {
                tracing::debug!("duplicate dictionary term '{}' ignored", entry.term);
                continue;
            }
            index.insert(key, kept.len());
            kept.push(entry);
        }

        let pattern = compile_pattern(&kept);

        Self {
            entries: kept,
            index,
            pattern,
        }
    }

    /// The built-in vocabulary shipped with CareOrbit.
    pub fn builtin() -> &'static PlainLanguageDictionary {
        &BUILTIN
    }

    pub fn entries(&self) -> &[MedicalTerm] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries belonging to one category, in dictionary order.
    pub fn by_category(&self, category: TermCategory) -> impl Iterator<Item = &MedicalTerm> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Full entry for a term, matched case-insensitively.
    pub fn find(&self, term: &str) -> Option<&MedicalTerm> {
        self.index.get(&normalise(term)).map(|&i| &self.entries[i])
    }

    /// Simplified form of `term`, or `term` itself when it is not in the dictionary.
    pub fn lookup<'a>(&'a self, term: &'a str) -> &'a str {
        self.find(term)
            .map(|e| e.simplified_form.as_str())
            .unwrap_or(term)
    }

    /// Replace every whole-word occurrence of a known term with its simplified form.
    ///
    /// Text with no known terms is returned borrowed and unchanged.
    pub fn simplify<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(text);
        };

        pattern.replace_all(text, |caps: &regex::Captures<'_>| {
            let matched = &caps[0];
            self.lookup(matched).to_string()
        })
    }

    /// All occurrences of known terms, left to right, non-overlapping.
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<TermMatch<'t, '_>> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        pattern
            .find_iter(text)
            .filter_map(|m| {
                self.find(m.as_str()).map(|entry| TermMatch {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str(),
                    entry,
                })
            })
            .collect()
    }

    /// The distinct entries present in `text`, in order of first appearance.
    pub fn detect(&self, text: &str) -> Vec<&MedicalTerm> {
        let mut seen = HashSet::new();
        self.find_matches(text)
            .into_iter()
            .filter(|m| seen.insert(m.entry.term.as_str()))
            .map(|m| m.entry)
            .collect()
    }
}

/// [`PlainLanguageDictionary::lookup`] against the built-in vocabulary.
pub fn lookup(term: &str) -> &str {
    PlainLanguageDictionary::builtin().lookup(term)
}

/// [`PlainLanguageDictionary::simplify`] against the built-in vocabulary.
pub fn simplify(text: &str) -> Cow<'_, str> {
    PlainLanguageDictionary::builtin().simplify(text)
}

/// [`PlainLanguageDictionary::detect`] against the built-in vocabulary.
pub fn detect(text: &str) -> Vec<&'static MedicalTerm> {
    PlainLanguageDictionary::builtin().detect(text)
}

fn normalise(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn compile_pattern(entries: &[MedicalTerm]) -> Option<Regex> {
    if entries.is_empty() {
        return None;
    }

    let mut alternatives: Vec<String> = entries
        .iter()
        .map(|e| {
            e.term
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    // Leftmost-first alternation: longer terms must come first to win at a shared start.
    alternatives.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let pattern = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::warn!("failed to compile plain-language pattern: {}", e);
            None
        }
    }
}
