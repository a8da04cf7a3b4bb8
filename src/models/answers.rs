// ABOUTME: Accumulated funnel answers keyed by question id
// Grows monotonically within a session; entries are overwritten, never removed

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from question id to the visitor's answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `question_id`, replacing any earlier answer
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.entries.get(question_id).map(String::as_str)
    }

    /// True when an entry exists and is non-empty after trimming whitespace
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|v| !v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut answers = Self::new();
        for (k, v) in iter {
            answers.record(k, v);
        }
        answers
    }
}
