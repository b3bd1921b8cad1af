//! Paragraph selection heuristic

use crate::config::DEFAULT_MIN_PARAGRAPH_CHARS;
use tracing::debug;
use wikileaders_domain::LeaderRecord;

/// Picks the introductory paragraph of a leader's article
///
/// A candidate qualifies when its trimmed text is at least `min_chars`
/// characters long and its lowercased text contains either the leader's
/// lowercased first name or the first four characters of the birth date.
/// An empty key matches everything, so a leader with neither a first name
/// nor a birth year gets the first long-enough paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphSelector {
    min_chars: usize,
}

impl Default for ParagraphSelector {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PARAGRAPH_CHARS)
    }
}

impl ParagraphSelector {
    /// Selector with a custom minimum length
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Minimum trimmed length of a qualifying paragraph
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// First qualifying candidate, trimmed, or `""` if none qualifies
    pub fn select(&self, leader: &LeaderRecord, candidates: &[String]) -> String {
        self.select_with_keys(&leader.name_key(), &leader.year_key(), candidates)
    }

    /// Same as [`ParagraphSelector::select`] with explicit keys
    ///
    /// `name_key` is expected to be lowercase already.
    pub fn select_with_keys(&self, name_key: &str, year_key: &str, candidates: &[String]) -> String {
        let selected = candidates
            .iter()
            .map(|candidate| candidate.trim())
            .find(|text| self.qualifies(text, name_key, year_key));

        match selected {
            Some(text) => text.to_string(),
            None => {
                debug!(
                    "No qualifying paragraph among {} candidates (name='{}', year='{}')",
                    candidates.len(),
                    name_key,
                    year_key
                );
                String::new()
            }
        }
    }

    fn qualifies(&self, text: &str, name_key: &str, year_key: &str) -> bool {
        if text.chars().count() < self.min_chars {
            return false;
        }
        let lower = text.to_lowercase();
        lower.contains(name_key) || lower.contains(year_key)
    }
}
