//! Suggestion sources queried with the token under the cursor.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};
use serde::Serialize;

/// One ranked suggestion. Higher scores rank first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub score: u32,
}

/// Anything that can answer a suggestion query for one trigger kind.
pub trait SuggestionSource {
    /// At most `limit` suggestions for `query`, best first
    fn suggestions(&self, query: &str, limit: usize) -> Vec<Suggestion>;
}

/// In-memory candidate list ranked by fuzzy match.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    candidates: Vec<String>,
}

impl StaticSource {
    pub fn new<I, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, candidate: impl Into<String>) {
        self.candidates.push(candidate.into());
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl SuggestionSource for StaticSource {
    fn suggestions(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        if query.is_empty() {
            return self
                .candidates
                .iter()
                .take(limit)
                .map(|text| Suggestion {
                    text: text.clone(),
                    score: 0,
                })
                .collect();
        }

        let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        let mut results: Vec<Suggestion> = self
            .candidates
            .iter()
            .filter_map(|candidate| {
                let haystack = Utf32String::from(candidate.as_str());
                pattern
                    .score(haystack.slice(..), &mut matcher)
                    .map(|score| Suggestion {
                        text: candidate.clone(),
                        score,
                    })
            })
            .collect();

        // Stable sort keeps candidate order among equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(limit);
        results
    }
}

impl<T: SuggestionSource + ?Sized> SuggestionSource for Box<T> {
    fn suggestions(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        (**self).suggestions(query, limit)
    }
}
