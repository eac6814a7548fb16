use super::search_result::SearchResult;
use crate::{
    error::{Error, Result},
    inverted_index::{DocId, InvertedIndex, Occurrence},
    tokenizer::TRAILING_PUNCTUATION,
};

pub const DEFAULT_LIMIT: usize = 5;

/// Answers "first or second" queries over a finished index.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    index: &'a InvertedIndex,
    limit: usize,
}

impl<'a> SearchEngine<'a> {
    pub const fn new(index: &'a InvertedIndex) -> Self {
        Self {
            index,
            limit: DEFAULT_LIMIT,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Documents containing `first` or `second`, highest frequency first.
    ///
    /// Returns `None` when neither keyword matches anything; a `Some` is
    /// never empty. Unknown keywords simply contribute nothing.
    pub fn top_matches(&self, first: &str, second: &str) -> Option<Vec<SearchResult>> {
        let results = merge_top_matches(self.index.get(first), self.index.get(second), self.limit);

        if results.is_empty() {
            None
        } else {
            Some(results)
        }
    }

    pub fn top_documents(&self, first: &str, second: &str) -> Option<Vec<DocId>> {
        self.top_matches(first, second).map(|results| {
            results
                .into_iter()
                .map(|result| result.document)
                .collect()
        })
    }

    /// Runs a query of the form `first or second`, `first second` or just
    /// `first`. Query words are lower-cased and lose trailing punctuation.
    pub fn search(&self, query: &str) -> Result<Option<Vec<SearchResult>>> {
        let (first, second) = parse_query(query)?;
        Ok(self.top_matches(&first, &second))
    }
}

fn parse_query(query: &str) -> Result<(String, String)> {
    let words: Vec<String> = query
        .split_whitespace()
        .map(|word| word.trim_end_matches(TRAILING_PUNCTUATION).to_lowercase())
        .collect();

    match words.as_slice() {
        [only] => Ok((only.clone(), only.clone())),
        [first, second] => Ok((first.clone(), second.clone())),
        [first, or, second] if or == "or" => Ok((first.clone(), second.clone())),
        _ => Err(Error::Generic(format!(
            "Expected one or two keywords, got '{}'",
            query.trim()
        ))),
    }
}

/// Walks both lists from the front, always taking the higher frequency and
/// preferring `first` on ties. A document already taken is skipped but its
/// list still advances. Stops after `limit` documents.
pub fn merge_top_matches(
    first: &[Occurrence],
    second: &[Occurrence],
    limit: usize,
) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::with_capacity(limit);
    let (mut i, mut j) = (0, 0);

    while results.len() < limit {
        let candidate = match (first.get(i), second.get(j)) {
            (None, None) => break,
            (Some(one), Some(two)) if two.frequency > one.frequency => {
                j += 1;
                two
            }
            (Some(one), _) => {
                i += 1;
                one
            }
            (None, Some(two)) => {
                j += 1;
                two
            }
        };

        if !results
            .iter()
            .any(|result| result.document == candidate.document)
        {
            results.push(SearchResult::new(
                candidate.document.clone(),
                candidate.frequency,
            ));
        }
    }

    results
}
