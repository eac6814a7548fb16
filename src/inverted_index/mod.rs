mod indexer;
mod insert;
mod occurrence;

use std::collections::{HashMap, HashSet};

pub use self::{
    indexer::{make_index, IndexBuilder},
    insert::{insert_last_occurrence, insertion_point, InsertionPoint},
    occurrence::{DocId, DocumentKeywords, Occurrence, TF},
};

/// Keyword to occurrence list, each list in descending frequency order with
/// at most one entry per document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    documents: HashSet<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrences of `keyword`, empty if it was never indexed.
    pub fn get(&self, keyword: &str) -> &[Occurrence] {
        self.keywords.get(keyword).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.keywords.contains_key(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords
            .iter()
            .map(|(keyword, occurrences)| (keyword.as_str(), occurrences.as_slice()))
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn has_document(&self, document: &str) -> bool {
        self.documents.contains(document)
    }

    /// Merges one document's keywords. Each occurrence is appended to its
    /// keyword's list and moved into place.
    pub(crate) fn merge_keywords(&mut self, document: DocId, keywords: DocumentKeywords) {
        for (keyword, occurrence) in keywords {
            let occurrences = self.keywords.entry(keyword).or_default();
            occurrences.push(occurrence);
            insert_last_occurrence(occurrences);
        }

        self.documents.insert(document);
    }
}
