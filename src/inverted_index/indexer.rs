use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::{
    occurrence::{DocId, DocumentKeywords, Occurrence},
    InvertedIndex,
};
use crate::{
    corpus::Corpus,
    error::{Error, Result},
    tokenizer::Tokenizer,
};

/// Sole owner of an index while it is being built. Documents are added one
/// at a time; `build` hands the finished index out for querying.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    tokenizer: Tokenizer,
    index: InvertedIndex,
}

impl IndexBuilder {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            index: InvertedIndex::new(),
        }
    }

    pub const fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Counts the keywords among `words`, all tagged with `document`.
    pub fn load_keywords<I>(&self, document: &str, words: I) -> DocumentKeywords
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut keywords = DocumentKeywords::new();

        for keyword in self.tokenizer.tokenize(words) {
            keywords
                .entry(keyword)
                .or_insert_with(|| Occurrence::new(document, 0))
                .frequency += 1;
        }

        keywords
    }

    pub fn merge_keywords(&mut self, document: DocId, keywords: DocumentKeywords) {
        self.index.merge_keywords(document, keywords);
    }

    /// Scans and merges one document. A document can only be added once.
    pub fn add_document<I>(&mut self, document: &str, words: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        if self.index.has_document(document) {
            return Err(Error::DuplicateDocument(document.to_string()));
        }

        let keywords = self.load_keywords(document, words);
        debug!(document = %document, keywords = keywords.len(), "Indexed document");
        self.merge_keywords(document.to_string(), keywords);

        Ok(())
    }

    pub fn build(self) -> InvertedIndex {
        self.index
    }
}

/// Indexes every document of `corpus`, in listing order.
///
/// Any document or noise word source that cannot be read fails the whole run.
pub fn make_index(corpus: &impl Corpus) -> Result<InvertedIndex> {
    let tokenizer = Tokenizer::new(corpus.noise_words()?);
    let documents = corpus.documents()?;

    info!(
        documents = documents.len(),
        noise_words = tokenizer.noise_word_count(),
        "Indexing corpus"
    );

    let mut builder = IndexBuilder::new(tokenizer);
    let mut seen = HashSet::new();

    for document in documents {
        if !seen.insert(document.clone()) {
            warn!(document = %document, "Document listed more than once, skipping");
            continue;
        }

        let words = corpus.tokens(&document)?;
        builder.add_document(&document, words)?;
    }

    let index = builder.build();
    info!(
        documents = index.document_count(),
        keywords = index.len(),
        "Finished indexing"
    );

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::MemoryCorpus;

    fn assert_index_invariants(index: &InvertedIndex) {
        for (keyword, occurrences) in index.keywords() {
            assert!(
                occurrences
                    .windows(2)
                    .all(|pair| pair[0].frequency >= pair[1].frequency),
                "{keyword} is not in descending order"
            );

            let documents: HashSet<_> = occurrences.iter().map(|o| &o.document).collect();
            assert_eq!(documents.len(), occurrences.len(), "{keyword} has repeats");
        }
    }

    #[test]
    fn load_keywords_counts_per_document() {
        let builder = IndexBuilder::new(Tokenizer::new(["a", "the"]));
        let keywords = builder.load_keywords(
            "doc.txt",
            "The cat saw a Cat. The cat? Cats, cat!! c4t".split_whitespace(),
        );

        assert_eq!(keywords.len(), 3);
        assert_eq!(keywords["cat"], Occurrence::new("doc.txt", 4));
        assert_eq!(keywords["saw"], Occurrence::new("doc.txt", 1));
        assert_eq!(keywords["cats"], Occurrence::new("doc.txt", 1));
    }

    #[test]
    fn token_order_does_not_change_counts() {
        let builder = IndexBuilder::default();
        let forward = builder.load_keywords("d", ["red", "blue", "red", "green", "red"]);
        let backward = builder.load_keywords("d", ["red", "green", "red", "blue", "red"]);

        assert_eq!(forward, backward);
    }

    #[test]
    fn add_document_rejects_repeats() {
        let mut builder = IndexBuilder::default();
        builder.add_document("one", ["word"]).expect("first add");

        let err = builder.add_document("one", ["word"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateDocument(document) if document == "one"));
        assert_eq!(builder.build().get("word"), &[Occurrence::new("one", 1)]);
    }

    #[test]
    fn make_index_over_memory_corpus() {
        let corpus = MemoryCorpus::new(["the", "and"])
            .with_document("a.txt", "apple apple banana the and")
            .with_document("b.txt", "banana banana banana apple")
            .with_document("c.txt", "apple apple banana")
            .with_document("d.txt", "The. And! cherry");

        let index = make_index(&corpus).expect("indexing should succeed");

        assert_index_invariants(&index);
        assert_eq!(index.document_count(), 4);
        assert_eq!(index.len(), 3);
        assert!(!index.contains("the"));
        assert_eq!(
            index.get("apple"),
            &[
                Occurrence::new("a.txt", 2),
                Occurrence::new("c.txt", 2),
                Occurrence::new("b.txt", 1),
            ]
        );
        assert_eq!(
            index.get("banana"),
            &[
                Occurrence::new("b.txt", 3),
                Occurrence::new("a.txt", 1),
                Occurrence::new("c.txt", 1),
            ]
        );
        assert_eq!(index.get("cherry"), &[Occurrence::new("d.txt", 1)]);
    }

    #[test]
    fn make_index_skips_relisted_documents() {
        let corpus = MemoryCorpus::new(Vec::<String>::new())
            .with_document("a", "word word")
            .with_listing(["a", "a"]);

        let index = make_index(&corpus).expect("indexing should succeed");
        assert_eq!(index.get("word"), &[Occurrence::new("a", 2)]);
    }

    #[test]
    fn make_index_fails_on_missing_document() {
        let corpus = MemoryCorpus::new(Vec::<String>::new())
            .with_document("a", "word")
            .with_listing(["a", "missing"]);

        assert!(matches!(make_index(&corpus), Err(Error::Source { .. })));
    }

    #[test]
    fn many_documents_stay_sorted() {
        let mut corpus = MemoryCorpus::new(["x"]);
        for i in 0..40_u32 {
            let text = "alpha ".repeat((i * 7 % 13) as usize + 1)
                + &"beta ".repeat((i * 5 % 11) as usize);
            corpus = corpus.with_document(format!("doc{i}"), text);
        }

        let index = make_index(&corpus).expect("indexing should succeed");
        assert_index_invariants(&index);
        assert_eq!(index.get("alpha").len(), 40);
    }
}
