use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    inverted_index::DocId,
};

/// Where documents and noise words come from.
pub trait Corpus {
    /// Documents to index, in order.
    fn documents(&self) -> Result<Vec<DocId>>;

    /// Whitespace-delimited words of `document`, in order.
    fn tokens(&self, document: &str) -> Result<Vec<String>>;

    fn noise_words(&self) -> Result<Vec<String>>;
}

fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| Error::source_at(path, e))?;
    Ok(text.split_whitespace().map(String::from).collect())
}

/// A document list file plus a noise word file. Both hold whitespace
/// separated entries; each document entry is the path of a document.
#[derive(Debug, Clone)]
pub struct FileCorpus {
    docs_file: PathBuf,
    noise_words_file: PathBuf,
}

impl FileCorpus {
    pub fn new(docs_file: impl Into<PathBuf>, noise_words_file: impl Into<PathBuf>) -> Self {
        Self {
            docs_file: docs_file.into(),
            noise_words_file: noise_words_file.into(),
        }
    }
}

impl Corpus for FileCorpus {
    fn documents(&self) -> Result<Vec<DocId>> {
        read_words(&self.docs_file)
    }

    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        read_words(Path::new(document))
    }

    fn noise_words(&self) -> Result<Vec<String>> {
        read_words(&self.noise_words_file)
    }
}

/// Every regular file below a directory, sorted by path.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    root: PathBuf,
    noise_words_file: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>, noise_words_file: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            noise_words_file: noise_words_file.into(),
        }
    }
}

impl Corpus for DirectoryCorpus {
    fn documents(&self) -> Result<Vec<DocId>> {
        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                Error::source_at(path, e.into())
            })?;

            if entry.file_type().is_file() {
                documents.push(entry.path().display().to_string());
            }
        }

        Ok(documents)
    }

    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        read_words(Path::new(document))
    }

    fn noise_words(&self) -> Result<Vec<String>> {
        read_words(&self.noise_words_file)
    }
}

/// Documents held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemoryCorpus {
    listing: Vec<DocId>,
    documents: HashMap<DocId, String>,
    noise_words: Vec<String>,
}

impl MemoryCorpus {
    pub fn new<I, S>(noise_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            noise_words: noise_words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Adds a document and appends it to the listing.
    #[must_use]
    pub fn with_document(mut self, document: impl Into<DocId>, text: impl Into<String>) -> Self {
        let document = document.into();
        self.listing.push(document.clone());
        self.documents.insert(document, text.into());
        self
    }

    /// Replaces the listing, which may then name documents that do not exist.
    #[must_use]
    pub fn with_listing<I, S>(mut self, listing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<DocId>,
    {
        self.listing = listing.into_iter().map(Into::into).collect();
        self
    }
}

impl Corpus for MemoryCorpus {
    fn documents(&self) -> Result<Vec<DocId>> {
        Ok(self.listing.clone())
    }

    fn tokens(&self, document: &str) -> Result<Vec<String>> {
        self.documents
            .get(document)
            .map(|text| text.split_whitespace().map(String::from).collect())
            .ok_or_else(|| {
                Error::source_at(
                    document,
                    io::Error::new(io::ErrorKind::NotFound, "no such document"),
                )
            })
    }

    fn noise_words(&self) -> Result<Vec<String>> {
        Ok(self.noise_words.clone())
    }
}
