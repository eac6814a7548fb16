use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    corpus::{DirectoryCorpus, FileCorpus},
    error::{Error, Result},
    inverted_index::{make_index, InvertedIndex},
    search::DEFAULT_LIMIT,
};

const fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Where the corpus lives and how many results a query returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File listing the documents to index
    #[serde(default)]
    pub docs: Option<PathBuf>,

    /// Directory whose files are all indexed
    #[serde(default)]
    pub docs_dir: Option<PathBuf>,

    pub noise_words: PathBuf,

    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Config {
    pub fn new(noise_words: impl Into<PathBuf>) -> Self {
        Self {
            docs: None,
            docs_dir: None,
            noise_words: noise_words.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::source_at(path, e))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match (&self.docs, &self.docs_dir) {
            (Some(_), Some(_)) => {
                return Err(Error::Generic(
                    "Only one of docs and docs_dir may be set".to_string(),
                ))
            }
            (None, None) => {
                return Err(Error::Generic(
                    "One of docs or docs_dir must be set".to_string(),
                ))
            }
            _ => {}
        }

        if self.limit == 0 {
            return Err(Error::Generic("Limit must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Validates the config and indexes the corpus it points at.
    pub fn build_index(&self) -> Result<InvertedIndex> {
        self.validate()?;

        match (&self.docs, &self.docs_dir) {
            (Some(docs), _) => make_index(&FileCorpus::new(docs, &self.noise_words)),
            (None, Some(dir)) => make_index(&DirectoryCorpus::new(dir, &self.noise_words)),
            (None, None) => Err(Error::Generic(
                "One of docs or docs_dir must be set".to_string(),
            )),
        }
    }
}
