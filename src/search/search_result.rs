use serde::{Deserialize, Serialize};

use crate::inverted_index::{DocId, TF};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: DocId,
    pub frequency: TF,
}

impl SearchResult {
    pub const fn new(document: DocId, frequency: TF) -> Self {
        Self {
            document,
            frequency,
        }
    }
}
