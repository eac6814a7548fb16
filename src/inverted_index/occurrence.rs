use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type DocId = String;
pub type TF = u32;

/// How often one keyword appears in one document.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: DocId,
    pub frequency: TF,
}

impl Occurrence {
    pub fn new(document: impl Into<DocId>, frequency: TF) -> Self {
        Self {
            document: document.into(),
            frequency,
        }
    }
}

/// Keywords of a single document, each with that document's occurrence.
pub type DocumentKeywords = HashMap<String, Occurrence>;
