mod engine;
mod search_result;

pub use self::{
    engine::{SearchEngine, DEFAULT_LIMIT},
    search_result::SearchResult,
};
