pub mod config;
pub mod corpus;
pub mod error;
pub mod inverted_index;
pub mod search;
pub mod tokenizer;
