//! Side-effecting operations: corpus writing, source loading.

pub mod corpus_store;
pub mod source;
