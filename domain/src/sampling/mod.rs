//! No-repeat sampling over named corpora.
//!
//! - [`history::History`] — per-domain record of produced items
//! - [`corpus::Corpus`] — a named collection that draws unseen items
//! - [`pool::Pool`] — picks a non-exhausted corpus and delegates to it

pub mod corpus;
pub mod history;
pub mod pool;
