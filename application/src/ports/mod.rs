//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod corpus_source;
pub mod history_store;
pub mod store_error;
