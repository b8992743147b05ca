//! Domain layer for corpus-pool
//!
//! This crate contains the sampling logic and its value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Corpus
//!
//! A named, fixed collection of candidate [`Item`]s. The name doubles as the
//! key ("domain") under which produced items are recorded in [`History`].
//!
//! ## History
//!
//! A mapping from domain to the items already produced for it. A corpus
//! never repeats an item until every one of its items has been recorded.
//!
//! ## Pool
//!
//! An aggregator that picks a random non-exhausted [`Corpus`] and draws from
//! it, resetting every domain once all of its corpora are exhausted.

pub mod config;
pub mod core;
pub mod sampling;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{error::DomainError, item::Item};
pub use sampling::{corpus::Corpus, history::History, pool::Draw, pool::Pool};
