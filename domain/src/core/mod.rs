//! Core domain concepts shared across all subdomains.
//!
//! - [`item::Item`] — a value decoded from a corpus or history document
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod item;
