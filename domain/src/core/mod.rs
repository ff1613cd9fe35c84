//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`] — rejected state changes
//! - [`error::DomainError`] — domain-level errors

pub mod error;
