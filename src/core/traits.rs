//! Core traits for play lookup
//!
//! This module defines the trait abstraction through which the statement
//! formatter resolves plays. Passing the repository as an explicit read-only
//! dependency keeps the pricing and formatting code pure and lets tests
//! substitute their own lookup implementations.

use crate::types::Play;

/// Trait for resolving plays by ID
///
/// Implementations provide read-only lookup of the play catalog. The default
/// implementation is [`PlayStore`](crate::core::PlayStore), a `HashMap`
/// backed store, but anything that can answer ID lookups works.
pub trait PlayRepository {
    /// Resolve a play by its ID
    ///
    /// Returns `None` if no play is registered under `play_id`; callers
    /// decide whether that is an error (statement generation treats it as
    /// fatal).
    fn resolve(&self, play_id: &str) -> Option<&Play>;
}
