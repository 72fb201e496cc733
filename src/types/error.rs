//! Error types for the Theater Billing Engine
//!
//! This module defines all error types that can occur during statement
//! generation. Errors are designed to be descriptive enough for direct
//! display to the caller.
//!
//! # Error Categories
//!
//! - **Catalog Errors**: A play declares a type outside the closed
//!   enumeration of recognized play types.
//! - **Lookup Errors**: A performance references a play ID with no entry in
//!   the play repository.
//!
//! Every error is fatal for the statement being generated: there is no
//! retry, no recovery, and no partial statement output. The caller decides
//! how to report the failure.

use thiserror::Error;

/// Main error type for the billing engine
///
/// This enum represents all possible errors that can occur while building a
/// statement. Each variant includes the identifier that caused the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    /// A play's type is not one of the recognized enumerated values
    ///
    /// Because play types are modeled as a closed enumeration, this error
    /// is raised when raw catalog data is parsed, before any statement is
    /// generated.
    #[error("unknown play type: {play_type}")]
    UnknownPlayType {
        /// The offending play type string
        play_type: String,
    },

    /// A performance's play ID has no entry in the play repository
    ///
    /// Raised during statement generation; the whole statement is aborted
    /// and no partial output is produced.
    #[error("no play found for ID: {play_id}")]
    MissingPlay {
        /// The play ID that could not be resolved
        play_id: String,
    },
}

// Helper functions for creating common errors

impl BillingError {
    /// Create an UnknownPlayType error
    pub fn unknown_play_type(play_type: &str) -> Self {
        BillingError::UnknownPlayType {
            play_type: play_type.to_string(),
        }
    }

    /// Create a MissingPlay error
    pub fn missing_play(play_id: &str) -> Self {
        BillingError::MissingPlay {
            play_id: play_id.to_string(),
        }
    }
}
