//! Types module
//!
//! Contains the inert data records that form the input to statement
//! generation, organized into logical submodules:
//! - `play`: Play catalog types and the closed play type enumeration
//! - `invoice`: Performance and invoice records
//! - `error`: Error types for the billing engine

pub mod error;
pub mod invoice;
pub mod play;

pub use error::BillingError;
pub use invoice::{Invoice, Performance};
pub use play::{Play, PlayId, PlayType};
