//! Theater Billing Engine Library
//! # Overview
//!
//! This library computes and prints the billing statement for a customer's
//! theater invoice: a list of performances (play + audience size), each
//! priced by play-type-specific rules, plus a loyalty volume credit
//! calculation.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Play, Performance, Invoice, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::pricing`] - Per-performance amount and volume credit rules
//!   - [`core::currency`] - US dollar formatting
//!   - [`core::statement`] - Statement text generation
//!   - [`core::play_store`] - Play catalog lookup
//!
//! # Pricing Rules
//!
//! The engine recognizes two play types:
//!
//! - **Tragedy**: Flat base price, with a per-person surcharge past an
//!   audience threshold
//! - **Comedy**: Base price plus a per-attendee charge, with flat and
//!   per-person surcharges past a lower threshold, plus bonus volume credits
//!
//! # Usage
//!
//! ```
//! use theater_billing_engine::{Invoice, Performance, Play, PlayStore, PlayType, StatementFormatter};
//!
//! let plays: PlayStore = vec![("hamlet", Play::new("Hamlet", PlayType::Tragedy))]
//!     .into_iter()
//!     .collect();
//! let invoice = Invoice::new("BigCo", vec![Performance::new("hamlet", 55)]);
//!
//! let statement = StatementFormatter::new(&invoice, &plays).statement()?;
//! assert!(statement.starts_with("Statement for BigCo\n"));
//! # Ok::<(), theater_billing_engine::BillingError>(())
//! ```
//!
//! All computation is pure, synchronous, and single-pass; any error aborts
//! the whole statement and no partial output is produced.

// Module declarations
pub mod core;
pub mod types;

pub use core::{PlayRepository, PlayStore, StatementFormatter};
pub use types::{BillingError, Invoice, Performance, Play, PlayId, PlayType};
