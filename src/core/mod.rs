//! Core business logic module
//!
//! This module contains the statement computation components:
//! - `traits` - The play lookup abstraction
//! - `play_store` - HashMap-backed play catalog
//! - `pricing` - Per-performance amount and volume credit rules
//! - `currency` - US dollar formatting
//! - `statement` - Statement text generation

pub mod currency;
pub mod play_store;
pub mod pricing;
pub mod statement;
pub mod traits;

pub use play_store::PlayStore;
pub use statement::StatementFormatter;
pub use traits::PlayRepository;
