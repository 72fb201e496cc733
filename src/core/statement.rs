//! Statement generation
//!
//! This module provides the StatementFormatter that renders the billing
//! statement for an invoice by coordinating play lookup, pricing, and
//! currency formatting.
//!
//! The formatter walks the invoice's performances in order, resolves each
//! play through the [`PlayRepository`], prices it, and accumulates the
//! total amount and total volume credits for the footer. Any lookup failure
//! aborts the whole statement; no partial output is produced.

use crate::core::currency::usd;
use crate::core::pricing::{amount_for, volume_credits_for};
use crate::core::traits::PlayRepository;
use crate::types::{BillingError, Invoice, Performance, Play};
use std::fmt::Write;

/// Statement formatter
///
/// Borrows an invoice and a play repository and renders the plain-text
/// billing statement. Holds no mutable state; a formatter can be reused to
/// render the same statement repeatedly.
pub struct StatementFormatter<'a, R: PlayRepository> {
    invoice: &'a Invoice,
    plays: &'a R,
}

impl<'a, R: PlayRepository> StatementFormatter<'a, R> {
    /// Create a new statement formatter for the given invoice and play repository
    ///
    /// # Arguments
    ///
    /// * `invoice` - The invoice to render
    /// * `plays` - The play repository used to resolve each performance's play
    pub fn new(invoice: &'a Invoice, plays: &'a R) -> Self {
        StatementFormatter { invoice, plays }
    }

    /// Render the plain-text statement for this formatter's invoice
    ///
    /// Produces a header line with the customer name, one line per
    /// performance in invoice order, and a two-line footer with the total
    /// amount owed and the total volume credits earned. Every line,
    /// including the last, ends with a newline.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with the complete statement text
    /// * `Err(BillingError)` if any performance's play cannot be resolved
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::MissingPlay`] if a performance references a
    /// play ID with no entry in the repository. The error carries the
    /// offending play ID and no partial statement is returned.
    pub fn statement(&self) -> Result<String, BillingError> {
        let mut result = format!("Statement for {}\n", self.invoice.customer);
        let mut total_amount: i64 = 0;
        let mut total_credits: u32 = 0;

        // build a line for each performance, accumulating the totals
        for performance in &self.invoice.performances {
            let play = self.resolve(performance)?;
            let amount = amount_for(performance, play);

            total_amount += amount;
            total_credits += volume_credits_for(performance, play);

            // infallible: writing to a String cannot fail
            let _ = writeln!(
                result,
                "  {}: {} ({} seats)",
                play.name,
                usd(amount),
                performance.audience
            );
        }

        // totals
        let _ = writeln!(result, "Amount owed is {}", usd(total_amount));
        let _ = writeln!(result, "You earned {} credits", total_credits);

        Ok(result)
    }

    /// Look up the play for the given performance
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::MissingPlay`] if the performance's play ID
    /// has no entry in the repository.
    fn resolve(&self, performance: &Performance) -> Result<&'a Play, BillingError> {
        self.plays
            .resolve(&performance.play_id)
            .ok_or_else(|| BillingError::missing_play(&performance.play_id))
    }
}
