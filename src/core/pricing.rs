//! Pricing rules for performances
//!
//! This module computes the monetary amount and the loyalty volume credits
//! earned for a single performance, given its resolved play. Both
//! computations are pure functions over the performance and play data:
//! no side effects, exact integer arithmetic, amounts in cents.
//!
//! # Pricing Rules
//!
//! - **Tragedy**: flat base amount; every attendee beyond the tragedy
//!   audience threshold adds a per-person surcharge.
//! - **Comedy**: base amount plus a per-attendee charge; once the audience
//!   exceeds the comedy threshold, a flat over-capacity surcharge plus a
//!   per-person surcharge for the excess is added.
//!
//! # Volume Credits
//!
//! Every performance earns one credit per attendee above the base credit
//! threshold. Comedies additionally earn one credit per five attendees.

use crate::types::{Performance, Play, PlayType};

/// Audience size above which any performance starts earning volume credits
pub const BASE_VOLUME_CREDIT_THRESHOLD: u32 = 30;

/// One bonus credit is earned per this many comedy attendees
pub const COMEDY_EXTRA_VOLUME_FACTOR: u32 = 5;

/// Per-attendee charge applied to every comedy, in cents
pub const COMEDY_AMOUNT_PER_AUDIENCE: i64 = 300;

/// Audience size above which the comedy over-capacity surcharge applies
pub const COMEDY_AUDIENCE_THRESHOLD: u32 = 20;

/// Base amount for a comedy, in cents
pub const COMEDY_BASE_AMOUNT: i64 = 30_000;

/// Flat surcharge once a comedy audience exceeds the threshold, in cents
pub const COMEDY_OVER_BASE_CAPACITY_AMOUNT: i64 = 10_000;

/// Per-person surcharge for comedy attendees beyond the threshold, in cents
pub const COMEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 500;

/// Audience size above which the tragedy surcharge applies
pub const TRAGEDY_AUDIENCE_THRESHOLD: u32 = 30;

/// Base amount for a tragedy, in cents
pub const TRAGEDY_BASE_AMOUNT: i64 = 40_000;

/// Per-person surcharge for tragedy attendees beyond the threshold, in cents
pub const TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON: i64 = 1_000;

/// Compute the amount (in cents) for a single performance
///
/// The play must be the one the performance's play ID resolves to; the
/// caller performs the lookup. Play type validity is guaranteed by the
/// closed [`PlayType`] enumeration, so the match is exhaustive and this
/// function cannot fail.
///
/// # Arguments
///
/// * `performance` - The performance being priced
/// * `play` - The resolved play for the performance
///
/// # Returns
///
/// The amount in cents, always non-negative
pub fn amount_for(performance: &Performance, play: &Play) -> i64 {
    let audience = performance.audience;

    match play.play_type {
        PlayType::Tragedy => {
            let mut amount = TRAGEDY_BASE_AMOUNT;
            if audience > TRAGEDY_AUDIENCE_THRESHOLD {
                amount += TRAGEDY_OVER_BASE_CAPACITY_PER_PERSON
                    * i64::from(audience - TRAGEDY_AUDIENCE_THRESHOLD);
            }
            amount
        }
        PlayType::Comedy => {
            let mut amount = COMEDY_BASE_AMOUNT;
            if audience > COMEDY_AUDIENCE_THRESHOLD {
                amount += COMEDY_OVER_BASE_CAPACITY_AMOUNT
                    + COMEDY_OVER_BASE_CAPACITY_PER_PERSON
                        * i64::from(audience - COMEDY_AUDIENCE_THRESHOLD);
            }
            amount += COMEDY_AMOUNT_PER_AUDIENCE * i64::from(audience);
            amount
        }
    }
}

/// Compute the volume credits earned for a single performance
///
/// Credits are one per attendee above [`BASE_VOLUME_CREDIT_THRESHOLD`],
/// floored at zero. Comedies earn an extra credit per
/// [`COMEDY_EXTRA_VOLUME_FACTOR`] attendees (integer division).
///
/// # Arguments
///
/// * `performance` - The performance earning credits
/// * `play` - The resolved play for the performance
///
/// # Returns
///
/// The volume credits earned
pub fn volume_credits_for(performance: &Performance, play: &Play) -> u32 {
    let audience = performance.audience;
    let mut credits = audience.saturating_sub(BASE_VOLUME_CREDIT_THRESHOLD);

    // extra credit for every five comedy attendees
    if play.play_type == PlayType::Comedy {
        credits += audience / COMEDY_EXTRA_VOLUME_FACTOR;
    }

    credits
}
