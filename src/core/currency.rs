//! US dollar formatting for statement amounts
//!
//! This module renders integer cent amounts as US-locale currency strings:
//! a leading `$`, comma thousands separators, and two decimal places.
//!
//! Amounts are first truncated to whole dollars by integer division (all
//! amounts produced by the pricing rules are multiples of 100, so nothing
//! is lost in practice), then rendered with a fixed `.00` fraction. A
//! non-multiple of 100 therefore formats as its whole-dollar value.

/// Divisor converting cents into whole dollars
pub const PERCENT_FACTOR: i64 = 100;

/// Format an amount (in cents) as a US dollar currency string
///
/// # Arguments
///
/// * `amount` - The amount in cents (non-negative)
///
/// # Returns
///
/// The formatted currency string, e.g. `30000` formats as `"$300.00"` and
/// `1234500` as `"$12,345.00"`
pub fn usd(amount: i64) -> String {
    let dollars = amount / PERCENT_FACTOR;
    format!("${}.00", group_thousands(dollars))
}

/// Insert comma separators into a whole dollar value
fn group_thousands(dollars: i64) -> String {
    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}
