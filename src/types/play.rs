//! Play-related types for the Theater Billing Engine
//!
//! This module defines the play catalog types: the play identifier, the
//! closed set of play types recognized by the pricing rules, and the play
//! record itself.

use crate::types::BillingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Play identifier
///
/// The unique key under which a play is registered in the play repository
/// and referenced by performances.
pub type PlayId = String;

/// The closed set of play types recognized by the pricing rules
///
/// Play types drive both the amount calculation and the volume credit
/// calculation. The set is closed on purpose: an unrecognized type is
/// rejected when the play is constructed (via [`FromStr`] or serde), so the
/// pricing code matches exhaustively and never sees an unknown variant at
/// computation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayType {
    /// A tragedy
    ///
    /// Flat base price, with a per-person surcharge for every attendee
    /// beyond the tragedy audience threshold.
    Tragedy,

    /// A comedy
    ///
    /// Base price plus a per-attendee charge, with an additional flat and
    /// per-person surcharge once the audience exceeds the comedy threshold.
    /// Comedies also earn bonus volume credits.
    Comedy,
}

impl FromStr for PlayType {
    type Err = BillingError;

    /// Parse a raw play type string
    ///
    /// Accepts exactly `"tragedy"` and `"comedy"`.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnknownPlayType`] carrying the offending
    /// string for any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tragedy" => Ok(PlayType::Tragedy),
            "comedy" => Ok(PlayType::Comedy),
            other => Err(BillingError::unknown_play_type(other)),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayType::Tragedy => write!(f, "tragedy"),
            PlayType::Comedy => write!(f, "comedy"),
        }
    }
}

/// A play in the catalog
///
/// Immutable after construction. The name is used for display only; the
/// type selects the pricing and volume credit rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name of the play (e.g. "Hamlet")
    pub name: String,

    /// The play type, from the closed enumeration
    #[serde(rename = "type")]
    pub play_type: PlayType,
}

impl Play {
    /// Create a new play with the given name and type
    pub fn new(name: impl Into<String>, play_type: PlayType) -> Self {
        Play {
            name: name.into(),
            play_type,
        }
    }

    /// Create a new play from a raw type string
    ///
    /// Validates the type string against the closed enumeration, so invalid
    /// catalog data is rejected before any statement is generated.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::UnknownPlayType`] if `raw_type` is not one of
    /// the recognized play types.
    pub fn from_raw(name: impl Into<String>, raw_type: &str) -> Result<Self, BillingError> {
        Ok(Play {
            name: name.into(),
            play_type: raw_type.parse()?,
        })
    }
}
