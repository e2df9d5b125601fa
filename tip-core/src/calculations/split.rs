//! Per-person tip and total calculation.
//!
//! The split takes a bill, a tip percentage and a head count, and produces
//! the two amounts shown on the form:
//!
//! | Output             | Formula                                          |
//! |--------------------|--------------------------------------------------|
//! | `tip_per_person`   | `round2((bill * tip / 100) / people)`            |
//! | `total_per_person` | `round2((bill + bill * tip / 100) / people)`     |
//!
//! Both outputs are rounded half-up to cents on exact decimal arithmetic.
//! The whole tip is never rounded before the division.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::calculations::{TipSplit, TipSplitInput};
//!
//! let input = TipSplitInput {
//!     bill: dec!(123.45),
//!     tip_percent: 18,
//!     people: 3,
//! };
//!
//! let result = TipSplit::calculate(&input).unwrap();
//!
//! assert_eq!(result.tip_per_person, dec!(7.41));
//! assert_eq!(result.total_per_person, dec!(48.56));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors that can occur during a split calculation.
///
/// The form never produces these inputs; they guard direct callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TipSplitError {
    /// The bill must be greater than zero.
    #[error("bill must be positive, got {0}")]
    NonPositiveBill(Decimal),

    /// The bill cannot be split between zero people.
    #[error("cannot split a bill between zero people")]
    NoPeople,
}

/// Input values for a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSplitInput {
    /// Bill amount before tip.
    pub bill: Decimal,

    /// Tip as a whole-number percentage of the bill.
    pub tip_percent: u32,

    /// Number of people sharing the bill.
    pub people: u32,
}

/// Result of a split, both values rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipSplitResult {
    /// Each person's share of the tip.
    pub tip_per_person: Decimal,

    /// Each person's share of bill plus tip.
    pub total_per_person: Decimal,
}

/// Calculator for the per-person split.
#[derive(Debug, Clone, Copy, Default)]
pub struct TipSplit;

impl TipSplit {
    /// Calculates both per-person amounts.
    ///
    /// # Errors
    ///
    /// Returns [`TipSplitError`] if:
    /// - the bill is zero or negative
    /// - the head count is zero
    pub fn calculate(input: &TipSplitInput) -> Result<TipSplitResult, TipSplitError> {
        if input.bill <= Decimal::ZERO {
            return Err(TipSplitError::NonPositiveBill(input.bill));
        }
        if input.people == 0 {
            return Err(TipSplitError::NoPeople);
        }

        let total_tip = Self::total_tip(input.bill, input.tip_percent);
        let people = Decimal::from(input.people);

        Ok(TipSplitResult {
            tip_per_person: round_half_up(total_tip / people),
            total_per_person: round_half_up((input.bill + total_tip) / people),
        })
    }

    /// Calculates the unrounded tip for the whole table.
    fn total_tip(
        bill: Decimal,
        tip_percent: u32,
    ) -> Decimal {
        bill * Decimal::from(tip_percent) / Decimal::ONE_HUNDRED
    }
}
