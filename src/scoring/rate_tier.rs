use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single source of truth for score-to-rate-tier semantics.
///
/// Both the season scorer and the bureau blender derive eligibility and
/// interest rate from a composite total through this mapping; no caller
/// re-derives the thresholds.
///
/// # Examples
///
/// ```
/// use credit_engine::scoring::rate_tier::RateTierPolicy;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(RateTierPolicy::rate_for(87), Some(dec!(12.0)));
/// assert_eq!(RateTierPolicy::rate_for(49), None);
/// assert!(RateTierPolicy::is_eligible(50));
/// ```
pub struct RateTierPolicy;

impl RateTierPolicy {
    /// Minimum composite total for any credit offer.
    pub const ELIGIBILITY_THRESHOLD: u32 = 50;

    /// Annual interest rate percent for a composite total, or `None`
    /// when the total is below the eligibility threshold.
    pub fn rate_for(total: u32) -> Option<Decimal> {
        if total >= 80 {
            Some(dec!(12.0))
        } else if total >= 65 {
            Some(dec!(14.0))
        } else if total >= Self::ELIGIBILITY_THRESHOLD {
            Some(dec!(16.0))
        } else {
            None
        }
    }

    /// Whether a composite total clears the eligibility gate.
    pub fn is_eligible(total: u32) -> bool {
        total >= Self::ELIGIBILITY_THRESHOLD
    }
}

/// Letter grade for a composite total, using the same tier thresholds
/// as the rate mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_total(total: u32) -> Grade {
        if total >= 80 {
            Grade::A
        } else if total >= 65 {
            Grade::B
        } else if total >= RateTierPolicy::ELIGIBILITY_THRESHOLD {
            Grade::C
        } else {
            Grade::D
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
        }
    }
}
