//! # credit-engine
//!
//! Seasonal-revenue credit scoring and loan structuring engine.
//!
//! Given twelve months of business revenue, this engine computes a
//! composite creditworthiness score, optionally blends it with an
//! external bureau score, derives a rate tier and credit limit,
//! projects a twelve-month revenue-indexed repayment calendar, and
//! ranks competing lender offers by effective cost.
//!
//! Every operation is a pure function of its inputs: no shared mutable
//! state, no I/O, deterministic results, safe to call concurrently.
//!
//! ## Architecture
//!
//! - **core**: foundational types (months, revenue series, lender catalog)
//! - **scoring**: season score, rate-tier policy, bureau blending
//! - **structuring**: repayment calendars and ranked lender offers
//! - **simulation**: seasonal pattern generation for tests and benchmarks

pub mod core;
pub mod scoring;
pub mod simulation;
pub mod structuring;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::lender::{LenderCatalog, LenderId, LenderProfile};
    pub use crate::core::month::Month;
    pub use crate::core::revenue::{RevenueSeries, ValidationError};
    pub use crate::scoring::bureau::{BlendedScore, BureauBlender, ScoringMethod};
    pub use crate::scoring::rate_tier::{Grade, RateTierPolicy};
    pub use crate::scoring::season_score::{ScoreBreakdown, ScoreCalculator};
    pub use crate::structuring::offers::{Offer, OfferRanker};
    pub use crate::structuring::repayment::{RepaymentCalendar, RepaymentSimulator};
}
