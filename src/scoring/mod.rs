//! Creditworthiness scoring: season score, rate tiers, bureau blending.

pub mod bureau;
pub mod rate_tier;
pub mod season_score;
