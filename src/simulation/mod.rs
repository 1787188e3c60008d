//! Test-data generation: seasonal revenue patterns.

pub mod patterns;
