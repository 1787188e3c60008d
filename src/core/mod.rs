//! Foundational value types: months, revenue series, lender catalog.

pub mod lender;
pub mod month;
pub mod revenue;
