//! Loan structuring: repayment calendars and ranked lender offers.

pub mod offers;
pub mod repayment;
