use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a lender in the partner catalog.
///
/// # Examples
///
/// ```
/// use credit_engine::core::lender::LenderId;
///
/// let a = LenderId::new("L001");
/// let b = LenderId::new("L002");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LenderId(String);

impl LenderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LenderId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Commercial terms of a single partner lender.
///
/// `rate_offset` is a signed percentage delta applied on top of the
/// score-derived base rate; `fee_percent` is the one-time processing
/// fee. Profiles are static configuration and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderProfile {
    pub id: LenderId,
    pub display_name: String,
    pub rate_offset: Decimal,
    pub fee_percent: Decimal,
    pub disbursal_hours: u32,
    pub min_eligible_score: u32,
    pub available_capital: Decimal,
}

/// Ordered, read-only catalog of partner lenders.
///
/// Catalog order is meaningful: offers with equal effective cost are
/// ranked in listing order. The default catalog is the built-in
/// five-lender NBFC panel.
///
/// # Examples
///
/// ```
/// use credit_engine::core::lender::LenderCatalog;
///
/// let catalog = LenderCatalog::default();
/// assert_eq!(catalog.len(), 5);
/// assert_eq!(catalog.lenders()[0].id.as_str(), "L001");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LenderCatalog {
    lenders: Vec<LenderProfile>,
}

impl LenderCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self {
            lenders: Vec::new(),
        }
    }

    /// Build a catalog from an explicit lender list, preserving order.
    pub fn with_lenders(lenders: Vec<LenderProfile>) -> Self {
        Self { lenders }
    }

    /// The lenders in listing order.
    pub fn lenders(&self) -> &[LenderProfile] {
        &self.lenders
    }

    /// Look up a lender by id.
    pub fn get(&self, id: &LenderId) -> Option<&LenderProfile> {
        self.lenders.iter().find(|lender| &lender.id == id)
    }

    pub fn len(&self) -> usize {
        self.lenders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lenders.is_empty()
    }
}

impl Default for LenderCatalog {
    /// The built-in NBFC partner panel.
    fn default() -> Self {
        Self::with_lenders(vec![
            LenderProfile {
                id: LenderId::new("L001"),
                display_name: "FinGrow Capital".to_string(),
                rate_offset: dec!(-0.5),
                fee_percent: dec!(1.5),
                disbursal_hours: 24,
                min_eligible_score: 50,
                available_capital: dec!(50_000_000),
            },
            LenderProfile {
                id: LenderId::new("L002"),
                display_name: "QuickCapital NBFC".to_string(),
                rate_offset: dec!(1.0),
                fee_percent: dec!(1.0),
                disbursal_hours: 12,
                min_eligible_score: 50,
                available_capital: dec!(30_000_000),
            },
            LenderProfile {
                id: LenderId::new("L003"),
                display_name: "Lendingkart".to_string(),
                rate_offset: dec!(0.5),
                fee_percent: dec!(2.0),
                disbursal_hours: 36,
                min_eligible_score: 55,
                available_capital: dec!(80_000_000),
            },
            LenderProfile {
                id: LenderId::new("L004"),
                display_name: "Capital Float".to_string(),
                rate_offset: dec!(1.5),
                fee_percent: dec!(1.2),
                disbursal_hours: 20,
                min_eligible_score: 65,
                available_capital: dec!(40_000_000),
            },
            LenderProfile {
                id: LenderId::new("L005"),
                display_name: "SeasonFund Pro".to_string(),
                rate_offset: dec!(2.5),
                fee_percent: dec!(0.5),
                disbursal_hours: 48,
                min_eligible_score: 60,
                available_capital: dec!(25_000_000),
            },
        ])
    }
}
