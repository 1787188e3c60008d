use crate::core::month::Month;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of monthly values a revenue series must contain.
pub const MONTH_COUNT: usize = 12;

/// A month counts as active when its revenue exceeds this fraction of the mean.
pub const ACTIVE_MONTH_RATIO: Decimal = rust_decimal_macros::dec!(0.3);

/// A month counts as a peak month when its revenue exceeds this multiple of the mean.
pub const PEAK_MONTH_MULTIPLIER: Decimal = rust_decimal_macros::dec!(2);

/// Errors arising from malformed revenue input.
///
/// The engine performs no I/O, so these are the only failures it can
/// raise; everything else is an in-band fallback (zero growth, empty
/// offer list, zero credit limit).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("revenue series must contain exactly 12 monthly values, got {got}")]
    WrongLength { got: usize },
    #[error("revenue cannot be all zeros")]
    AllZeroRevenue,
    #[error("revenue for {month} cannot be negative")]
    NegativeRevenue { month: Month },
}

/// Twelve months of business revenue, index 0 = January.
///
/// The atomic input to the scoring and repayment engines. Values are
/// non-negative monetary amounts; a series of all zeros is accepted at
/// construction but rejected by the scorer, which needs a positive mean.
///
/// Immutable once created. All derived statistics (mean, deviation,
/// peak, half-year means) are computed on demand from the stored values.
///
/// # Examples
///
/// ```
/// use credit_engine::core::revenue::RevenueSeries;
/// use rust_decimal_macros::dec;
///
/// let series = RevenueSeries::new(vec![dec!(50_000); 12]).unwrap();
/// assert_eq!(series.mean(), dec!(50_000));
/// assert_eq!(series.annual_total(), dec!(600_000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevenueSeries {
    months: [Decimal; MONTH_COUNT],
}

impl RevenueSeries {
    /// Build a series from exactly 12 non-negative monthly values.
    pub fn new(values: Vec<Decimal>) -> Result<Self, ValidationError> {
        if values.len() != MONTH_COUNT {
            return Err(ValidationError::WrongLength { got: values.len() });
        }
        for (index, value) in values.iter().enumerate() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(ValidationError::NegativeRevenue {
                    month: Month::ALL[index],
                });
            }
        }
        let mut months = [Decimal::ZERO; MONTH_COUNT];
        for (slot, value) in months.iter_mut().zip(values) {
            *slot = value;
        }
        Ok(Self { months })
    }

    /// Build a series from a fixed-size array.
    ///
    /// # Panics
    ///
    /// Panics if any value is negative.
    pub fn from_months(months: [Decimal; MONTH_COUNT]) -> Self {
        for (index, value) in months.iter().enumerate() {
            assert!(
                !value.is_sign_negative() || value.is_zero(),
                "revenue for {} must be non-negative, got {}",
                Month::ALL[index],
                value
            );
        }
        Self { months }
    }

    /// The monthly values in calendar order.
    pub fn months(&self) -> &[Decimal; MONTH_COUNT] {
        &self.months
    }

    /// Revenue for a specific month.
    pub fn month_revenue(&self, month: Month) -> Decimal {
        self.months[month.index()]
    }

    /// Sum of all twelve monthly values.
    pub fn annual_total(&self) -> Decimal {
        self.months.iter().sum()
    }

    /// Arithmetic mean of the monthly values.
    pub fn mean(&self) -> Decimal {
        self.annual_total() / Decimal::from(MONTH_COUNT as u64)
    }

    /// Population standard deviation of the monthly values.
    pub fn std_dev(&self) -> Decimal {
        let mean = self.mean();
        let variance: Decimal = self
            .months
            .iter()
            .map(|value| {
                let deviation = value - mean;
                deviation * deviation
            })
            .sum::<Decimal>()
            / Decimal::from(MONTH_COUNT as u64);
        variance.sqrt().unwrap_or(Decimal::ZERO)
    }

    /// Highest single-month revenue.
    pub fn peak(&self) -> Decimal {
        self.months.iter().copied().max().unwrap_or(Decimal::ZERO)
    }

    /// Mean of the first six months (Jan-Jun).
    pub fn first_half_mean(&self) -> Decimal {
        self.months[..6].iter().sum::<Decimal>() / Decimal::from(6u64)
    }

    /// Mean of the last six months (Jul-Dec).
    pub fn second_half_mean(&self) -> Decimal {
        self.months[6..].iter().sum::<Decimal>() / Decimal::from(6u64)
    }

    /// Number of months with revenue above `ACTIVE_MONTH_RATIO` x mean.
    pub fn active_month_count(&self) -> usize {
        let threshold = self.mean() * ACTIVE_MONTH_RATIO;
        self.months.iter().filter(|value| **value > threshold).count()
    }

    /// Months with revenue above `PEAK_MONTH_MULTIPLIER` x mean.
    pub fn peak_months(&self) -> Vec<Month> {
        let threshold = self.mean() * PEAK_MONTH_MULTIPLIER;
        Month::ALL
            .iter()
            .copied()
            .filter(|month| self.months[month.index()] > threshold)
            .collect()
    }

    /// True when every monthly value is zero.
    pub fn is_all_zero(&self) -> bool {
        self.months.iter().all(|value| value.is_zero())
    }
}
