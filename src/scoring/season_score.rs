use crate::core::month::Month;
use crate::core::revenue::{RevenueSeries, ValidationError};
use crate::scoring::rate_tier::{Grade, RateTierPolicy};
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum value of each weighted sub-score.
const SUB_SCORE_MAX: Decimal = dec!(25);

/// Reference unit against which peak revenue is scaled for the
/// capacity sub-score (50,000 currency units → 3 points).
const CAPACITY_REFERENCE: Decimal = dec!(50_000);

/// Credit limits round to the nearest multiple of this unit.
const LOAN_ROUNDING_UNIT: Decimal = dec!(10_000);

/// Composite creditworthiness assessment derived from a revenue series.
///
/// Four sub-scores, each 0-25, sum to a composite total capped at 100:
/// consistency (low volatility relative to the mean), growth (second
/// half vs first half), capacity (absolute peak scale), and reliability
/// (breadth of active months). Rate, eligibility, and grade come from
/// [`RateTierPolicy`]; credit limits and default risk are derived from
/// the total and the peak.
///
/// Created fresh per scoring call and never mutated; blending with a
/// bureau score produces a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub consistency: u32,
    pub growth: u32,
    pub capacity: u32,
    pub reliability: u32,
    pub total: u32,
    pub eligible: bool,
    pub rate: Option<Decimal>,
    pub grade: Grade,
    pub peak_months: Vec<Month>,
    pub annual_revenue: Decimal,
    pub mean_monthly: Decimal,
    pub peak_revenue: Decimal,
    pub max_loan: Decimal,
    pub min_loan: Decimal,
    pub default_risk: Decimal,
}

/// The season scorer.
///
/// A pure function of the input series: no shared state, no I/O,
/// deterministic for a given input.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Score a revenue series.
    ///
    /// Fails with [`ValidationError::AllZeroRevenue`] when the series
    /// mean is zero; the series type itself guarantees length and
    /// non-negativity.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_engine::core::revenue::RevenueSeries;
    /// use credit_engine::scoring::season_score::ScoreCalculator;
    /// use rust_decimal_macros::dec;
    ///
    /// let series = RevenueSeries::new(vec![dec!(50_000); 12]).unwrap();
    /// let score = ScoreCalculator::score(&series).unwrap();
    /// assert_eq!(score.consistency, 25); // zero volatility
    /// assert_eq!(score.growth, 15);      // flat halves
    /// assert_eq!(score.reliability, 25); // every month active
    /// ```
    pub fn score(series: &RevenueSeries) -> Result<ScoreBreakdown, ValidationError> {
        let mean = series.mean();
        if mean.is_zero() {
            return Err(ValidationError::AllZeroRevenue);
        }

        // Consistency: penalize volatility relative to the series' own mean.
        let cv = series.std_dev() / mean;
        let consistency = clamp_sub_score(SUB_SCORE_MAX - cv * dec!(10));

        // Growth: second half vs first half, centered on 15 for no growth.
        // A non-positive first half yields zero growth rate, not an error.
        let h1 = series.first_half_mean();
        let h2 = series.second_half_mean();
        let growth_rate = if h1 > Decimal::ZERO {
            (h2 - h1) / h1
        } else {
            Decimal::ZERO
        };
        let growth = clamp_sub_score(dec!(15) + growth_rate * dec!(30));

        // Capacity: absolute peak scale against a fixed reference unit.
        let peak = series.peak();
        let capacity = clamp_sub_score(peak / CAPACITY_REFERENCE * dec!(3));

        // Reliability: breadth of active months, not peak intensity.
        let active = Decimal::from(series.active_month_count() as u64);
        let reliability = clamp_sub_score(active / dec!(12) * SUB_SCORE_MAX);

        let total = (consistency + growth + capacity + reliability).min(100);
        let eligible = RateTierPolicy::is_eligible(total);
        let rate = RateTierPolicy::rate_for(total);

        let (max_loan, min_loan) = if eligible {
            let multiplier = dec!(0.4)
                + Decimal::from(total - RateTierPolicy::ELIGIBILITY_THRESHOLD) * dec!(0.004);
            let max_loan = (peak * multiplier / LOAN_ROUNDING_UNIT).round() * LOAN_ROUNDING_UNIT;
            let min_loan = (max_loan * dec!(0.5)).round();
            (max_loan, min_loan)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        // Default risk floors at 3% regardless of score; there is no
        // corresponding ceiling for very low totals.
        let default_risk = (dec!(15) - Decimal::from(total) * dec!(0.12))
            .max(dec!(3))
            .round_dp(1);

        debug!(
            "season score: C={} G={} R={} Rb={} total={} eligible={}",
            consistency, growth, capacity, reliability, total, eligible
        );

        Ok(ScoreBreakdown {
            consistency,
            growth,
            capacity,
            reliability,
            total,
            eligible,
            rate,
            grade: Grade::from_total(total),
            peak_months: series.peak_months(),
            annual_revenue: series.annual_total().round(),
            mean_monthly: mean.round(),
            peak_revenue: peak.round(),
            max_loan,
            min_loan,
            default_risk,
        })
    }

    /// Score a raw slice of monthly values.
    ///
    /// Convenience for callers that have not yet built a
    /// [`RevenueSeries`]; surfaces the wrong-length error directly.
    pub fn score_values(values: &[Decimal]) -> Result<ScoreBreakdown, ValidationError> {
        let series = RevenueSeries::new(values.to_vec())?;
        Self::score(&series)
    }
}

/// Clamp a raw sub-score into [0, 25] and round to the nearest integer.
fn clamp_sub_score(raw: Decimal) -> u32 {
    raw.clamp(Decimal::ZERO, SUB_SCORE_MAX)
        .round()
        .to_u32()
        .unwrap_or(0)
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Season Score ===")?;
        writeln!(f, "Consistency:    {:>3} / 25", self.consistency)?;
        writeln!(f, "Growth:         {:>3} / 25", self.growth)?;
        writeln!(f, "Capacity:       {:>3} / 25", self.capacity)?;
        writeln!(f, "Reliability:    {:>3} / 25", self.reliability)?;
        writeln!(f, "Total:          {:>3} / 100  (grade {})", self.total, self.grade)?;
        writeln!(f, "Eligible:       {}", self.eligible)?;
        match self.rate {
            Some(rate) => writeln!(f, "Rate:           {}%", rate)?,
            None => writeln!(f, "Rate:           — (below threshold)")?,
        }
        writeln!(f, "Credit limit:   {} – {}", self.min_loan, self.max_loan)?;
        writeln!(f, "Default risk:   {}%", self.default_risk)?;
        writeln!(f, "Annual revenue: {}", self.annual_revenue)?;
        writeln!(f, "Mean monthly:   {}", self.mean_monthly)?;
        writeln!(f, "Peak revenue:   {}", self.peak_revenue)?;
        let peaks: Vec<&str> = self.peak_months.iter().map(|m| m.label()).collect();
        if peaks.is_empty() {
            writeln!(f, "Peak months:    none")?;
        } else {
            writeln!(f, "Peak months:    {}", peaks.join(", "))?;
        }
        Ok(())
    }
}
