use crate::core::month::Month;
use crate::core::revenue::{RevenueSeries, PEAK_MONTH_MULTIPLIER};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum monthly installment.
pub const EMI_FLOOR: Decimal = dec!(500);

/// Maximum monthly installment.
pub const EMI_CEILING: Decimal = dec!(15_000);

/// Share of a month's revenue collected as that month's installment.
pub const EMI_REVENUE_SHARE: Decimal = dec!(0.10);

/// Annual rate of the informal-lending alternative the engine compares
/// savings against.
pub const REFERENCE_RATE: Decimal = dec!(0.40);

/// Affordability-indexed installment for one month of revenue:
/// 10% of the month's revenue, clamped to the fixed floor and ceiling,
/// rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use credit_engine::structuring::repayment::dynamic_emi;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(dynamic_emi(dec!(50_000)), dec!(5_000.00));
/// assert_eq!(dynamic_emi(dec!(2_000)), dec!(500));      // floor
/// assert_eq!(dynamic_emi(dec!(380_000)), dec!(15_000)); // ceiling
/// ```
pub fn dynamic_emi(monthly_revenue: Decimal) -> Decimal {
    (monthly_revenue * EMI_REVENUE_SHARE)
        .clamp(EMI_FLOOR, EMI_CEILING)
        .round_dp(2)
}

/// Classification of a month relative to the series mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeasonPhase {
    Peak,
    Rising,
    OffSeason,
}

impl SeasonPhase {
    /// Classify one month's revenue against the series mean.
    pub fn classify(revenue: Decimal, mean: Decimal) -> SeasonPhase {
        if revenue > mean * PEAK_MONTH_MULTIPLIER {
            SeasonPhase::Peak
        } else if revenue > mean {
            SeasonPhase::Rising
        } else {
            SeasonPhase::OffSeason
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonPhase::Peak => "peak",
            SeasonPhase::Rising => "rising",
            SeasonPhase::OffSeason => "off-season",
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One month of a projected repayment calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRow {
    pub month: Month,
    pub revenue: Decimal,
    pub emi: Decimal,
    pub balance: Decimal,
    pub phase: SeasonPhase,
}

/// A twelve-month repayment projection for a given principal, rate,
/// and revenue pattern.
///
/// Fully derived and recomputed per request; nothing here persists.
/// The balance clamps at zero and collected installments are never
/// reconciled against the nominal total. A year of EMIs may exceed or
/// fall short of `total_repayable`, and the calendar reports exactly
/// that via [`closing_balance`](RepaymentCalendar::closing_balance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentCalendar {
    pub principal: Decimal,
    pub annual_rate_percent: Decimal,
    pub total_repayable: Decimal,
    pub interest_charged: Decimal,
    pub saving_vs_reference: Decimal,
    rows: Vec<RepaymentRow>,
}

impl RepaymentCalendar {
    /// The twelve calendar rows in order.
    pub fn rows(&self) -> &[RepaymentRow] {
        &self.rows
    }

    /// Sum of all installments collected across the year.
    pub fn total_emi_collected(&self) -> Decimal {
        self.rows.iter().map(|row| row.emi).sum()
    }

    /// Balance remaining after December.
    pub fn closing_balance(&self) -> Decimal {
        self.rows
            .last()
            .map(|row| row.balance)
            .unwrap_or(self.total_repayable)
    }

    /// True when the nominal total is fully collected within the year.
    pub fn is_settled(&self) -> bool {
        self.closing_balance().is_zero()
    }
}

/// Projects repayment calendars. Pure and deterministic.
pub struct RepaymentSimulator;

impl RepaymentSimulator {
    /// Simulate a twelve-month repayment calendar.
    ///
    /// The caller supplies a concrete annual rate (the engine does not
    /// special-case "no rate") and a positive principal.
    ///
    /// # Panics
    ///
    /// Panics if `principal` is not positive.
    pub fn simulate(
        principal: Decimal,
        annual_rate_percent: Decimal,
        series: &RevenueSeries,
    ) -> RepaymentCalendar {
        assert!(
            principal > Decimal::ZERO,
            "principal must be positive, got {}",
            principal
        );

        let total_repayable =
            (principal * (Decimal::ONE + annual_rate_percent / dec!(100))).round();
        let mean = series.mean();

        let mut balance = total_repayable;
        let mut rows = Vec::with_capacity(12);
        for month in Month::ALL {
            let revenue = series.month_revenue(month);
            let emi = dynamic_emi(revenue);
            balance = (balance - emi).max(Decimal::ZERO);
            rows.push(RepaymentRow {
                month,
                revenue,
                emi,
                balance,
                phase: SeasonPhase::classify(revenue, mean),
            });
        }

        RepaymentCalendar {
            principal,
            annual_rate_percent,
            total_repayable,
            interest_charged: (total_repayable - principal).round(),
            saving_vs_reference: (principal
                * (REFERENCE_RATE - annual_rate_percent / dec!(100)))
            .round(),
            rows,
        }
    }
}

impl fmt::Display for RepaymentCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Repayment Calendar ===")?;
        writeln!(f, "Principal:        {}", self.principal)?;
        writeln!(f, "Rate:             {}%", self.annual_rate_percent)?;
        writeln!(f, "Total repayable:  {}", self.total_repayable)?;
        writeln!(f, "Interest charged: {}", self.interest_charged)?;
        writeln!(f, "Saving vs 40%:    {}", self.saving_vs_reference)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<5} {:>12} {:>10} {:>12}  {}",
            "Month", "Revenue", "EMI", "Balance", "Phase"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<5} {:>12} {:>10} {:>12}  {}",
                row.month.label(),
                row.revenue.round(),
                row.emi,
                row.balance,
                row.phase
            )?;
        }
        Ok(())
    }
}
