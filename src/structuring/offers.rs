use crate::core::lender::{LenderCatalog, LenderId};
use crate::scoring::rate_tier::RateTierPolicy;
use crate::structuring::repayment::REFERENCE_RATE;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A loan offer computed for one lender against a blended score and a
/// requested amount. Never persisted; recomputed on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub lender_id: LenderId,
    pub lender_name: String,
    pub rate: Decimal,
    pub fee_percent: Decimal,
    pub fee_amount: Decimal,
    pub disbursal_hours: u32,
    pub total_repayable: Decimal,
    pub effective_cost: Decimal,
    pub saving_vs_reference: Decimal,
}

/// Ranks per-lender offers by effective cost.
pub struct OfferRanker;

impl OfferRanker {
    /// Compute and rank offers for a blended score total and requested
    /// amount against a lender catalog.
    ///
    /// Totals below the eligibility gate yield an empty list no matter
    /// what individual lenders would accept. The base rate decreases
    /// linearly in the score with no floor; with the shipped catalog a
    /// perfect score bottoms out at 11.5% after the best offset.
    ///
    /// The sort on effective cost is stable, so offers that tie keep
    /// catalog listing order.
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_engine::core::lender::LenderCatalog;
    /// use credit_engine::structuring::offers::OfferRanker;
    /// use rust_decimal_macros::dec;
    ///
    /// let catalog = LenderCatalog::default();
    /// let offers = OfferRanker::rank(74, dec!(300_000), &catalog);
    /// assert!(!offers.is_empty());
    /// assert!(OfferRanker::rank(49, dec!(300_000), &catalog).is_empty());
    /// ```
    pub fn rank(blended_total: u32, amount: Decimal, catalog: &LenderCatalog) -> Vec<Offer> {
        if !RateTierPolicy::is_eligible(blended_total) {
            return Vec::new();
        }

        let base_rate = dec!(16)
            - Decimal::from(blended_total - RateTierPolicy::ELIGIBILITY_THRESHOLD) * dec!(0.08);

        let mut offers: Vec<Offer> = catalog
            .lenders()
            .iter()
            .filter(|lender| blended_total >= lender.min_eligible_score)
            .map(|lender| {
                let rate = (base_rate + lender.rate_offset).round_dp(1);
                Offer {
                    lender_id: lender.id.clone(),
                    lender_name: lender.display_name.clone(),
                    rate,
                    fee_percent: lender.fee_percent,
                    fee_amount: (amount * lender.fee_percent / dec!(100)).round(),
                    disbursal_hours: lender.disbursal_hours,
                    total_repayable: (amount * (Decimal::ONE + rate / dec!(100))).round(),
                    // Fee amortized as a pseudo-monthly rate addition;
                    // an approximation, not a precise annuity figure.
                    effective_cost: (rate + lender.fee_percent / dec!(12)).round_dp(2),
                    saving_vs_reference: (amount * (REFERENCE_RATE - rate / dec!(100))).round(),
                }
            })
            .collect();

        offers.sort_by(|a, b| a.effective_cost.cmp(&b.effective_cost));

        debug!(
            "ranked {} offers for total={} amount={} (base rate {})",
            offers.len(),
            blended_total,
            amount,
            base_rate
        );
        offers
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]  rate {}%  fee {}  effective {}%  repayable {}  ({}h)",
            self.lender_name,
            self.lender_id,
            self.rate,
            self.fee_amount,
            self.effective_cost,
            self.total_repayable,
            self.disbursal_hours
        )
    }
}
