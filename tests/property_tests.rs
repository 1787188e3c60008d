//! Property-based tests for the scoring and structuring engines.
//!
//! Random revenue series must never push a score outside its bounds,
//! break eligibility consistency, or produce a repayment calendar with
//! a rising balance.

use credit_engine::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Twelve monthly revenues with at least one non-zero month.
fn arb_revenue() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0i64..=1_000_000, 12)
        .prop_filter("needs at least one active month", |v| {
            v.iter().any(|&x| x > 0)
        })
        .prop_map(|v| v.into_iter().map(Decimal::from).collect())
}

/// Strongly seasonal series: a flat base with a few spiked months.
fn arb_seasonal_revenue() -> impl Strategy<Value = Vec<Decimal>> {
    (1_000i64..=80_000, 2i64..=10, 0usize..12, 0usize..12).prop_map(
        |(base, multiplier, spike_a, spike_b)| {
            let mut values = vec![base; 12];
            values[spike_a] = base * multiplier;
            values[spike_b] = base * multiplier;
            values.into_iter().map(Decimal::from).collect()
        },
    )
}

proptest! {
    #[test]
    fn sub_scores_and_total_stay_in_bounds(values in arb_revenue()) {
        let score = ScoreCalculator::score_values(&values).unwrap();

        prop_assert!(score.consistency <= 25);
        prop_assert!(score.growth <= 25);
        prop_assert!(score.capacity <= 25);
        prop_assert!(score.reliability <= 25);
        prop_assert!(score.total <= 100);
    }

    #[test]
    fn eligibility_rate_and_limits_agree(values in arb_revenue()) {
        let score = ScoreCalculator::score_values(&values).unwrap();

        prop_assert_eq!(score.eligible, score.total >= 50);
        prop_assert_eq!(score.eligible, score.rate.is_some());
        if score.eligible {
            prop_assert!(score.max_loan >= Decimal::ZERO);
            prop_assert!(score.min_loan <= score.max_loan);
            // Loan ceiling lands on a 10,000 boundary.
            prop_assert_eq!(score.max_loan % dec!(10000), Decimal::ZERO);
        } else {
            prop_assert_eq!(score.max_loan, Decimal::ZERO);
            prop_assert_eq!(score.min_loan, Decimal::ZERO);
        }
        prop_assert!(score.default_risk >= dec!(3));
        prop_assert!(score.default_risk <= dec!(15));
    }

    #[test]
    fn scoring_is_deterministic(values in arb_revenue()) {
        let first = ScoreCalculator::score_values(&values).unwrap();
        let second = ScoreCalculator::score_values(&values).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn blend_without_bureau_changes_nothing(values in arb_revenue()) {
        let season = ScoreCalculator::score_values(&values).unwrap();
        let blended = BureauBlender::blend(&season, None);

        prop_assert_eq!(blended.scoring_method, ScoringMethod::SeasonOnly);
        prop_assert_eq!(blended.total(), season.total);
        prop_assert_eq!(blended.rate(), season.rate);
    }

    #[test]
    fn blended_total_stays_in_bounds(
        values in arb_revenue(),
        bureau in 1u32..=1000,
    ) {
        let season = ScoreCalculator::score_values(&values).unwrap();
        let blended = BureauBlender::blend(&season, Some(bureau));

        prop_assert!(blended.total() <= 100);
        prop_assert_eq!(blended.is_eligible(), blended.total() >= 50);
    }

    #[test]
    fn offers_are_sorted_and_gated(
        values in arb_seasonal_revenue(),
        amount in 10_000i64..=2_000_000,
    ) {
        let score = ScoreCalculator::score_values(&values).unwrap();
        let amount = Decimal::from(amount);
        let offers = OfferRanker::rank(score.total, amount, &LenderCatalog::default());

        if score.total < 50 {
            prop_assert!(offers.is_empty());
        }
        for pair in offers.windows(2) {
            prop_assert!(pair[0].effective_cost <= pair[1].effective_cost);
        }
        for offer in &offers {
            prop_assert!(offer.fee_amount >= Decimal::ZERO);
            prop_assert!(offer.total_repayable >= amount);
        }
    }

    #[test]
    fn calendar_balance_never_rises(
        values in arb_revenue(),
        principal in 10_000i64..=1_000_000,
    ) {
        let series = RevenueSeries::new(values).unwrap();
        let principal = Decimal::from(principal);
        let calendar = RepaymentSimulator::simulate(principal, dec!(14), &series);

        prop_assert_eq!(calendar.rows().len(), 12);
        prop_assert!(calendar.total_repayable >= principal);

        let mut previous = calendar.total_repayable;
        for row in calendar.rows() {
            prop_assert!(row.emi >= dec!(500.00));
            prop_assert!(row.emi <= dec!(15000.00));
            prop_assert!(row.balance >= Decimal::ZERO);
            prop_assert!(row.balance <= previous);
            previous = row.balance;
        }
        prop_assert_eq!(calendar.closing_balance(), previous);
    }
}
