//! End-to-end tests for the full scoring and structuring pipeline:
//! revenue series → season score → bureau blend → repayment calendar
//! and lender offers.

use credit_engine::prelude::*;
use credit_engine::scoring::bureau::BureauBand;
use credit_engine::structuring::repayment::SeasonPhase;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Festival retailer: quiet spring, explosive October-November season.
fn festival_series() -> RevenueSeries {
    RevenueSeries::new(vec![
        dec!(45000),
        dec!(42000),
        dec!(38000),
        dec!(35000),
        dec!(40000),
        dec!(38000),
        dec!(42000),
        dec!(55000),
        dec!(120000),
        dec!(340000),
        dec!(380000),
        dec!(95000),
    ])
    .unwrap()
}

fn flat_series() -> RevenueSeries {
    RevenueSeries::new(vec![dec!(60000); 12]).unwrap()
}

#[test]
fn festival_retailer_scores_grade_a() {
    let breakdown = ScoreCalculator::score(&festival_series()).unwrap();

    assert_eq!(breakdown.consistency, 14);
    assert_eq!(breakdown.growth, 25);
    assert_eq!(breakdown.capacity, 23);
    assert_eq!(breakdown.reliability, 25);
    assert_eq!(breakdown.total, 87);
    assert_eq!(breakdown.grade, Grade::A);
    assert_eq!(breakdown.rate, Some(dec!(12.0)));
    assert!(breakdown.eligible);
    assert_eq!(breakdown.peak_months, vec![Month::Oct, Month::Nov]);
    assert_eq!(breakdown.annual_revenue, dec!(1270000));
    assert_eq!(breakdown.max_loan, dec!(210000));
    assert_eq!(breakdown.min_loan, dec!(105000));
    assert_eq!(breakdown.default_risk, dec!(4.6));
}

#[test]
fn full_pipeline_with_bureau_score() {
    let series = festival_series();
    let season = ScoreCalculator::score(&series).unwrap();
    let blended = BureauBlender::blend(&season, Some(720));

    // 0.7 * 87 + 0.3 * (720 - 300) / 6 = 60.9 + 21.0 → 82
    assert_eq!(blended.total(), 82);
    assert_eq!(blended.scoring_method, ScoringMethod::Blended);
    assert!(blended.is_eligible());
    assert_eq!(blended.rate(), Some(dec!(12.0)));

    let amount = dec!(300000);
    let offers = OfferRanker::rank(blended.total(), amount, &LenderCatalog::default());

    // Score 82 clears every lender's threshold.
    assert_eq!(offers.len(), 5);
    assert_eq!(offers[0].lender_id, LenderId::from("L001"));
    for pair in offers.windows(2) {
        assert!(pair[0].effective_cost <= pair[1].effective_cost);
    }
    for offer in &offers {
        let expected =
            (amount * (Decimal::ONE + offer.rate / dec!(100))).round();
        assert_eq!(offer.total_repayable, expected);
    }

    let rate = blended.rate().unwrap();
    let calendar = RepaymentSimulator::simulate(amount, rate, &series);
    assert_eq!(calendar.total_repayable, dec!(336000));
    assert_eq!(calendar.rows().len(), 12);
}

#[test]
fn flat_business_blended_with_mid_bureau() {
    let season = ScoreCalculator::score(&flat_series()).unwrap();
    assert_eq!(season.total, 69);
    assert_eq!(season.grade, Grade::B);

    let blended = BureauBlender::blend(&season, Some(680));

    // 0.7 * 69 + 0.3 * 63.33 = 48.3 + 19.0 → 67
    assert_eq!(blended.total(), 67);
    assert_eq!(blended.rate(), Some(dec!(14.0)));
    assert_eq!(blended.bureau_band, Some(BureauBand::Fair));
    // Grade stays with the revenue-only assessment.
    assert_eq!(blended.breakdown.grade, Grade::B);
}

#[test]
fn calendar_tracks_seasonal_cashflow() {
    let series = festival_series();
    let calendar = RepaymentSimulator::simulate(dec!(300000), dec!(14), &series);

    assert_eq!(calendar.total_repayable, dec!(342000));
    assert_eq!(calendar.interest_charged, dec!(42000));
    assert_eq!(calendar.total_emi_collected(), dec!(85000));
    assert_eq!(calendar.closing_balance(), dec!(257000));
    assert!(!calendar.is_settled());

    // October and November run well above the mean and cap out the EMI.
    let rows = calendar.rows();
    assert_eq!(rows[9].phase, SeasonPhase::Peak);
    assert_eq!(rows[9].emi, dec!(15000.00));
    assert_eq!(rows[10].emi, dec!(15000.00));
    // April is the quietest month.
    assert_eq!(rows[3].emi, dec!(3500.00));

    // Balance never goes back up.
    for pair in rows.windows(2) {
        assert!(pair[1].balance <= pair[0].balance);
    }
}

#[test]
fn ineligible_series_produces_no_offers() {
    // One good month, eleven dead ones.
    let mut values = vec![dec!(0); 12];
    values[5] = dec!(200000);
    let series = RevenueSeries::new(values).unwrap();

    let season = ScoreCalculator::score(&series).unwrap();
    assert!(!season.eligible);
    assert_eq!(season.rate, None);
    assert_eq!(season.max_loan, Decimal::ZERO);

    let offers = OfferRanker::rank(season.total, dec!(100000), &LenderCatalog::default());
    assert!(offers.is_empty());
}

#[test]
fn bureau_blend_without_bureau_is_identity() {
    let season = ScoreCalculator::score(&festival_series()).unwrap();
    let blended = BureauBlender::blend(&season, None);

    assert_eq!(blended.scoring_method, ScoringMethod::SeasonOnly);
    assert!(!blended.bureau_provided);
    assert_eq!(blended.bureau_band, None);
    assert_eq!(blended.total(), season.total);
    assert_eq!(blended.rate(), season.rate);
}

#[test]
fn blended_score_serializes_with_flattened_breakdown() {
    let season = ScoreCalculator::score(&festival_series()).unwrap();
    let blended = BureauBlender::blend(&season, Some(720));

    let json = serde_json::to_value(&blended).unwrap();
    assert_eq!(json["total"], 82);
    assert_eq!(json["grade"], "A");
    assert_eq!(json["scoring_method"], "blended");
    assert_eq!(json["bureau_provided"], true);
    assert_eq!(json["peak_months"][0], "Oct");

    // Decimal amounts travel as strings.
    assert_eq!(json["annual_revenue"], "1270000");
}

#[test]
fn offers_serialize_round_trip() {
    let offers = OfferRanker::rank(74, dec!(300000), &LenderCatalog::default());
    let json = serde_json::to_string(&offers).unwrap();
    let back: Vec<Offer> = serde_json::from_str(&json).unwrap();
    assert_eq!(offers, back);
}
