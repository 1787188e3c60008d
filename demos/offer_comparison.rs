//! Walk one seasonal business through the full pipeline: score the
//! revenue, blend with a bureau score, rank lender offers, and project
//! the repayment calendar for the cheapest offer.
//!
//! Run with: `cargo run --example offer_comparison`

use credit_engine::core::lender::LenderCatalog;
use credit_engine::scoring::bureau::BureauBlender;
use credit_engine::scoring::season_score::ScoreCalculator;
use credit_engine::simulation::patterns::pattern_series;
use credit_engine::structuring::offers::OfferRanker;
use credit_engine::structuring::repayment::RepaymentSimulator;
use rust_decimal_macros::dec;

fn main() {
    let series = match pattern_series("festival_retail") {
        Some(series) => series,
        None => {
            eprintln!("festival_retail pattern missing");
            return;
        }
    };

    let season = match ScoreCalculator::score(&series) {
        Ok(score) => score,
        Err(e) => {
            eprintln!("scoring failed: {}", e);
            return;
        }
    };
    println!("{}", season);

    let blended = BureauBlender::blend(&season, Some(720));
    println!(
        "Blended with bureau 720 → total {} ({})\n",
        blended.total(),
        blended.scoring_method
    );

    let amount = dec!(300000);
    let catalog = LenderCatalog::default();
    let offers = OfferRanker::rank(blended.total(), amount, &catalog);

    if offers.is_empty() {
        println!("No lender offers at this score.");
        return;
    }

    println!("Offers for {} (cheapest first):", amount);
    for (i, offer) in offers.iter().enumerate() {
        println!("  {}. {}", i + 1, offer);
    }

    let best = &offers[0];
    println!(
        "\nRepayment projection with {} at {}%:",
        best.lender_name, best.rate
    );
    let calendar = RepaymentSimulator::simulate(amount, best.rate, &series);
    println!("{}", calendar);
}
