//! Score every built-in seasonal pattern and print the resulting
//! credit profiles side by side.
//!
//! Run with: `cargo run --example score_profile`

use credit_engine::scoring::bureau::BureauBlender;
use credit_engine::scoring::season_score::ScoreCalculator;
use credit_engine::simulation::patterns::{pattern_names, pattern_series};

fn main() {
    println!("Credit profiles for the built-in seasonal patterns\n");
    println!(
        "{:<18} {:>5} {:>5} {:>6} {:>8} {:>10}  peak months",
        "pattern", "score", "grade", "rate%", "risk%", "max loan"
    );
    println!("{}", "-".repeat(72));

    for name in pattern_names() {
        let series = match pattern_series(name) {
            Some(series) => series,
            None => continue,
        };
        let score = match ScoreCalculator::score(&series) {
            Ok(score) => score,
            Err(e) => {
                eprintln!("{:<18} scoring failed: {}", name, e);
                continue;
            }
        };

        let peaks: Vec<String> =
            score.peak_months.iter().map(|m| m.to_string()).collect();
        let rate = score
            .rate
            .map(|r| r.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<18} {:>5} {:>5} {:>6} {:>8} {:>10}  {}",
            name,
            score.total,
            score.grade,
            rate,
            score.default_risk,
            score.max_loan,
            peaks.join(", ")
        );
    }

    // Show how a bureau score shifts a single profile.
    println!();
    if let Some(series) = pattern_series("festival_retail") {
        if let Ok(season) = ScoreCalculator::score(&series) {
            println!("festival_retail blended against bureau scores:");
            for bureau in [350, 550, 680, 750, 850] {
                let blended = BureauBlender::blend(&season, Some(bureau));
                let band = blended
                    .bureau_band
                    .map(|b| b.to_string())
                    .unwrap_or_default();
                println!(
                    "  bureau {:>3} ({:<9}) → blended {:>3}, rate {:?}",
                    bureau,
                    band,
                    blended.total(),
                    blended.rate()
                );
            }
        }
    }
}
