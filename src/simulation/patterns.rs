//! Seasonal revenue pattern generation for tests and benchmarks.
//!
//! Ships the named reference patterns observed in seasonal MSME
//! businesses plus a randomized generator for stress-testing the
//! scoring pipeline with arbitrary seasonality shapes.

use crate::core::month::Month;
use crate::core::revenue::RevenueSeries;
use rand::Rng;
use rust_decimal::Decimal;

/// Named reference patterns: (name, twelve monthly revenues).
const PATTERN_TABLE: [(&str, [i64; 12]); 8] = [
    (
        "festival_retail",
        [
            45_000, 42_000, 38_000, 35_000, 40_000, 38_000, 42_000, 55_000, 120_000, 340_000,
            380_000, 95_000,
        ],
    ),
    (
        "agriculture",
        [
            30_000, 28_000, 80_000, 220_000, 280_000, 180_000, 40_000, 35_000, 32_000, 30_000,
            28_000, 25_000,
        ],
    ),
    (
        "coaching",
        [
            50_000, 55_000, 180_000, 200_000, 80_000, 160_000, 170_000, 90_000, 60_000, 55_000,
            50_000, 48_000,
        ],
    ),
    (
        "catering",
        [
            180_000, 200_000, 80_000, 60_000, 55_000, 50_000, 55_000, 60_000, 80_000, 100_000,
            220_000, 280_000,
        ],
    ),
    (
        "tourism",
        [
            200_000, 180_000, 80_000, 60_000, 220_000, 280_000, 200_000, 160_000, 80_000, 60_000,
            55_000, 240_000,
        ],
    ),
    (
        "firecracker",
        [
            20_000, 18_000, 22_000, 20_000, 19_000, 21_000, 22_000, 24_000, 280_000, 340_000,
            360_000, 25_000,
        ],
    ),
    (
        "wedding",
        [
            280_000, 240_000, 60_000, 40_000, 35_000, 30_000, 35_000, 40_000, 60_000, 80_000,
            260_000, 320_000,
        ],
    ),
    (
        "religious",
        [
            25_000, 22_000, 45_000, 20_000, 30_000, 28_000, 32_000, 280_000, 220_000, 180_000,
            55_000, 30_000,
        ],
    ),
];

/// Names of all built-in patterns.
pub fn pattern_names() -> Vec<&'static str> {
    PATTERN_TABLE.iter().map(|(name, _)| *name).collect()
}

/// Look up a built-in pattern by name.
pub fn pattern_series(name: &str) -> Option<RevenueSeries> {
    PATTERN_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, values)| {
            RevenueSeries::from_months(values.map(Decimal::from))
        })
}

/// Configuration for generating a random seasonal revenue series.
#[derive(Debug, Clone)]
pub struct PatternConfig {
    /// Baseline revenue for an ordinary month.
    pub base_monthly: f64,
    /// Months that receive the peak multiplier.
    pub peak_months: Vec<Month>,
    /// Multiplier applied to peak months.
    pub peak_multiplier: f64,
    /// Relative noise applied to every month (0.15 = ±15%).
    pub noise: f64,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            base_monthly: 40_000.0,
            peak_months: vec![Month::Oct, Month::Nov],
            peak_multiplier: 8.0,
            noise: 0.15,
        }
    }
}

/// Generate a random seasonal revenue series for testing.
pub fn generate_random_series(config: &PatternConfig) -> RevenueSeries {
    let mut rng = rand::thread_rng();
    let mut months = [Decimal::ZERO; 12];

    for month in Month::ALL {
        let multiplier = if config.peak_months.contains(&month) {
            config.peak_multiplier
        } else {
            1.0
        };
        let jitter = 1.0 + rng.gen_range(-config.noise..config.noise);
        let amount = (config.base_monthly * multiplier * jitter).max(0.0);
        months[month.index()] = Decimal::from_f64_retain(amount)
            .unwrap_or(Decimal::from(1_000))
            .round_dp(2);
    }

    RevenueSeries::from_months(months)
}
