use crate::scoring::rate_tier::RateTierPolicy;
use crate::scoring::season_score::ScoreBreakdown;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight of the season total in a blended score.
const SEASON_WEIGHT: Decimal = dec!(0.70);

/// Weight of the normalized bureau score in a blended score.
const BUREAU_WEIGHT: Decimal = dec!(0.30);

/// How the composite total of a [`BlendedScore`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMethod {
    /// No usable bureau score; the season total stands alone.
    SeasonOnly,
    /// 70% season total, 30% normalized bureau score.
    Blended,
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMethod::SeasonOnly => write!(f, "season-only"),
            ScoringMethod::Blended => write!(f, "blended"),
        }
    }
}

/// Categorical band for a raw bureau score on the conventional
/// 300-900 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BureauBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl BureauBand {
    /// Band for a raw (non-normalized) bureau score.
    pub fn from_raw(score: u32) -> BureauBand {
        if score >= 750 {
            BureauBand::Excellent
        } else if score >= 700 {
            BureauBand::Good
        } else if score >= 650 {
            BureauBand::Fair
        } else {
            BureauBand::Poor
        }
    }
}

impl fmt::Display for BureauBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BureauBand::Excellent => write!(f, "Excellent"),
            BureauBand::Good => write!(f, "Good"),
            BureauBand::Fair => write!(f, "Fair"),
            BureauBand::Poor => write!(f, "Poor"),
        }
    }
}

/// A season score optionally blended with an external bureau score.
///
/// Total, rate, and eligibility reflect the blended number. The
/// revenue-derived fields of the underlying breakdown (sub-scores,
/// peak months, credit limits, grade) pass through unchanged, since
/// they describe the revenue pattern rather than the blended
/// creditworthiness figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendedScore {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub scoring_method: ScoringMethod,
    pub bureau_provided: bool,
    pub bureau_band: Option<BureauBand>,
}

impl BlendedScore {
    /// The blended composite total.
    pub fn total(&self) -> u32 {
        self.breakdown.total
    }

    /// Rate tier for the blended total.
    pub fn rate(&self) -> Option<Decimal> {
        self.breakdown.rate
    }

    /// Eligibility under the blended total.
    pub fn is_eligible(&self) -> bool {
        self.breakdown.eligible
    }
}

/// Blends a season score with an optional external bureau score.
pub struct BureauBlender;

impl BureauBlender {
    /// Blend a season score with an optional raw bureau score.
    ///
    /// A missing or zero bureau score leaves the total untouched
    /// (`season-only`). Otherwise the bureau score is normalized from
    /// the 300-900 scale onto 0-100, the totals are combined 70/30,
    /// and rate plus eligibility are recomputed from the blended
    /// total via [`RateTierPolicy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use credit_engine::core::revenue::RevenueSeries;
    /// use credit_engine::scoring::bureau::{BureauBlender, ScoringMethod};
    /// use credit_engine::scoring::season_score::ScoreCalculator;
    /// use rust_decimal_macros::dec;
    ///
    /// let series = RevenueSeries::new(vec![dec!(60_000); 12]).unwrap();
    /// let season = ScoreCalculator::score(&series).unwrap();
    ///
    /// let alone = BureauBlender::blend(&season, None);
    /// assert_eq!(alone.total(), season.total);
    /// assert_eq!(alone.scoring_method, ScoringMethod::SeasonOnly);
    ///
    /// let blended = BureauBlender::blend(&season, Some(780));
    /// assert_eq!(blended.scoring_method, ScoringMethod::Blended);
    /// ```
    pub fn blend(season: &ScoreBreakdown, bureau_score: Option<u32>) -> BlendedScore {
        match bureau_score {
            Some(raw) if raw > 0 => {
                let normalized = ((Decimal::from(raw) - dec!(300)) / dec!(6))
                    .clamp(Decimal::ZERO, dec!(100));
                let blended_total = (Decimal::from(season.total) * SEASON_WEIGHT
                    + normalized * BUREAU_WEIGHT)
                    .round()
                    .to_u32()
                    .unwrap_or(0);

                debug!(
                    "blend: season={} bureau={} norm={} blended={}",
                    season.total, raw, normalized, blended_total
                );

                let mut breakdown = season.clone();
                breakdown.total = blended_total;
                breakdown.rate = RateTierPolicy::rate_for(blended_total);
                breakdown.eligible = RateTierPolicy::is_eligible(blended_total);

                BlendedScore {
                    breakdown,
                    scoring_method: ScoringMethod::Blended,
                    bureau_provided: true,
                    bureau_band: Some(BureauBand::from_raw(raw)),
                }
            }
            _ => BlendedScore {
                breakdown: season.clone(),
                scoring_method: ScoringMethod::SeasonOnly,
                bureau_provided: false,
                bureau_band: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::revenue::RevenueSeries;
    use crate::scoring::rate_tier::Grade;
    use crate::scoring::season_score::ScoreCalculator;

    fn season_with_total(target: u32) -> ScoreBreakdown {
        // Build any real breakdown, then pin the total for the cases
        // that need an exact composite.
        let series = RevenueSeries::new(vec![dec!(60_000); 12]).unwrap();
        let mut score = ScoreCalculator::score(&series).unwrap();
        score.total = target;
        score.rate = RateTierPolicy::rate_for(target);
        score.eligible = RateTierPolicy::is_eligible(target);
        score
    }

    #[test]
    fn test_no_bureau_is_identity_on_totals() {
        let season = season_with_total(69);
        let blended = BureauBlender::blend(&season, None);
        assert_eq!(blended.total(), 69);
        assert_eq!(blended.scoring_method, ScoringMethod::SeasonOnly);
        assert!(!blended.bureau_provided);
        assert_eq!(blended.bureau_band, None);
        assert_eq!(blended.breakdown, season);
    }

    #[test]
    fn test_zero_bureau_treated_as_absent() {
        let season = season_with_total(69);
        let blended = BureauBlender::blend(&season, Some(0));
        assert_eq!(blended.scoring_method, ScoringMethod::SeasonOnly);
        assert!(!blended.bureau_provided);
    }

    #[test]
    fn test_blend_680_with_total_60() {
        // norm = (680-300)/6 = 63.33…; blended = round(0.7*60 + 0.3*63.33) = 61.
        let season = season_with_total(60);
        let blended = BureauBlender::blend(&season, Some(680));
        assert_eq!(blended.total(), 61);
        assert_eq!(blended.scoring_method, ScoringMethod::Blended);
        assert!(blended.bureau_provided);
        assert_eq!(blended.bureau_band, Some(BureauBand::Fair));
        assert_eq!(blended.rate(), Some(dec!(16.0)));
        assert!(blended.is_eligible());
    }

    #[test]
    fn test_strong_bureau_lifts_tier() {
        // Season 62 alone is tier C; a 900 bureau (norm 100) lifts the
        // blend to round(43.4 + 30) = 73, tier B.
        let season = season_with_total(62);
        let blended = BureauBlender::blend(&season, Some(900));
        assert_eq!(blended.total(), 73);
        assert_eq!(blended.rate(), Some(dec!(14.0)));
    }

    #[test]
    fn test_weak_bureau_can_remove_eligibility() {
        // Season 52; a 350 bureau (norm 8.33) drags the blend to
        // round(36.4 + 2.5) = 39, below the gate.
        let season = season_with_total(52);
        let blended = BureauBlender::blend(&season, Some(350));
        assert_eq!(blended.total(), 39);
        assert!(!blended.is_eligible());
        assert_eq!(blended.rate(), None);
        assert_eq!(blended.bureau_band, Some(BureauBand::Poor));
    }

    #[test]
    fn test_bureau_below_300_clamps_to_zero_norm() {
        let season = season_with_total(80);
        let blended = BureauBlender::blend(&season, Some(250));
        // norm clamps to 0 → blended = round(0.7*80) = 56.
        assert_eq!(blended.total(), 56);
    }

    #[test]
    fn test_revenue_fields_pass_through() {
        let series = RevenueSeries::new(vec![dec!(60_000); 12]).unwrap();
        let season = ScoreCalculator::score(&series).unwrap();
        let blended = BureauBlender::blend(&season, Some(780));

        assert_eq!(blended.breakdown.consistency, season.consistency);
        assert_eq!(blended.breakdown.growth, season.growth);
        assert_eq!(blended.breakdown.capacity, season.capacity);
        assert_eq!(blended.breakdown.reliability, season.reliability);
        assert_eq!(blended.breakdown.peak_months, season.peak_months);
        assert_eq!(blended.breakdown.max_loan, season.max_loan);
        assert_eq!(blended.breakdown.min_loan, season.min_loan);
        assert_eq!(blended.breakdown.default_risk, season.default_risk);
        // Grade describes the seasonal pattern and is not re-derived.
        assert_eq!(blended.breakdown.grade, season.grade);
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(BureauBand::from_raw(750), BureauBand::Excellent);
        assert_eq!(BureauBand::from_raw(749), BureauBand::Good);
        assert_eq!(BureauBand::from_raw(700), BureauBand::Good);
        assert_eq!(BureauBand::from_raw(699), BureauBand::Fair);
        assert_eq!(BureauBand::from_raw(650), BureauBand::Fair);
        assert_eq!(BureauBand::from_raw(649), BureauBand::Poor);
    }

    #[test]
    fn test_grade_not_updated_by_blend() {
        let season = season_with_total(60);
        let original_grade = season.grade;
        let blended = BureauBlender::blend(&season, Some(900));
        assert_eq!(blended.breakdown.grade, original_grade);
        assert_eq!(blended.breakdown.grade, Grade::B);
    }
}
