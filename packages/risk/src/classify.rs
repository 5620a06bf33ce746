//! Raw-score scaling and tier classification.

use route_risk_models::{ClassifiedRisk, RiskTier};

/// Default raw score treated as the top of the scale.
pub const DEFAULT_MAX_SCORE: f64 = 30.0;

/// Maps a raw score onto a scaled integer score and a discrete tier.
///
/// The scaled score is `floor(raw_score / max_score * 100)` capped at
/// `max_score`. The cap tracks `max_score`, not the 100-point scale, so
/// with the default the output range is `0..=30` and a route at or above
/// the maximum classifies as [`RiskTier::Moderate`]. Downstream consumers
/// and fixtures depend on this cap-then-threshold interaction.
///
/// A non-positive or non-finite `max_score` scales everything to zero;
/// negative raw scores also scale to zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn classify(raw_score: f64, max_score: f64) -> ClassifiedRisk {
    let scaled = if max_score > 0.0 {
        (raw_score / max_score * 100.0).floor().min(max_score)
    } else {
        0.0
    };
    // The saturating float-to-int cast maps negatives to 0.
    let scaled_score = scaled as u16;

    ClassifiedRisk {
        scaled_score,
        tier: RiskTier::from_scaled_score(scaled_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_raw_score_is_low() {
        let classified = classify(0.0, DEFAULT_MAX_SCORE);
        assert_eq!(classified.scaled_score, 0);
        assert_eq!(classified.tier, RiskTier::Low);
    }

    #[test]
    fn max_raw_score_clamps_to_max_score() {
        // raw/max * 100 = 100, then the clamp pulls it down to 30, which
        // lands in the 20..50 Moderate band.
        let classified = classify(30.0, 30.0);
        assert_eq!(classified.scaled_score, 30);
        assert_eq!(classified.tier, RiskTier::Moderate);
    }

    #[test]
    fn above_max_raw_score_still_clamps() {
        let classified = classify(90.0, 30.0);
        assert_eq!(classified.scaled_score, 30);
        assert_eq!(classified.tier, RiskTier::Moderate);
    }

    #[test]
    fn small_scores_floor_before_thresholding() {
        // 2.6 / 30 * 100 = 8.67 -> floor 8 -> Low.
        let classified = classify(2.6, DEFAULT_MAX_SCORE);
        assert_eq!(classified.scaled_score, 8);
        assert_eq!(classified.tier, RiskTier::Low);
    }

    #[test]
    fn moderate_band_lower_edge() {
        // 6.0 / 30 * 100 = 20 -> Moderate.
        let classified = classify(6.0, DEFAULT_MAX_SCORE);
        assert_eq!(classified.scaled_score, 20);
        assert_eq!(classified.tier, RiskTier::Moderate);
    }

    #[test]
    fn larger_max_score_reaches_higher_tiers() {
        // With a 200-point scale the cap no longer binds at 100:
        // 160/200*100 = 80 -> High.
        let classified = classify(160.0, 200.0);
        assert_eq!(classified.scaled_score, 80);
        assert_eq!(classified.tier, RiskTier::High);
    }

    #[test]
    fn non_positive_max_score_scales_to_zero() {
        let classified = classify(1.0, -5.0);
        assert_eq!(classified.scaled_score, 0);
        assert_eq!(classified.tier, RiskTier::Low);

        let classified = classify(1.0, 0.0);
        assert_eq!(classified.scaled_score, 0);
        assert_eq!(classified.tier, RiskTier::Low);
    }

    #[test]
    fn nan_max_score_scales_to_zero() {
        let classified = classify(1.0, f64::NAN);
        assert_eq!(classified.scaled_score, 0);
        assert_eq!(classified.tier, RiskTier::Low);
    }

    #[test]
    fn negative_raw_score_scales_to_zero() {
        let classified = classify(-3.0, DEFAULT_MAX_SCORE);
        assert_eq!(classified.scaled_score, 0);
        assert_eq!(classified.tier, RiskTier::Low);
    }

    #[test]
    fn cap_holds_for_max_scores_above_the_byte_range() {
        // 1000/300*100 = 333.3 -> floor 333 -> capped at 300 -> High.
        let classified = classify(1000.0, 300.0);
        assert_eq!(classified.scaled_score, 300);
        assert_eq!(classified.tier, RiskTier::High);
    }
}
