//! Report assembly and output formatting.
//!
//! No decision logic beyond rounding: scores and angles to one decimal,
//! keypoint confidence to three, metadata passed through verbatim.

use crate::score::{self, IDEAL_KNEE_ANGLE};
use crate::types::Report;

/// Round half away from zero at a fixed number of decimal places. Stable
/// under re-rounding at the same precision.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Assemble the user-facing report from a measured average knee angle.
pub fn build(
    avg_angle: f64,
    confidence: Option<f64>,
    frames_analyzed: Option<u32>,
    source: &str,
    ml_used: bool,
) -> Report {
    let fragment = score::score(avg_angle, confidence);
    let diff = (IDEAL_KNEE_ANGLE - avg_angle).abs();

    Report {
        overall_score: round_to(fragment.score, 1),
        average_knee_angle: round_to(avg_angle, 1),
        difference_from_ideal: round_to(diff, 1),
        ideal_knee_angle: IDEAL_KNEE_ANGLE,
        performance_level: fragment.level,
        mistakes: fragment.mistakes,
        suggestions: fragment.suggestions,
        ml_used,
        source: source.to_string(),
        frames_analyzed,
        keypoints_confidence: confidence.map(|c| round_to(c, 3)),
    }
}
