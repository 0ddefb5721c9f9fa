//! Scoring and classification policy.
//!
//! Maps (average knee angle, detection confidence) to a score, a skill
//! tier and diagnostic text. This is the single canonical policy: the
//! confidence gate always wins over the deviation buckets, and deviation
//! is capped so one noisy video cannot crater the score. This stage never
//! fails; a low-confidence measurement degrades to an inconclusive floor
//! score instead of erroring out.

use crate::types::PerformanceLevel;

/// Scoring anchor for good running form, degrees.
pub const IDEAL_KNEE_ANGLE: f64 = 165.0;
/// Maximum deviation from ideal that is allowed to affect the score.
pub const DEVIATION_CAP: f64 = 30.0;
/// Below this confidence the measurement is treated as inconclusive.
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.35;
/// Minimum score granted to an inconclusive measurement.
pub const LOW_CONFIDENCE_FLOOR_SCORE: f64 = 55.0;

/// Output of the scoring stage, before report formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreFragment {
    pub score: f64,
    pub level: PerformanceLevel,
    pub mistakes: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Score an average knee angle. An absent confidence is worst-case 0.0,
/// not ignored.
pub fn score(avg_angle: f64, confidence: Option<f64>) -> ScoreFragment {
    let confidence = confidence.unwrap_or(0.0);

    let diff = (IDEAL_KNEE_ANGLE - avg_angle).abs();
    let diff_for_score = diff.min(DEVIATION_CAP);

    let mut score = 100.0 - 2.0 * diff_for_score;
    let low_confidence = confidence < LOW_CONFIDENCE_THRESHOLD;
    if low_confidence {
        score = score.max(LOW_CONFIDENCE_FLOOR_SCORE);
    }
    let score = score.clamp(0.0, 100.0);

    let level = if score >= 85.0 {
        PerformanceLevel::Advanced
    } else if score >= 60.0 {
        PerformanceLevel::Intermediate
    } else {
        PerformanceLevel::Beginner
    };

    let (mistakes, suggestions) = diagnostics(diff, low_confidence);

    ScoreFragment {
        score,
        level,
        mistakes,
        suggestions,
    }
}

/// Diagnostic text selection. Mutually exclusive buckets; the confidence
/// gate takes priority over the deviation tiers, which use the raw
/// (uncapped) deviation.
fn diagnostics(diff: f64, low_confidence: bool) -> (Vec<String>, Vec<String>) {
    if low_confidence {
        return (
            vec!["Low pose detection confidence in video.".to_string()],
            vec![
                "Record in good lighting with your full body visible.".to_string(),
                "Film from a side view and keep the camera steady.".to_string(),
                "Re-record and upload the video again.".to_string(),
            ],
        );
    }

    if diff <= 2.0 {
        (
            vec!["No major mistakes detected.".to_string()],
            vec![
                "Maintain this running form and consistency.".to_string(),
                "Keep stride smooth and controlled.".to_string(),
            ],
        )
    } else if diff <= 6.0 {
        (
            vec!["Minor knee alignment deviation from ideal.".to_string()],
            vec![
                "Aim closer to 165\u{b0} knee angle during stride.".to_string(),
                "Focus on steady stride mechanics and knee drive.".to_string(),
            ],
        )
    } else {
        (
            vec!["Knee angle deviation is high compared to ideal.".to_string()],
            vec![
                "Practice knee-drive drills and controlled landing technique.".to_string(),
                "Record from side view with good lighting for better accuracy.".to_string(),
                "Reduce overstriding and keep cadence steady.".to_string(),
            ],
        )
    }
}
