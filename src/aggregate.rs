//! Per-video reduction of noisy per-frame landmark samples.
//!
//! Consumes a sequence of optional per-frame landmark sets (absent = no
//! body detected in that frame) and reduces it to a [`VideoSummary`].
//! Holds only running sums and counts, never the frame history.

use crate::angle::joint_angle;
use crate::error::AnalysisError;
use crate::types::{FrameLandmarks, JointName, JointTriple, VideoSummary, LEFT_LEG, RIGHT_LEG};

/// Tolerance band for the summary angle. An average outside this band is a
/// systematic misdetection, not a valid extreme pose.
pub const MIN_PLAUSIBLE_ANGLE: f64 = 20.0;
pub const MAX_PLAUSIBLE_ANGLE: f64 = 200.0;

/// Knee angle for one body side, if all three joints are present and the
/// angle is defined.
fn side_angle(frame: &FrameLandmarks, triple: JointTriple) -> Option<f32> {
    let hip = frame.get(triple.hip)?;
    let knee = frame.get(triple.knee)?;
    let ankle = frame.get(triple.ankle)?;
    let angle = joint_angle(hip.position(), knee.position(), ankle.position());
    angle.is_finite().then_some(angle)
}

/// Reduce a frame sequence to a video-level summary.
///
/// Per frame: the angle is the mean of the valid side angles (left and/or
/// right); a frame with no valid side is skipped and does not count toward
/// `frames_analyzed`. Frame confidence is the mean visibility over whatever
/// of the six nominal joints are present, even for joints whose side angle
/// was discarded.
///
/// Fails with [`AnalysisError::NoPoseDetected`] when no frame is valid, and
/// with [`AnalysisError::ImplausibleMeasurement`] when the average angle
/// falls outside the accepted tolerance band.
pub fn aggregate<I>(frames: I) -> Result<VideoSummary, AnalysisError>
where
    I: IntoIterator<Item = Option<FrameLandmarks>>,
{
    let mut angle_sum = 0.0f64;
    let mut frame_count = 0u32;
    let mut conf_sum = 0.0f64;
    let mut conf_count = 0u32;

    for frame in frames {
        let Some(frame) = frame else {
            continue;
        };

        let mut side_sum = 0.0f64;
        let mut side_count = 0u32;
        for triple in [LEFT_LEG, RIGHT_LEG] {
            if let Some(angle) = side_angle(&frame, triple) {
                side_sum += f64::from(angle);
                side_count += 1;
            }
        }
        if side_count == 0 {
            continue;
        }

        angle_sum += side_sum / f64::from(side_count);
        frame_count += 1;

        let mut vis_sum = 0.0f64;
        let mut vis_count = 0u32;
        for joint in JointName::ALL {
            if let Some(landmark) = frame.get(joint) {
                vis_sum += f64::from(landmark.visibility);
                vis_count += 1;
            }
        }
        if vis_count > 0 {
            conf_sum += vis_sum / f64::from(vis_count);
            conf_count += 1;
        }
    }

    if frame_count == 0 {
        return Err(AnalysisError::NoPoseDetected);
    }

    let avg_angle = angle_sum / f64::from(frame_count);
    if !(MIN_PLAUSIBLE_ANGLE..=MAX_PLAUSIBLE_ANGLE).contains(&avg_angle) {
        return Err(AnalysisError::ImplausibleMeasurement {
            angle: avg_angle,
            min: MIN_PLAUSIBLE_ANGLE,
            max: MAX_PLAUSIBLE_ANGLE,
        });
    }

    let avg_confidence = (conf_count > 0).then(|| conf_sum / f64::from(conf_count));

    Ok(VideoSummary {
        avg_angle,
        frames_analyzed: frame_count,
        avg_confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Landmark;

    fn lm(x: f32, y: f32, visibility: f32) -> Landmark {
        Landmark {
            x,
            y,
            z: 0.0,
            visibility,
        }
    }

    /// A frame with both legs laid out to form the given knee angle on each
    /// side. 180 = straight down, 90 = right angle at the knee.
    fn frame_with_angle(angle_deg: f32, visibility: f32) -> FrameLandmarks {
        let mut frame = FrameLandmarks::new();
        let rad = angle_deg.to_radians();
        for (hip, knee, ankle, x0) in [
            (JointName::LeftHip, JointName::LeftKnee, JointName::LeftAnkle, 0.3),
            (JointName::RightHip, JointName::RightKnee, JointName::RightAnkle, 0.6),
        ] {
            // hip above the knee, ankle rotated by the interior angle
            frame.insert(hip, lm(x0, 0.0, visibility));
            frame.insert(knee, lm(x0, 0.5, visibility));
            frame.insert(
                ankle,
                lm(x0 + 0.5 * rad.sin(), 0.5 - 0.5 * rad.cos(), visibility),
            );
        }
        frame
    }

    #[test]
    fn all_absent_frames_is_no_pose() {
        let frames: Vec<Option<FrameLandmarks>> = vec![None, None, None];
        let err = aggregate(frames).unwrap_err();
        assert!(matches!(err, AnalysisError::NoPoseDetected));
    }

    #[test]
    fn empty_sequence_is_no_pose() {
        let err = aggregate(Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::NoPoseDetected));
    }

    #[test]
    fn averages_over_valid_frames_only() {
        let frames = vec![
            Some(frame_with_angle(160.0, 0.9)),
            None,
            Some(frame_with_angle(170.0, 0.7)),
            Some(FrameLandmarks::new()), // no joints at all -> skipped
        ];
        let summary = aggregate(frames).unwrap();
        assert_eq!(summary.frames_analyzed, 2);
        assert!((summary.avg_angle - 165.0).abs() < 0.1);
        let conf = summary.avg_confidence.unwrap();
        assert!((conf - 0.8).abs() < 1e-6);
    }

    #[test]
    fn avg_angle_invariant_under_reordering() {
        let a = vec![
            Some(frame_with_angle(150.0, 0.9)),
            Some(frame_with_angle(165.0, 0.8)),
            Some(frame_with_angle(178.0, 0.7)),
        ];
        let mut b = a.clone();
        b.reverse();
        let sa = aggregate(a).unwrap();
        let sb = aggregate(b).unwrap();
        assert!((sa.avg_angle - sb.avg_angle).abs() < 1e-9);
        assert_eq!(sa.frames_analyzed, sb.frames_analyzed);
    }

    #[test]
    fn single_side_is_enough() {
        let mut frame = FrameLandmarks::new();
        frame.insert(JointName::LeftHip, lm(0.3, 0.0, 0.9));
        frame.insert(JointName::LeftKnee, lm(0.3, 0.5, 0.9));
        frame.insert(JointName::LeftAnkle, lm(0.3, 1.0, 0.9));
        let summary = aggregate(vec![Some(frame)]).unwrap();
        assert_eq!(summary.frames_analyzed, 1);
        assert!((summary.avg_angle - 180.0).abs() < 0.1);
    }

    #[test]
    fn degenerate_side_is_discarded_but_visibility_still_counts() {
        let mut frame = FrameLandmarks::new();
        // Left leg valid and straight.
        frame.insert(JointName::LeftHip, lm(0.3, 0.0, 1.0));
        frame.insert(JointName::LeftKnee, lm(0.3, 0.5, 1.0));
        frame.insert(JointName::LeftAnkle, lm(0.3, 1.0, 1.0));
        // Right hip collapsed onto the knee: angle undefined, visibility 0.4.
        frame.insert(JointName::RightHip, lm(0.6, 0.5, 0.4));
        frame.insert(JointName::RightKnee, lm(0.6, 0.5, 0.4));
        frame.insert(JointName::RightAnkle, lm(0.6, 1.0, 0.4));

        let summary = aggregate(vec![Some(frame)]).unwrap();
        assert_eq!(summary.frames_analyzed, 1);
        assert!((summary.avg_angle - 180.0).abs() < 0.1);
        // Confidence averages all six visibilities: (3*1.0 + 3*0.4) / 6
        let conf = summary.avg_confidence.unwrap();
        assert!((conf - 0.7).abs() < 1e-6);
    }

    #[test]
    fn implausibly_low_average_fails() {
        let frames = vec![Some(frame_with_angle(5.0, 0.9))];
        let err = aggregate(frames).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::ImplausibleMeasurement { .. }
        ));
    }

    #[test]
    fn plausible_band_edges_pass() {
        let summary = aggregate(vec![Some(frame_with_angle(20.0, 0.9))]).unwrap();
        assert!((summary.avg_angle - 20.0).abs() < 0.1);
        let summary = aggregate(vec![Some(frame_with_angle(180.0, 0.9))]).unwrap();
        assert!((summary.avg_angle - 180.0).abs() < 0.1);
    }
}
