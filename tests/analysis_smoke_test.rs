// End-to-end checks of the analysis pipeline through the public API:
// landmark frames -> aggregation -> scoring -> report JSON.

use runner_analyzer::source::sample_frames;
use runner_analyzer::types::{FrameLandmarks, JointName, Landmark, PerformanceLevel};
use runner_analyzer::{aggregate, build_report, AnalysisError};

fn lm(x: f32, y: f32, visibility: f32) -> Landmark {
    Landmark {
        x,
        y,
        z: 0.0,
        visibility,
    }
}

/// Both legs near-straight: knee angle close to the 165-degree ideal.
fn good_form_frame(visibility: f32) -> FrameLandmarks {
    let mut frame = FrameLandmarks::new();
    let rad = 165.0f32.to_radians();
    for (hip, knee, ankle, x0) in [
        (JointName::LeftHip, JointName::LeftKnee, JointName::LeftAnkle, 0.4f32),
        (JointName::RightHip, JointName::RightKnee, JointName::RightAnkle, 0.6),
    ] {
        frame.insert(hip, lm(x0, 0.2, visibility));
        frame.insert(knee, lm(x0, 0.5, visibility));
        frame.insert(
            ankle,
            lm(x0 + 0.3 * rad.sin(), 0.5 - 0.3 * rad.cos(), visibility),
        );
    }
    frame
}

#[test]
fn good_video_produces_advanced_report() {
    let frames: Vec<Option<FrameLandmarks>> = (0..30)
        .map(|i| (i % 3 != 0).then(|| good_form_frame(0.92)))
        .collect();

    let summary = aggregate(frames).expect("aggregation should succeed");
    assert_eq!(summary.frames_analyzed, 20);
    assert!((summary.avg_angle - 165.0).abs() < 1.0);

    let report = build_report(
        summary.avg_angle,
        summary.avg_confidence,
        Some(summary.frames_analyzed),
        "uploaded_video",
        true,
    );
    assert!(report.overall_score >= 95.0);
    assert_eq!(report.performance_level, PerformanceLevel::Advanced);
    assert_eq!(report.mistakes, vec!["No major mistakes detected."]);
    assert_eq!(report.frames_analyzed, Some(20));
    assert_eq!(report.keypoints_confidence, Some(0.92));
}

#[test]
fn empty_video_reports_no_pose() {
    let frames: Vec<Option<FrameLandmarks>> = vec![None; 50];
    let err = aggregate(frames).unwrap_err();
    assert!(matches!(err, AnalysisError::NoPoseDetected));
}

#[test]
fn sampling_then_aggregating_matches_frame_count() {
    let frames: Vec<Option<FrameLandmarks>> =
        (0..100).map(|_| Some(good_form_frame(0.9))).collect();
    let sampled = sample_frames(frames, 5, Some(10));
    let summary = aggregate(sampled).unwrap();
    assert_eq!(summary.frames_analyzed, 10);
}

#[test]
fn report_serializes_with_contract_fields_and_nulls() {
    let report = build_report(150.0, None, None, "angle_data", false);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ideal_knee_angle"], 165.0);
    assert_eq!(json["source"], "angle_data");
    assert_eq!(json["ml_used"], false);
    // Absent metadata serializes as explicit nulls, not missing keys.
    assert!(json["frames_analyzed"].is_null());
    assert!(json["keypoints_confidence"].is_null());
    // Absent confidence gates the diagnosis.
    assert_eq!(json["mistakes"][0], "Low pose detection confidence in video.");
    assert_eq!(json["overall_score"], 70.0);
}
