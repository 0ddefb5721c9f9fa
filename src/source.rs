//! Input sources for the analysis pipeline.
//!
//! Video decode and pose inference live outside this crate; what arrives
//! here is either a recorded landmark dump (one entry per processed frame,
//! null where no body was detected) or a direct-angle document that bypasses
//! aggregation entirely.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::AnalysisError;
use crate::types::{FrameLandmarks, JointName, Landmark};

/// One frame as the pose provider serializes it: joint name -> landmark.
type RawFrame = HashMap<String, Landmark>;

/// Load a recorded landmark dump.
///
/// Provider joint names are resolved against the required capability set
/// once, here; joints the analysis does not know are dropped. I/O failures
/// map to [`AnalysisError::SourceUnreadable`] and parse failures to
/// [`AnalysisError::MalformedInput`].
pub fn load_recorded_frames(path: &Path) -> Result<Vec<Option<FrameLandmarks>>, AnalysisError> {
    let file = File::open(path)
        .map_err(|e| AnalysisError::SourceUnreadable(format!("{}: {}", path.display(), e)))?;
    let raw: Vec<Option<RawFrame>> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AnalysisError::MalformedInput(format!("{}: {}", path.display(), e)))?;

    Ok(raw
        .into_iter()
        .map(|frame| frame.map(resolve_frame))
        .collect())
}

fn resolve_frame(raw: RawFrame) -> FrameLandmarks {
    let mut frame = FrameLandmarks::new();
    for (name, landmark) in raw {
        if let Some(joint) = JointName::from_provider_name(&name) {
            frame.insert(joint, landmark);
        }
    }
    frame
}

/// Thin a frame sequence: keep every `frame_step`-th frame, then cap the
/// total. Latency bounding belongs to the caller, not the aggregator.
pub fn sample_frames(
    frames: Vec<Option<FrameLandmarks>>,
    frame_step: usize,
    max_frames: Option<usize>,
) -> Vec<Option<FrameLandmarks>> {
    let step = frame_step.max(1);
    let iter = frames.into_iter().step_by(step);
    match max_frames {
        Some(cap) => iter.take(cap).collect(),
        None => iter.collect(),
    }
}

/// Direct-angle input: pre-computed angle data that skips aggregation.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectAngleInput {
    pub avg_knee_angle: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub frames_analyzed: Option<u32>,
}

impl DirectAngleInput {
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let file = File::open(path)
            .map_err(|e| AnalysisError::SourceUnreadable(format!("{}: {}", path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AnalysisError::MalformedInput(format!("{}: {}", path.display(), e)))
    }

    /// Validate the document. The angle field is required and must be a
    /// finite number; confidence, when present, is clipped into [0, 1].
    pub fn validated(self) -> Result<(f64, Option<f64>, Option<u32>), AnalysisError> {
        let angle = self.avg_knee_angle.ok_or_else(|| {
            AnalysisError::MalformedInput("missing required field avg_knee_angle".to_string())
        })?;
        if !angle.is_finite() {
            return Err(AnalysisError::MalformedInput(
                "avg_knee_angle is not a finite number".to_string(),
            ));
        }
        let confidence = self.confidence.map(|c| c.clamp(0.0, 1.0));
        Ok((angle, confidence, self.frames_analyzed))
    }
}
