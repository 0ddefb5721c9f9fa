//! Pretrained tier classifier artifact.
//!
//! An alternative, simpler path to the skill tier: a pretrained model
//! mapping the average knee angle scalar straight to a coarse tier label.
//! It carries none of the scoring policy's diagnostic text and must not be
//! conflated with it.
//!
//! The model is an explicitly owned component: loaded once from disk,
//! failing fast when the artifact is missing or incompatible, and injected
//! into whoever needs it rather than living in process-wide state.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::DecisionTreeClassifier;

use crate::types::PerformanceLevel;

pub type TierModel = DecisionTreeClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>;

pub struct TierClassifier {
    model: TierModel,
}

impl TierClassifier {
    /// Wrap an already-built model. Used by tests and by callers that
    /// train in-process.
    pub fn new(model: TierModel) -> Self {
        Self { model }
    }

    /// Load the artifact from disk, failing fast when it is missing or
    /// cannot be deserialized.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read tier model: {}", path.display()))?;
        let model: TierModel = bincode::deserialize(&bytes)
            .with_context(|| format!("Incompatible tier model artifact: {}", path.display()))?;
        Ok(Self { model })
    }

    /// Classify an average knee angle into a coarse tier.
    pub fn predict(&self, avg_angle: f64) -> Result<PerformanceLevel> {
        let features = DenseMatrix::from_2d_array(&[&[avg_angle]]);
        let labels = self
            .model
            .predict(&features)
            .map_err(|e| anyhow!("Tier prediction failed: {}", e))?;
        let label = labels
            .first()
            .copied()
            .ok_or_else(|| anyhow!("Tier model returned no label"))?;
        Ok(PerformanceLevel::from_index(label as usize))
    }
}
