use thiserror::Error;

/// Failure kinds of the analysis pipeline.
///
/// The aggregation stage fails closed: any of these aborts the whole
/// analysis and no report is produced. Scoring never fails on finite
/// numeric input.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No valid pose frames found across the entire stream.
    #[error("no valid pose frames detected; try a clearer side-view video")]
    NoPoseDetected,

    /// Summary angle outside the accepted tolerance band. Indicates a
    /// measurement failure (e.g. wrong landmark mapping), not an extreme
    /// pose.
    #[error("implausible average knee angle {angle:.1} deg (accepted {min:.0}..{max:.0})")]
    ImplausibleMeasurement { angle: f64, min: f64, max: f64 },

    /// Required field missing or unusable in a direct-angle input.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Upstream source could not be opened or read; propagated unchanged.
    #[error("source unreadable: {0}")]
    SourceUnreadable(String),
}
