//! Running-form analysis from pose landmarks.
//!
//! Turns a stream of per-frame body landmarks (produced by an external
//! pose-detection model) into a single interpretable report: a 0-100
//! score, a skill tier and diagnostic remarks, anchored on the knee angle
//! during stride.
//!
//! The pipeline, leaf first:
//!
//! 1. [`angle::joint_angle`] - three joints to one interior angle.
//! 2. [`aggregate::aggregate`] - noisy per-frame samples to a
//!    [`types::VideoSummary`], failing closed on unusable measurements.
//! 3. [`score::score`] - summary to score/tier/diagnostics; never fails,
//!    degrades through the confidence floor instead.
//! 4. [`report::build`] - rounding and final [`types::Report`] assembly.
//!
//! All stages are pure and stateless; each analysis is independent.

pub mod aggregate;
pub mod angle;
pub mod classifier;
pub mod config;
pub mod error;
pub mod report;
pub mod score;
pub mod source;
pub mod types;


pub use aggregate::aggregate;
pub use angle::joint_angle;
pub use classifier::TierClassifier;
pub use config::AppConfig;
pub use error::AnalysisError;
pub use report::build as build_report;
pub use score::score;
pub use types::{
    FrameLandmarks, JointName, Landmark, PerformanceLevel, Point3D, Report, VideoSummary,
};
