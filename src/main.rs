use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use colored::Colorize;

use runner_analyzer::config::AppConfig;
use runner_analyzer::source::{load_recorded_frames, sample_frames, DirectAngleInput};
use runner_analyzer::types::{PerformanceLevel, Report};
use runner_analyzer::{aggregate, build_report, TierClassifier};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Recorded landmark dump (JSON) to analyze
    #[arg(long)]
    pub landmarks: Option<PathBuf>,

    /// Direct-angle input (JSON with avg_knee_angle and optional
    /// confidence / frames_analyzed), bypassing aggregation
    #[arg(long)]
    pub angles: Option<PathBuf>,

    /// Override the source tag recorded in the report
    #[arg(long)]
    pub source: Option<String>,

    /// Also classify the tier with the pretrained artifact
    #[arg(long, default_value_t = false)]
    pub classify: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load()?;

    // Fail fast on a missing/incompatible artifact before any analysis runs.
    let classifier = if args.classify {
        Some(TierClassifier::load(std::path::Path::new(
            &config.classifier.model_path,
        ))?)
    } else {
        None
    };

    let report = match (&args.landmarks, &args.angles) {
        (Some(path), None) => {
            let frames = load_recorded_frames(path)?;
            let frames = sample_frames(
                frames,
                config.analysis.frame_step,
                config.analysis.max_frames,
            );
            let summary = aggregate(frames)?;
            let source = args
                .source
                .as_deref()
                .unwrap_or(&config.analysis.video_source_tag);
            build_report(
                summary.avg_angle,
                summary.avg_confidence,
                Some(summary.frames_analyzed),
                source,
                true,
            )
        }
        (None, Some(path)) => {
            let (angle, confidence, frames_analyzed) =
                DirectAngleInput::load(path)?.validated()?;
            let source = args
                .source
                .as_deref()
                .unwrap_or(&config.analysis.angle_source_tag);
            build_report(angle, confidence, frames_analyzed, source, false)
        }
        _ => bail!("Provide exactly one of --landmarks or --angles"),
    };

    print_summary(&report);

    if let Some(classifier) = &classifier {
        let tier = classifier.predict(report.average_knee_angle)?;
        println!(
            "Classifier tier: {}",
            colorize_level(tier.as_str(), tier)
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_summary(report: &Report) {
    println!(
        "Score: {}  Level: {}  Knee angle: {:.1} (ideal {:.1})",
        format!("{:.1}", report.overall_score).as_str().bold(),
        colorize_level(report.performance_level.as_str(), report.performance_level),
        report.average_knee_angle,
        report.ideal_knee_angle
    );
    if let Some(frames) = report.frames_analyzed {
        println!("Frames analyzed: {}", frames);
    }
    if let Some(confidence) = report.keypoints_confidence {
        println!("Keypoint confidence: {:.3}", confidence);
    }
}

fn colorize_level(text: &str, level: PerformanceLevel) -> colored::ColoredString {
    match level {
        PerformanceLevel::Advanced => text.green(),
        PerformanceLevel::Intermediate => text.yellow(),
        PerformanceLevel::Beginner => text.red(),
    }
}
