use std::error::Error;
use std::path::Path;

use runner_analyzer::angle::joint_angle;
use runner_analyzer::source::load_recorded_frames;
use runner_analyzer::types::{JointName, JointTriple, LEFT_LEG, RIGHT_LEG};

/// Prints per-frame knee angles and joint visibility for a recorded
/// landmark dump. Debugging aid for capture quality issues.
fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: inspect_landmarks <landmark_dump_json>");
        return Ok(());
    }

    let frames = load_recorded_frames(Path::new(&args[1]))?;
    println!("Frames in dump: {}", frames.len());
    println!(
        "{:<6} | {:>10} | {:>10} | {:>10}",
        "Frame", "Left", "Right", "Confidence"
    );
    println!("{}", "-".repeat(46));

    let mut detected = 0usize;
    for (idx, frame) in frames.iter().enumerate() {
        let Some(frame) = frame else {
            println!("{:<6} | {:>10} | {:>10} | {:>10}", idx, "-", "-", "-");
            continue;
        };
        detected += 1;

        let side = |triple: JointTriple| -> String {
            let (Some(hip), Some(knee), Some(ankle)) = (
                frame.get(triple.hip),
                frame.get(triple.knee),
                frame.get(triple.ankle),
            ) else {
                return "missing".to_string();
            };
            let angle = joint_angle(hip.position(), knee.position(), ankle.position());
            if angle.is_nan() {
                "undefined".to_string()
            } else {
                format!("{:.1}", angle)
            }
        };

        let mut vis_sum = 0.0f32;
        let mut vis_count = 0u32;
        for joint in JointName::ALL {
            if let Some(landmark) = frame.get(joint) {
                vis_sum += landmark.visibility;
                vis_count += 1;
            }
        }
        let confidence = if vis_count > 0 {
            format!("{:.3}", vis_sum / vis_count as f32)
        } else {
            "-".to_string()
        };

        println!(
            "{:<6} | {:>10} | {:>10} | {:>10}",
            idx,
            side(LEFT_LEG),
            side(RIGHT_LEG),
            confidence
        );
    }

    println!("{}", "-".repeat(46));
    println!("Frames with a detected body: {}/{}", detected, frames.len());
    Ok(())
}
