use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Analyze every Nth frame of the dump.
    pub frame_step: usize,
    /// Hard cap on frames fed to the aggregator (None = unbounded).
    pub max_frames: Option<usize>,
    /// Source tag recorded in reports for landmark analysis.
    pub video_source_tag: String,
    /// Source tag recorded in reports for direct-angle input.
    pub angle_source_tag: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Path of the pretrained tier model artifact.
    pub model_path: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frame_step: 5,
            max_frames: Some(2000),
            video_source_tag: "uploaded_video".to_string(),
            angle_source_tag: "angle_data".to_string(),
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_path: "models/tier_model.bin".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl AppConfig {
    const PATH: &'static str = "config.json";

    pub fn load() -> Result<Self> {
        let config = if Path::new(Self::PATH).exists() {
            let content = fs::read_to_string(Self::PATH)?;
            // Missing fields fall back to defaults via #[serde(default)]
            match serde_json::from_str::<AppConfig>(&content) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Error parsing {}: {}. Loading defaults.", Self::PATH, e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        };
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(Self::PATH, content)?;
        Ok(())
    }
}
