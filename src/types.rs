use serde::{Deserialize, Serialize};

/// Represents a single 3D point (normalized coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// A detected anatomical keypoint: position plus provider visibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    /// Detection confidence for this landmark, in [0, 1].
    pub visibility: f32,
}

impl Landmark {
    pub fn position(&self) -> Point3D {
        Point3D {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// Joints the knee-angle analysis requires. Resolved by name against the
/// pose provider's schema, never by raw landmark index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JointName {
    LeftHip,
    LeftKnee,
    LeftAnkle,
    RightHip,
    RightKnee,
    RightAnkle,
}

impl JointName {
    /// All joints used for the knee-angle confidence estimate.
    pub const ALL: [JointName; 6] = [
        JointName::LeftHip,
        JointName::LeftKnee,
        JointName::LeftAnkle,
        JointName::RightHip,
        JointName::RightKnee,
        JointName::RightAnkle,
    ];

    /// Resolve a provider joint name. Unknown joints map to `None` and are
    /// ignored by the analysis.
    pub fn from_provider_name(name: &str) -> Option<Self> {
        match name {
            "left_hip" => Some(JointName::LeftHip),
            "left_knee" => Some(JointName::LeftKnee),
            "left_ankle" => Some(JointName::LeftAnkle),
            "right_hip" => Some(JointName::RightHip),
            "right_knee" => Some(JointName::RightKnee),
            "right_ankle" => Some(JointName::RightAnkle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JointName::LeftHip => "left_hip",
            JointName::LeftKnee => "left_knee",
            JointName::LeftAnkle => "left_ankle",
            JointName::RightHip => "right_hip",
            JointName::RightKnee => "right_knee",
            JointName::RightAnkle => "right_ankle",
        }
    }

    fn index(&self) -> usize {
        match self {
            JointName::LeftHip => 0,
            JointName::LeftKnee => 1,
            JointName::LeftAnkle => 2,
            JointName::RightHip => 3,
            JointName::RightKnee => 4,
            JointName::RightAnkle => 5,
        }
    }
}

/// The (hip, knee, ankle) triple for one body side.
#[derive(Debug, Clone, Copy)]
pub struct JointTriple {
    pub hip: JointName,
    pub knee: JointName,
    pub ankle: JointName,
}

pub const LEFT_LEG: JointTriple = JointTriple {
    hip: JointName::LeftHip,
    knee: JointName::LeftKnee,
    ankle: JointName::LeftAnkle,
};

pub const RIGHT_LEG: JointTriple = JointTriple {
    hip: JointName::RightHip,
    knee: JointName::RightKnee,
    ankle: JointName::RightAnkle,
};

/// The landmarks detected in one frame, restricted to the joints the
/// analysis knows about.
#[derive(Debug, Clone, Default)]
pub struct FrameLandmarks {
    joints: [Option<Landmark>; 6],
}

impl FrameLandmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, joint: JointName, landmark: Landmark) {
        self.joints[joint.index()] = Some(landmark);
    }

    pub fn get(&self, joint: JointName) -> Option<&Landmark> {
        self.joints[joint.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.iter().all(|j| j.is_none())
    }
}

/// Video-level reduction of the per-frame angle samples.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSummary {
    /// Mean knee angle over valid frames, degrees.
    pub avg_angle: f64,
    /// Count of frames that produced at least one valid side angle.
    pub frames_analyzed: u32,
    /// Mean per-frame confidence, absent if no frame yielded visibility data.
    pub avg_confidence: Option<f64>,
}

/// Skill tier reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Beginner => "beginner",
            PerformanceLevel::Intermediate => "intermediate",
            PerformanceLevel::Advanced => "advanced",
        }
    }

    /// Map a classifier label index to a tier (order matches training).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            2 => PerformanceLevel::Advanced,
            1 => PerformanceLevel::Intermediate,
            _ => PerformanceLevel::Beginner,
        }
    }
}

/// The user-facing report. Field names and rounding are a compatibility
/// contract with report consumers; do not rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub overall_score: f64,
    pub average_knee_angle: f64,
    pub difference_from_ideal: f64,
    pub ideal_knee_angle: f64,
    pub performance_level: PerformanceLevel,
    pub mistakes: Vec<String>,
    pub suggestions: Vec<String>,
    pub ml_used: bool,
    pub source: String,
    pub frames_analyzed: Option<u32>,
    pub keypoints_confidence: Option<f64>,
}
