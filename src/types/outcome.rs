use chrono::{DateTime, Utc};
use serde::Serialize;

/// One recommended elective cluster, drawn from the static lookup tables.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub cluster: String,
    pub description: String,
    pub courses: Vec<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Engagement {
    pub total: f32,
    pub threshold: f32,
    pub engaged: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: f32,
}

/// The full result of one submission. Always well formed: a gated
/// submission carries `engaged: false` and either no recommendation
/// (quiz) or the fallback record (traits), never an error.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub generated_at: DateTime<Utc>,
    pub category_scores: Vec<ScoreEntry>,
    pub engagement: Engagement,
    pub top_code: Option<String>,
    pub recommendation: Option<Recommendation>,
}

impl Outcome {
    pub fn conclusive(&self) -> bool {
        self.engagement.engaged
    }
}
