use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ModuleKind {
    Video,
    Pdf,
    Quiz,
}

/// A training-hub module. `completed` and `locked` are part of the fixture
/// data, not per-user progress — there is no user progress store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrainingModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub kind: ModuleKind,
    pub completed: bool,
    pub locked: bool,
    pub badge: Option<String>,
    pub video_url: Option<String>,
    pub resources: Vec<String>,
}
