pub mod config;
pub mod controller;
pub mod error;
pub mod output;
pub mod summarize;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use controller::{Controller, ControllerState};
pub use error::RequestError;
pub use summarize::SummaryClient;

/// Summary returned by the remote service for a single video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub video_id: String,
    pub title: String,
    pub channel: String,
    pub summary: String,
}

/// Where a submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionState {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "idle"),
            SubmissionState::Loading => write!(f, "loading"),
            SubmissionState::Succeeded => write!(f, "succeeded"),
            SubmissionState::Failed => write!(f, "failed"),
        }
    }
}

// watch?v=ID, youtu.be/ID, /embed/ID
static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:v=|youtu\.be/|/embed/)([a-zA-Z0-9_-]{11})").expect("video id pattern"));

/// Extract the 11-character video ID from a YouTube URL
pub fn extract_video_id(input: &str) -> Option<String> {
    VIDEO_ID_RE.captures(input).map(|caps| caps[1].to_string())
}

/// Embeddable player URL for a video ID
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}")
}
