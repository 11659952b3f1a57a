//! Saved roadmap snapshots and the in-progress roadmap blob.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::milestone::Milestone;

/// A persisted roadmap snapshot. One entry per unique title — re-saving with
/// the same title overwrites the existing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRoadmap {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    /// Unweighted average of milestone progress, rounded.
    pub progress: u8,
    pub milestones: Vec<Milestone>,
    pub desired_role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<String>,
}

/// The `current_roadmap` storage blob — the in-progress roadmap as the wizard
/// left it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoadmapSnapshot {
    pub desired_role: String,
    pub milestones: Vec<Milestone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_commitment: Option<String>,
}

/// Rounded unweighted mean of milestone progress values. 0 for no milestones.
pub fn average_progress(milestones: &[Milestone]) -> u8 {
    if milestones.is_empty() {
        return 0;
    }
    let sum: u32 = milestones.iter().map(|m| m.progress as u32).sum();
    (sum as f64 / milestones.len() as f64).round() as u8
}
