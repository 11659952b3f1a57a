//! Milestone model — a named roadmap phase with steps, tools, resources, and
//! derived progress.
//!
//! Progress is derived state: `progress == round(100 * completed / total)`
//! (0 when there are no steps) and `completed == (progress == 100)`.
//! Every step mutation goes through `recompute_progress` to hold that
//! invariant.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::skill::Skill;

/// A single actionable step owned by exactly one milestone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionableStep {
    pub id: Uuid,
    pub description: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl ActionableStep {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            completed: false,
            deadline: None,
        }
    }
}

/// Descriptive only — no behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub id: Uuid,
    pub name: String,
}

impl Tool {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// A learning resource. `is_paid` drives the budget filter during synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_paid: bool,
}

/// User reaction to a generated milestone. Absent = no reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Like,
    Dislike,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Human-readable duration, e.g. `"3 months"`.
    pub timeline: String,
    pub completed: bool,
    /// 0–100, derived from step completion.
    pub progress: u8,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub steps: Vec<ActionableStep>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
}

impl Milestone {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        timeline: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            timeline: timeline.into(),
            completed: false,
            progress: 0,
            skills: Vec::new(),
            steps: Vec::new(),
            tools: Vec::new(),
            resources: Vec::new(),
            feedback: None,
        }
    }

    /// Recomputes `progress` and `completed` from the current step list.
    /// Call after every step mutation.
    pub fn recompute_progress(&mut self) {
        if self.steps.is_empty() {
            self.progress = 0;
        } else {
            let done = self.steps.iter().filter(|s| s.completed).count();
            self.progress =
                ((done as f64 / self.steps.len() as f64) * 100.0).round() as u8;
        }
        self.completed = self.progress == 100;
    }
}
