//! Preference store — the single source of truth for wizard fields and the
//! active roadmap.
//!
//! All mutations are synchronous; the handlers serialize access through an
//! `RwLock` in `AppState`. Persistence goes through the injected
//! `RoadmapStorage` port; write failures are logged and never surfaced
//! (spec'd local-storage behavior).

pub mod handlers;
pub mod storage;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::milestone::{ActionableStep, Feedback, Milestone};
use crate::models::roadmap::{average_progress, RoadmapSnapshot, SavedRoadmap};
use crate::models::skill::{dedup_by_name, Skill};
use crate::store::storage::{
    load_current_snapshot, load_saved_roadmaps, RoadmapStorage, CURRENT_ROADMAP_KEY, ROADMAPS_KEY,
};

/// Partial update of the wizard's preference fields. Absent fields are left
/// untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferenceUpdate {
    pub current_role: Option<String>,
    pub desired_role: Option<String>,
    pub experience_level: Option<String>,
    pub budget: Option<String>,
    pub company_size: Option<String>,
    pub time_commitment: Option<String>,
    pub selected_skills: Option<Vec<Skill>>,
}

/// Fields of a step mutation. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepUpdate {
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub deadline: Option<NaiveDate>,
}

pub struct PreferenceStore {
    pub current_role: String,
    pub desired_role: String,
    pub experience_level: String,
    pub budget: Option<String>,
    pub company_size: Option<String>,
    pub time_commitment: Option<String>,
    pub selected_skills: Vec<Skill>,
    pub milestones: Vec<Milestone>,
    pub saved_roadmaps: Vec<SavedRoadmap>,
    /// Derived: number of completed milestones in the active roadmap.
    pub completed_milestones: usize,
    /// Derived: earliest deadline among incomplete steps.
    pub next_deadline: Option<NaiveDate>,
    storage: Arc<dyn RoadmapStorage>,
}

impl PreferenceStore {
    /// Builds a store hydrated from storage: the saved-roadmap collection and
    /// any in-progress snapshot. Missing or malformed blobs are absent data.
    pub fn new(storage: Arc<dyn RoadmapStorage>) -> Self {
        let saved_roadmaps = load_saved_roadmaps(storage.as_ref());
        let snapshot = load_current_snapshot(storage.as_ref()).unwrap_or_default();

        let mut store = Self {
            current_role: String::new(),
            desired_role: snapshot.desired_role,
            experience_level: String::new(),
            budget: snapshot.budget,
            company_size: snapshot.company_size,
            time_commitment: snapshot.time_commitment,
            selected_skills: Vec::new(),
            milestones: snapshot.milestones,
            saved_roadmaps,
            completed_milestones: 0,
            next_deadline: None,
            storage,
        };
        store.recompute_aggregates();
        store
    }

    // ────────────────────────────────────────────────────────────────────
    // Preferences
    // ────────────────────────────────────────────────────────────────────

    pub fn apply_preferences(&mut self, update: PreferenceUpdate) {
        if let Some(value) = update.current_role {
            self.current_role = value;
        }
        if let Some(value) = update.desired_role {
            self.desired_role = value;
        }
        if let Some(value) = update.experience_level {
            self.experience_level = value;
        }
        if let Some(value) = update.budget {
            self.budget = Some(value);
        }
        if let Some(value) = update.company_size {
            self.company_size = Some(value);
        }
        if let Some(value) = update.time_commitment {
            self.time_commitment = Some(value);
        }
        if let Some(skills) = update.selected_skills {
            self.selected_skills = dedup_by_name(skills);
        }
    }

    /// Replaces the active milestone list (wizard completion).
    pub fn set_milestones(&mut self, milestones: Vec<Milestone>) {
        self.milestones = milestones;
        self.recompute_aggregates();
        self.persist_snapshot();
    }

    // ────────────────────────────────────────────────────────────────────
    // Saved roadmaps
    // ────────────────────────────────────────────────────────────────────

    /// Saves the active roadmap. Returns `None` without touching state when
    /// there is nothing to save (blank desired role or no milestones).
    /// An existing entry with the same title is overwritten, not appended.
    pub fn save_roadmap(&mut self) -> Option<SavedRoadmap> {
        let desired_role = self.desired_role.trim();
        if desired_role.is_empty() || self.milestones.is_empty() {
            return None;
        }

        let roadmap = SavedRoadmap {
            id: Uuid::new_v4(),
            title: format!("{desired_role} Roadmap"),
            created_at: Utc::now(),
            progress: average_progress(&self.milestones),
            milestones: self.milestones.clone(),
            desired_role: self.desired_role.clone(),
            budget: self.budget.clone(),
            company_size: self.company_size.clone(),
            time_commitment: self.time_commitment.clone(),
        };

        match self
            .saved_roadmaps
            .iter()
            .position(|existing| existing.title == roadmap.title)
        {
            Some(index) => self.saved_roadmaps[index] = roadmap.clone(),
            None => self.saved_roadmaps.push(roadmap.clone()),
        }
        self.persist_saved_roadmaps();
        Some(roadmap)
    }

    pub fn delete_roadmap(&mut self, id: Uuid) -> Result<(), AppError> {
        let index = self
            .saved_roadmaps
            .iter()
            .position(|roadmap| roadmap.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found")))?;
        self.saved_roadmaps.remove(index);
        // An empty collection is never written back out — parity with the
        // original, which only persisted non-empty collections.
        self.persist_saved_roadmaps();
        Ok(())
    }

    /// Restores a saved roadmap as the active one and recomputes the derived
    /// aggregates from its milestones.
    pub fn load_roadmap(&mut self, id: Uuid) -> Result<(), AppError> {
        let roadmap = self
            .saved_roadmaps
            .iter()
            .find(|roadmap| roadmap.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Roadmap {id} not found")))?
            .clone();

        self.desired_role = roadmap.desired_role;
        self.milestones = roadmap.milestones;
        self.budget = roadmap.budget;
        self.company_size = roadmap.company_size;
        self.time_commitment = roadmap.time_commitment;
        self.recompute_aggregates();
        self.persist_snapshot();
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────
    // Milestone mutations
    // ────────────────────────────────────────────────────────────────────

    /// Plain index swap — applying it twice restores the original order.
    pub fn swap_milestones(&mut self, from: usize, to: usize) -> Result<(), AppError> {
        let len = self.milestones.len();
        if from >= len || to >= len {
            return Err(AppError::Validation(format!(
                "swap indices out of range: {from}, {to} (have {len} milestones)"
            )));
        }
        self.milestones.swap(from, to);
        self.persist_snapshot();
        Ok(())
    }

    pub fn update_milestone_step(
        &mut self,
        milestone_id: Uuid,
        step_id: Uuid,
        update: StepUpdate,
    ) -> Result<Milestone, AppError> {
        let milestone = self.milestone_mut(milestone_id)?;
        let step = milestone
            .steps
            .iter_mut()
            .find(|step| step.id == step_id)
            .ok_or_else(|| AppError::NotFound(format!("Step {step_id} not found")))?;

        if let Some(description) = update.description {
            step.description = description;
        }
        if let Some(completed) = update.completed {
            step.completed = completed;
        }
        if let Some(deadline) = update.deadline {
            step.deadline = Some(deadline);
        }
        milestone.recompute_progress();
        let updated = milestone.clone();
        self.recompute_aggregates();
        self.persist_snapshot();
        Ok(updated)
    }

    pub fn add_milestone_step(
        &mut self,
        milestone_id: Uuid,
        description: String,
        deadline: Option<NaiveDate>,
    ) -> Result<ActionableStep, AppError> {
        let milestone = self.milestone_mut(milestone_id)?;
        let mut step = ActionableStep::new(description);
        step.deadline = deadline;
        milestone.steps.push(step.clone());
        milestone.recompute_progress();
        self.recompute_aggregates();
        self.persist_snapshot();
        Ok(step)
    }

    pub fn delete_milestone_step(
        &mut self,
        milestone_id: Uuid,
        step_id: Uuid,
    ) -> Result<Milestone, AppError> {
        let milestone = self.milestone_mut(milestone_id)?;
        let index = milestone
            .steps
            .iter()
            .position(|step| step.id == step_id)
            .ok_or_else(|| AppError::NotFound(format!("Step {step_id} not found")))?;
        milestone.steps.remove(index);
        milestone.recompute_progress();
        let updated = milestone.clone();
        self.recompute_aggregates();
        self.persist_snapshot();
        Ok(updated)
    }

    /// Toggle, not a set: an equal value clears the feedback back to `None`.
    pub fn toggle_milestone_feedback(
        &mut self,
        milestone_id: Uuid,
        value: Feedback,
    ) -> Result<Option<Feedback>, AppError> {
        let milestone = self.milestone_mut(milestone_id)?;
        milestone.feedback = if milestone.feedback == Some(value) {
            None
        } else {
            Some(value)
        };
        let feedback = milestone.feedback;
        self.persist_snapshot();
        Ok(feedback)
    }

    // ────────────────────────────────────────────────────────────────────
    // Derived state & persistence
    // ────────────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> RoadmapSnapshot {
        RoadmapSnapshot {
            desired_role: self.desired_role.clone(),
            milestones: self.milestones.clone(),
            budget: self.budget.clone(),
            company_size: self.company_size.clone(),
            time_commitment: self.time_commitment.clone(),
        }
    }

    fn milestone_mut(&mut self, id: Uuid) -> Result<&mut Milestone, AppError> {
        self.milestones
            .iter_mut()
            .find(|milestone| milestone.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Milestone {id} not found")))
    }

    fn recompute_aggregates(&mut self) {
        self.completed_milestones = self.milestones.iter().filter(|m| m.completed).count();
        self.next_deadline = self
            .milestones
            .iter()
            .flat_map(|m| m.steps.iter())
            .filter(|step| !step.completed)
            .filter_map(|step| step.deadline)
            .min();
    }

    fn persist_saved_roadmaps(&self) {
        if self.saved_roadmaps.is_empty() {
            return;
        }
        match serde_json::to_string(&self.saved_roadmaps) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(ROADMAPS_KEY, &blob) {
                    warn!("failed to persist '{ROADMAPS_KEY}': {e}");
                }
            }
            Err(e) => warn!("failed to serialize '{ROADMAPS_KEY}': {e}"),
        }
    }

    fn persist_snapshot(&self) {
        match serde_json::to_string(&self.snapshot()) {
            Ok(blob) => {
                if let Err(e) = self.storage.write(CURRENT_ROADMAP_KEY, &blob) {
                    warn!("failed to persist '{CURRENT_ROADMAP_KEY}': {e}");
                }
            }
            Err(e) => warn!("failed to serialize '{CURRENT_ROADMAP_KEY}': {e}"),
        }
    }
}
