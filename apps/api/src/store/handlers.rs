//! Route handlers over the preference store. Thin by design: every operation
//! is a store call plus serialization — no business logic lives here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::milestone::{ActionableStep, Feedback, Milestone};
use crate::models::roadmap::SavedRoadmap;
use crate::state::AppState;
use crate::store::{PreferenceStore, PreferenceUpdate, StepUpdate};

/// The active roadmap as the client sees it, including the derived
/// aggregates.
#[derive(Debug, Serialize)]
pub struct RoadmapView {
    pub desired_role: String,
    pub milestones: Vec<Milestone>,
    pub budget: Option<String>,
    pub company_size: Option<String>,
    pub time_commitment: Option<String>,
    pub completed_milestones: usize,
    pub next_deadline: Option<NaiveDate>,
}

impl RoadmapView {
    fn from_store(store: &PreferenceStore) -> Self {
        Self {
            desired_role: store.desired_role.clone(),
            milestones: store.milestones.clone(),
            budget: store.budget.clone(),
            company_size: store.company_size.clone(),
            time_commitment: store.time_commitment.clone(),
            completed_milestones: store.completed_milestones,
            next_deadline: store.next_deadline,
        }
    }
}

/// GET /api/v1/roadmap
pub async fn handle_get_roadmap(State(state): State<AppState>) -> Json<RoadmapView> {
    let store = state.store.read().await;
    Json(RoadmapView::from_store(&store))
}

/// PUT /api/v1/roadmap/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Json(update): Json<PreferenceUpdate>,
) -> Json<RoadmapView> {
    let mut store = state.store.write().await;
    store.apply_preferences(update);
    Json(RoadmapView::from_store(&store))
}

/// POST /api/v1/roadmap/save
pub async fn handle_save_roadmap(
    State(state): State<AppState>,
) -> Result<Json<SavedRoadmap>, AppError> {
    let mut store = state.store.write().await;
    store.save_roadmap().map(Json).ok_or_else(|| {
        AppError::Validation(
            "Nothing to save: set a desired role and generate milestones first".to_string(),
        )
    })
}

/// GET /api/v1/roadmaps
pub async fn handle_list_roadmaps(State(state): State<AppState>) -> Json<Vec<SavedRoadmap>> {
    let store = state.store.read().await;
    Json(store.saved_roadmaps.clone())
}

/// DELETE /api/v1/roadmaps/:id
pub async fn handle_delete_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.write().await;
    store.delete_roadmap(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/roadmaps/:id/load
pub async fn handle_load_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoadmapView>, AppError> {
    let mut store = state.store.write().await;
    store.load_roadmap(id)?;
    Ok(Json(RoadmapView::from_store(&store)))
}

#[derive(Debug, Deserialize)]
pub struct SwapRequest {
    pub from: usize,
    pub to: usize,
}

/// POST /api/v1/roadmap/milestones/swap
pub async fn handle_swap_milestones(
    State(state): State<AppState>,
    Json(request): Json<SwapRequest>,
) -> Result<Json<RoadmapView>, AppError> {
    let mut store = state.store.write().await;
    store.swap_milestones(request.from, request.to)?;
    Ok(Json(RoadmapView::from_store(&store)))
}

#[derive(Debug, Deserialize)]
pub struct AddStepRequest {
    pub description: String,
    pub deadline: Option<NaiveDate>,
}

/// POST /api/v1/roadmap/milestones/:id/steps
pub async fn handle_add_step(
    State(state): State<AppState>,
    Path(milestone_id): Path<Uuid>,
    Json(request): Json<AddStepRequest>,
) -> Result<Json<ActionableStep>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "A step description is required".to_string(),
        ));
    }
    let mut store = state.store.write().await;
    let step = store.add_milestone_step(milestone_id, request.description, request.deadline)?;
    Ok(Json(step))
}

/// PATCH /api/v1/roadmap/milestones/:id/steps/:step_id
///
/// Returns the owning milestone so the client sees the recomputed progress.
pub async fn handle_update_step(
    State(state): State<AppState>,
    Path((milestone_id, step_id)): Path<(Uuid, Uuid)>,
    Json(update): Json<StepUpdate>,
) -> Result<Json<Milestone>, AppError> {
    let mut store = state.store.write().await;
    let milestone = store.update_milestone_step(milestone_id, step_id, update)?;
    Ok(Json(milestone))
}

/// DELETE /api/v1/roadmap/milestones/:id/steps/:step_id
pub async fn handle_delete_step(
    State(state): State<AppState>,
    Path((milestone_id, step_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Milestone>, AppError> {
    let mut store = state.store.write().await;
    let milestone = store.delete_milestone_step(milestone_id, step_id)?;
    Ok(Json(milestone))
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub feedback: Feedback,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// The feedback after the toggle — `null` when it was cleared.
    pub feedback: Option<Feedback>,
}

/// POST /api/v1/roadmap/milestones/:id/feedback
pub async fn handle_toggle_feedback(
    State(state): State<AppState>,
    Path(milestone_id): Path<Uuid>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let mut store = state.store.write().await;
    let feedback = store.toggle_milestone_feedback(milestone_id, request.feedback)?;
    Ok(Json(FeedbackResponse { feedback }))
}
