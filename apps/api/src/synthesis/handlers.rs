use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::milestone::Milestone;
use crate::models::skill::Skill;
use crate::state::AppState;
use crate::store::PreferenceUpdate;
use crate::synthesis::synthesizer::{generate_milestones, SynthesisInputs};

/// Wizard completion payload: everything the three steps collected.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub desired_role: String,
    pub current_role: Option<String>,
    pub current_state: Option<String>,
    pub budget: Option<String>,
    pub company_size: Option<String>,
    pub time_commitment: Option<String>,
    #[serde(default)]
    pub selected_skills: Vec<Skill>,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub milestones: Vec<Milestone>,
}

/// POST /api/v1/roadmap/generate
///
/// Synthesizes the personalized milestone list and makes it the active
/// roadmap. A blank desired role aborts before any state change.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    if request.desired_role.trim().is_empty() {
        return Err(AppError::Validation(
            "A desired role is required to generate a roadmap".to_string(),
        ));
    }

    let milestones = generate_milestones(&SynthesisInputs {
        desired_role: request.desired_role.clone(),
        current_state: request.current_state.clone(),
        budget: request.budget.clone(),
        company_size: request.company_size.clone(),
        time_commitment: request.time_commitment.clone(),
        selected_skills: request.selected_skills.clone(),
    });

    let mut store = state.store.write().await;
    store.apply_preferences(PreferenceUpdate {
        current_role: request.current_role,
        desired_role: Some(request.desired_role),
        budget: request.budget,
        company_size: request.company_size,
        time_commitment: request.time_commitment,
        selected_skills: Some(request.selected_skills),
        ..Default::default()
    });
    store.set_milestones(milestones.clone());

    tracing::info!(
        "generated roadmap with {} milestones for '{}'",
        milestones.len(),
        store.desired_role
    );
    Ok(Json(GenerateRoadmapResponse { milestones }))
}
