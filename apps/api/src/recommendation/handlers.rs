use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::recommendation::engine::{match_role, recommend_skills, RecommendedSkill};

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub desired_role: String,
    pub current_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    /// The table key the desired role resolved to — for transparency.
    pub matched_role: &'static str,
    pub skills: Vec<RecommendedSkill>,
}

/// GET /api/v1/skills/recommendations
pub async fn handle_get_recommendations(
    Query(params): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    if params.desired_role.trim().is_empty() {
        return Err(AppError::Validation(
            "desired_role must not be blank".to_string(),
        ));
    }

    let skills = recommend_skills(params.current_role.as_deref(), &params.desired_role);
    Ok(Json(RecommendationResponse {
        matched_role: match_role(&params.desired_role),
        skills,
    }))
}
