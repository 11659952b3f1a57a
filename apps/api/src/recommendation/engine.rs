//! Skill recommendation engine — fuzzy role matching plus transferability
//! scoring over the static tables.
//!
//! Matching policy: exact key match first, then the first registered key that
//! is a substring of (or contains) the normalized input, then the default
//! role. Unmatched roles never error — fallback is silent.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::models::skill::SkillCategory;
use crate::recommendation::tables::{role_keys, skill_table, RelevanceTier, SkillRec, DEFAULT_ROLE};

/// Flat bonus added to a desired-role skill that also appears in the
/// current-role table. Models skill transferability.
const TRANSFER_BONUS: u32 = 10;

/// A scored recommendation returned to the client. Ordering is deterministic
/// for fixed inputs; only `id` varies between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedSkill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub tier: RelevanceTier,
    pub score: u32,
}

fn normalize(role: &str) -> String {
    role.trim().to_lowercase()
}

/// Resolves a free-text role to a registered table key.
pub fn match_role(input: &str) -> &'static str {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return DEFAULT_ROLE;
    }

    // Exact match first
    if let Some(key) = role_keys().find(|key| *key == normalized) {
        return key;
    }

    // Then first containment hit in either direction
    if let Some(key) =
        role_keys().find(|key| key.contains(&normalized) || normalized.contains(*key))
    {
        return key;
    }

    debug!("no role table matched '{input}', falling back to '{DEFAULT_ROLE}'");
    DEFAULT_ROLE
}

/// Recommends skills for `desired_role`, with a transferability bonus for
/// skills shared with `current_role` when one is supplied.
///
/// Sort order: relevance tier (essential, recommended, optional), then score
/// descending within a tier.
pub fn recommend_skills(
    current_role: Option<&str>,
    desired_role: &str,
) -> Vec<RecommendedSkill> {
    let desired_key = match_role(desired_role);
    // skill_table cannot miss for a key produced by match_role
    let desired_table = skill_table(desired_key).unwrap_or_default();

    let current_table: &[SkillRec] = current_role
        .filter(|role| !normalize(role).is_empty())
        .and_then(|role| skill_table(match_role(role)))
        .unwrap_or_default();

    let mut scored: Vec<RecommendedSkill> = desired_table
        .iter()
        .map(|skill| {
            let transferable = current_table.iter().any(|c| c.name == skill.name);
            let score = if transferable {
                skill.score + TRANSFER_BONUS
            } else {
                skill.score
            };
            RecommendedSkill {
                id: Uuid::new_v4(),
                name: skill.name.to_string(),
                category: skill.category,
                tier: skill.tier,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| a.tier.cmp(&b.tier).then(b.score.cmp(&a.score)));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(match_role("data scientist"), "data scientist");
        assert_eq!(match_role("  Data Scientist  "), "data scientist");
    }

    #[test]
    fn test_substring_match_input_within_key() {
        // "ux" is contained in "ux designer"
        assert_eq!(match_role("ux"), "ux designer");
    }

    #[test]
    fn test_substring_match_key_within_input() {
        assert_eq!(match_role("senior data analyst"), "data analyst");
    }

    #[test]
    fn test_unmatched_role_falls_back_silently() {
        assert_eq!(match_role("astronaut"), DEFAULT_ROLE);
        assert_eq!(match_role(""), DEFAULT_ROLE);
        assert_eq!(match_role("   "), DEFAULT_ROLE);
    }

    #[test]
    fn test_tier_ordering_respected_before_score() {
        let skills = recommend_skills(None, "data scientist");
        let mut last_tier = RelevanceTier::Essential;
        for skill in &skills {
            assert!(skill.tier >= last_tier, "tiers must not regress");
            last_tier = skill.tier;
        }
        // Within each tier, scores descend
        for window in skills.windows(2) {
            if window[0].tier == window[1].tier {
                assert!(window[0].score >= window[1].score);
            }
        }
    }

    #[test]
    fn test_ordering_deterministic_except_ids() {
        let a = recommend_skills(Some("data analyst"), "data scientist");
        let b = recommend_skills(Some("data analyst"), "data scientist");
        let names_a: Vec<_> = a.iter().map(|s| (&s.name, s.score)).collect();
        let names_b: Vec<_> = b.iter().map(|s| (&s.name, s.score)).collect();
        assert_eq!(names_a, names_b);
        assert_ne!(a[0].id, b[0].id, "ids are freshly stamped per call");
    }

    #[test]
    fn test_shared_skill_gets_transfer_bonus() {
        let without = recommend_skills(None, "data scientist");
        let with = recommend_skills(Some("data analyst"), "data scientist");

        // SQL appears in both the data analyst and data scientist tables
        let base = without.iter().find(|s| s.name == "SQL").unwrap().score;
        let boosted = with.iter().find(|s| s.name == "SQL").unwrap().score;
        assert_eq!(boosted, base + TRANSFER_BONUS);

        // Machine Learning is data-scientist-only — no bonus
        let ml_base = without
            .iter()
            .find(|s| s.name == "Machine Learning")
            .unwrap()
            .score;
        let ml_with = with
            .iter()
            .find(|s| s.name == "Machine Learning")
            .unwrap()
            .score;
        assert_eq!(ml_with, ml_base);
    }

    #[test]
    fn test_blank_current_role_means_no_bonus() {
        let without = recommend_skills(None, "data scientist");
        let blank = recommend_skills(Some("   "), "data scientist");
        let a: Vec<_> = without.iter().map(|s| (&s.name, s.score)).collect();
        let b: Vec<_> = blank.iter().map(|s| (&s.name, s.score)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unmatched_desired_role_uses_default_table() {
        let fallback = recommend_skills(None, "astronaut");
        let default = recommend_skills(None, DEFAULT_ROLE);
        assert_eq!(fallback.len(), default.len());
        assert_eq!(fallback[0].name, default[0].name);
    }
}
