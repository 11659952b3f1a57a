//! Skill model — user-selectable skills attached to milestones and roadmaps.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Classification of a skill. Optional because free-typed skills arrive
/// without a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Industry,
    Domain,
    Business,
    Analytics,
}

/// User-declared level for a selected skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    #[serde(rename = "want-to-learn")]
    WantToLearn,
    #[serde(rename = "want-to-improve")]
    WantToImprove,
    #[serde(rename = "proficient")]
    Proficient,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<Proficiency>,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: Option<SkillCategory>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            proficiency: None,
        }
    }
}

/// Deduplicates skills by name, keeping the first occurrence.
/// Name is the de-facto unique key within a selection list.
pub fn dedup_by_name(skills: Vec<Skill>) -> Vec<Skill> {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    skills
        .into_iter()
        .filter(|s| {
            let key = s.name.trim().to_lowercase();
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&SkillCategory::Technical).unwrap();
        assert_eq!(json, r#""technical""#);
        let json = serde_json::to_string(&SkillCategory::Analytics).unwrap();
        assert_eq!(json, r#""analytics""#);
    }

    #[test]
    fn test_proficiency_uses_kebab_wire_names() {
        let p: Proficiency = serde_json::from_str(r#""want-to-learn""#).unwrap();
        assert_eq!(p, Proficiency::WantToLearn);
        let p: Proficiency = serde_json::from_str(r#""want-to-improve""#).unwrap();
        assert_eq!(p, Proficiency::WantToImprove);
        let p: Proficiency = serde_json::from_str(r#""proficient""#).unwrap();
        assert_eq!(p, Proficiency::Proficient);
    }

    #[test]
    fn test_skill_without_category_omits_field() {
        let skill = Skill::new("Communication", None);
        let json = serde_json::to_string(&skill).unwrap();
        assert!(!json.contains("category"));
        assert!(!json.contains("proficiency"));
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let skills = vec![
            Skill::new("Python", Some(SkillCategory::Technical)),
            Skill::new("SQL", Some(SkillCategory::Technical)),
            Skill::new("python", None), // same name, different case
        ];
        let deduped = dedup_by_name(skills);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "Python");
        assert_eq!(
            deduped[0].category,
            Some(SkillCategory::Technical),
            "first occurrence wins"
        );
    }

    #[test]
    fn test_dedup_empty_input() {
        assert!(dedup_by_name(vec![]).is_empty());
    }
}
