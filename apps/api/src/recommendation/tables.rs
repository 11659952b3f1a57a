//! Skill recommendation tables — static role → scored skill lists.
//!
//! Keys are normalized (lowercase) role names. Lookup never fails: the
//! matcher in `engine` falls back to `DEFAULT_ROLE` when nothing matches.

use crate::models::skill::SkillCategory;

/// Static classification of a recommended skill's importance.
/// Ordering: Essential < Recommended < Optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceTier {
    Essential,
    Recommended,
    Optional,
}

/// A single table entry: skill name with its tier and relevance score.
#[derive(Debug, Clone, Copy)]
pub struct SkillRec {
    pub name: &'static str,
    pub category: SkillCategory,
    pub tier: RelevanceTier,
    pub score: u32,
}

const fn rec(
    name: &'static str,
    category: SkillCategory,
    tier: RelevanceTier,
    score: u32,
) -> SkillRec {
    SkillRec {
        name,
        category,
        tier,
        score,
    }
}

use RelevanceTier::{Essential, Optional, Recommended};
use SkillCategory::{Analytics, Business, Domain, Soft, Technical};

/// Fallback role when no table key matches the user's input.
pub const DEFAULT_ROLE: &str = "software engineer";

const SOFTWARE_ENGINEER: &[SkillRec] = &[
    rec("Data Structures & Algorithms", Technical, Essential, 95),
    rec("Git & Version Control", Technical, Essential, 90),
    rec("System Design", Technical, Essential, 85),
    rec("Testing & Debugging", Technical, Essential, 82),
    rec("SQL", Technical, Recommended, 75),
    rec("CI/CD Pipelines", Technical, Recommended, 70),
    rec("Cloud Platforms", Technical, Recommended, 68),
    rec("Communication", Soft, Recommended, 65),
    rec("Open Source Contribution", Domain, Optional, 50),
    rec("Public Speaking", Soft, Optional, 40),
];

const DATA_SCIENTIST: &[SkillRec] = &[
    rec("Python", Technical, Essential, 95),
    rec("Statistics & Probability", Analytics, Essential, 92),
    rec("SQL", Technical, Essential, 88),
    rec("Machine Learning", Technical, Essential, 85),
    rec("Data Visualization", Analytics, Recommended, 78),
    rec("Experiment Design", Analytics, Recommended, 72),
    rec("Communication", Soft, Recommended, 68),
    rec("Deep Learning", Technical, Optional, 55),
    rec("Big Data Tools", Technical, Optional, 50),
];

const DATA_ANALYST: &[SkillRec] = &[
    rec("SQL", Technical, Essential, 95),
    rec("Excel & Spreadsheets", Analytics, Essential, 88),
    rec("Data Visualization", Analytics, Essential, 85),
    rec("Statistics & Probability", Analytics, Recommended, 75),
    rec("Python", Technical, Recommended, 70),
    rec("Dashboard Design", Analytics, Recommended, 66),
    rec("Business Acumen", Business, Recommended, 62),
    rec("Storytelling with Data", Soft, Optional, 52),
];

const PRODUCT_MANAGER: &[SkillRec] = &[
    rec("Product Strategy", Business, Essential, 94),
    rec("User Research", Domain, Essential, 88),
    rec("Roadmap Prioritization", Business, Essential, 85),
    rec("Stakeholder Management", Soft, Essential, 82),
    rec("Data Visualization", Analytics, Recommended, 72),
    rec("SQL", Technical, Recommended, 65),
    rec("Communication", Soft, Recommended, 64),
    rec("A/B Testing", Analytics, Optional, 55),
    rec("Agile Methodologies", Business, Optional, 48),
];

const UX_DESIGNER: &[SkillRec] = &[
    rec("User Research", Domain, Essential, 94),
    rec("Wireframing & Prototyping", Technical, Essential, 90),
    rec("Interaction Design", Domain, Essential, 86),
    rec("Usability Testing", Domain, Recommended, 76),
    rec("Design Systems", Technical, Recommended, 70),
    rec("Communication", Soft, Recommended, 66),
    rec("Visual Design", Domain, Optional, 56),
    rec("Front-End Basics", Technical, Optional, 45),
];

const DEVOPS_ENGINEER: &[SkillRec] = &[
    rec("Linux & Shell Scripting", Technical, Essential, 94),
    rec("CI/CD Pipelines", Technical, Essential, 90),
    rec("Cloud Platforms", Technical, Essential, 88),
    rec("Containers & Orchestration", Technical, Essential, 84),
    rec("Infrastructure as Code", Technical, Recommended, 76),
    rec("Monitoring & Observability", Technical, Recommended, 70),
    rec("Git & Version Control", Technical, Recommended, 66),
    rec("Incident Management", Domain, Optional, 54),
];

const MARKETING_MANAGER: &[SkillRec] = &[
    rec("Marketing Strategy", Business, Essential, 92),
    rec("Content Marketing", Business, Essential, 86),
    rec("SEO & SEM", Technical, Essential, 82),
    rec("Analytics Platforms", Analytics, Recommended, 74),
    rec("Brand Management", Business, Recommended, 68),
    rec("Communication", Soft, Recommended, 66),
    rec("Email Marketing", Business, Optional, 54),
    rec("A/B Testing", Analytics, Optional, 50),
];

/// All registered role tables. Order matters: substring matching takes the
/// first hit.
const ROLE_SKILLS: &[(&str, &[SkillRec])] = &[
    ("software engineer", SOFTWARE_ENGINEER),
    ("data scientist", DATA_SCIENTIST),
    ("data analyst", DATA_ANALYST),
    ("product manager", PRODUCT_MANAGER),
    ("ux designer", UX_DESIGNER),
    ("devops engineer", DEVOPS_ENGINEER),
    ("marketing manager", MARKETING_MANAGER),
];

/// Registered role keys, in table order.
pub fn role_keys() -> impl Iterator<Item = &'static str> {
    ROLE_SKILLS.iter().map(|(key, _)| *key)
}

/// Exact-key lookup. Callers go through `engine::match_role` for fuzzy
/// matching and fallback.
pub fn skill_table(role_key: &str) -> Option<&'static [SkillRec]> {
    ROLE_SKILLS
        .iter()
        .find(|(key, _)| *key == role_key)
        .map(|(_, skills)| *skills)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_registered() {
        assert!(skill_table(DEFAULT_ROLE).is_some());
    }

    #[test]
    fn test_all_tables_nonempty_with_an_essential_skill() {
        for key in role_keys() {
            let table = skill_table(key).unwrap();
            assert!(!table.is_empty(), "table for {key} is empty");
            assert!(
                table.iter().any(|s| s.tier == RelevanceTier::Essential),
                "table for {key} has no essential skill"
            );
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(RelevanceTier::Essential < RelevanceTier::Recommended);
        assert!(RelevanceTier::Recommended < RelevanceTier::Optional);
    }

    #[test]
    fn test_unknown_key_returns_none() {
        assert!(skill_table("astronaut").is_none());
    }
}
