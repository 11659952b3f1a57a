//! Milestone synthesizer — combines the template library with user
//! preferences to produce a concrete milestone list.
//!
//! Pure function over its inputs: no persistence, no error signaling. Every
//! lookup miss degrades silently to default content.
//!
//! Steps:
//! 1. select base templates by role (substring match, generic fallback)
//! 2. scale each timeline by the time-commitment multiplier
//! 3. append the company-size focus phrase to each description
//! 4. distribute selected skills round-robin across the base milestones
//! 5. attach budget-filtered resources per milestone category
//! 6. prepend one milestone per current-state priority action

use uuid::Uuid;

use crate::models::milestone::{ActionableStep, Milestone, Resource, Tool};
use crate::models::skill::{dedup_by_name, Skill};
use crate::synthesis::resources::{
    budget_max_price, category_for_milestone, passes_budget, resources_for_role, ResourceDef,
};
use crate::synthesis::templates::{
    company_size_focus, state_priorities, templates_for_role, time_multiplier,
};

/// Timeline assigned to synthesized priority milestones (not scaled).
const PRIORITY_TIMELINE: &str = "1 month";

/// Inputs collected by the wizard. All fields except the desired role are
/// optional; missing values mean default behavior, never an error.
#[derive(Debug, Clone, Default)]
pub struct SynthesisInputs {
    pub desired_role: String,
    pub current_state: Option<String>,
    pub budget: Option<String>,
    pub company_size: Option<String>,
    pub time_commitment: Option<String>,
    pub selected_skills: Vec<Skill>,
}

/// Generates the personalized milestone list.
///
/// Output length is always `state priorities + template count`. Every
/// milestone carries a fresh id and freshly id-stamped steps; the skills,
/// tools, and resources vectors are always present (possibly empty).
pub fn generate_milestones(inputs: &SynthesisInputs) -> Vec<Milestone> {
    let templates = templates_for_role(&inputs.desired_role);
    let multiplier = time_multiplier(inputs.time_commitment.as_deref());
    let focus = company_size_focus(inputs.company_size.as_deref());
    let max_price = budget_max_price(inputs.budget.as_deref());
    let resource_categories = resources_for_role(&inputs.desired_role);

    let mut base: Vec<Milestone> = templates
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let description = match focus {
                Some(phrase) => format!("{} {phrase}", template.description),
                None => template.description.to_string(),
            };
            let mut milestone = Milestone::new(
                template.title,
                description,
                scale_timeline(template.timeline, multiplier),
            );
            milestone.steps = template
                .steps
                .iter()
                .map(|step| ActionableStep::new(*step))
                .collect();
            milestone.tools = template.tools.iter().map(|tool| Tool::new(*tool)).collect();
            milestone.resources =
                category_for_milestone(resource_categories, index, template.title)
                    .iter()
                    .filter(|def| passes_budget(def, max_price))
                    .map(instantiate_resource)
                    .collect();
            milestone
        })
        .collect();

    // Round-robin skill distribution across the base milestones
    if !base.is_empty() {
        let skills = dedup_by_name(inputs.selected_skills.clone());
        for (index, skill) in skills.into_iter().enumerate() {
            base[index % templates.len()].skills.push(skill);
        }
    }

    // Current-state priority milestones go first
    let mut milestones: Vec<Milestone> = state_priorities(inputs.current_state.as_deref())
        .iter()
        .map(|priority| priority_milestone(priority, resource_categories, max_price))
        .collect();
    milestones.append(&mut base);
    milestones
}

/// Scales the leading number of a timeline string, rounding to the nearest
/// integer with the unit unchanged: `"3 months"` × 2.5 → `"8 months"`.
/// Unparseable timelines pass through untouched.
fn scale_timeline(timeline: &str, multiplier: f64) -> String {
    let mut parts = timeline.splitn(2, ' ');
    let leading = parts.next().unwrap_or_default();
    let Ok(value) = leading.parse::<f64>() else {
        return timeline.to_string();
    };
    let scaled = (value * multiplier).round() as i64;
    match parts.next() {
        Some(unit) => format!("{scaled} {unit}"),
        None => scaled.to_string(),
    }
}

/// Builds one milestone for a current-state priority action, with five fixed
/// steps and any role resources whose name mentions a token of the phrase.
fn priority_milestone(
    priority: &str,
    categories: &'static [(&'static str, &'static [ResourceDef])],
    max_price: Option<u32>,
) -> Milestone {
    let mut milestone = Milestone::new(
        format!("Priority: {}", title_case(priority)),
        format!("Immediate actions for your current situation, centered on {priority}."),
        PRIORITY_TIMELINE,
    );
    milestone.steps = vec![
        ActionableStep::new(format!("Research {priority} opportunities")),
        ActionableStep::new(format!("Create a {priority} plan")),
        ActionableStep::new(format!("Set aside weekly time for {priority}")),
        ActionableStep::new(format!("Reach out to people who can help with {priority}")),
        ActionableStep::new(format!("Review your {priority} progress and adjust")),
    ];

    let tokens: Vec<String> = priority
        .split_whitespace()
        .filter(|token| token.len() > 3)
        .map(str::to_lowercase)
        .collect();
    let mut seen: Vec<&str> = Vec::new();
    milestone.resources = categories
        .iter()
        .flat_map(|(_, defs)| defs.iter())
        .filter(|def| {
            let name = def.name.to_lowercase();
            tokens.iter().any(|token| name.contains(token))
        })
        .filter(|def| passes_budget(def, max_price))
        .filter(|def| {
            if seen.contains(&def.name) {
                false
            } else {
                seen.push(def.name);
                true
            }
        })
        .map(instantiate_resource)
        .collect();
    milestone
}

fn instantiate_resource(def: &ResourceDef) -> Resource {
    Resource {
        id: Uuid::new_v4(),
        name: def.name.to_string(),
        url: def.url.map(str::to_string),
        is_paid: def.is_paid,
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
