//! Milestone template library — static per-role templates plus the
//! time-commitment, company-size, and current-state tables that the
//! synthesizer folds into them.

/// A milestone blueprint before personalization.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneTemplate {
    pub title: &'static str,
    pub description: &'static str,
    /// Leading number + unit word, e.g. `"3 months"`. The synthesizer scales
    /// the number by the time-commitment multiplier.
    pub timeline: &'static str,
    pub steps: &'static [&'static str],
    pub tools: &'static [&'static str],
}

const fn tpl(
    title: &'static str,
    description: &'static str,
    timeline: &'static str,
    steps: &'static [&'static str],
    tools: &'static [&'static str],
) -> MilestoneTemplate {
    MilestoneTemplate {
        title,
        description,
        timeline,
        steps,
        tools,
    }
}

const SOFTWARE_ENGINEER: &[MilestoneTemplate] = &[
    tpl(
        "Programming Foundations",
        "Build fluency in one primary language and the fundamentals every interview assumes.",
        "3 months",
        &[
            "Pick one primary language and complete a structured course",
            "Solve 50 easy algorithm problems",
            "Learn Git basics and push daily practice to a repository",
            "Read one chapter a week of a fundamentals book",
        ],
        &["VS Code", "Git", "LeetCode"],
    ),
    tpl(
        "Technical Depth",
        "Move past syntax into design: data modeling, testing discipline, and systems thinking.",
        "4 months",
        &[
            "Build a small full-stack application end to end",
            "Write unit and integration tests for everything you ship",
            "Study system design fundamentals twice a week",
            "Pair with or shadow a working engineer monthly",
        ],
        &["Docker", "PostgreSQL", "GitHub Actions"],
    ),
    tpl(
        "Portfolio & Open Source",
        "Make your work public and reviewable — contributions beat claims.",
        "3 months",
        &[
            "Publish two substantial projects with READMEs and tests",
            "Make five merged contributions to open-source projects",
            "Write one technical post explaining a project decision",
        ],
        &["GitHub", "A static site generator"],
    ),
    tpl(
        "Interview Preparation",
        "Target the interview loop: algorithms, system design, and behavioral stories.",
        "2 months",
        &[
            "Solve 75 medium algorithm problems under time pressure",
            "Complete six mock interviews",
            "Prepare STAR stories for five behavioral themes",
            "Research target companies and tailor applications",
        ],
        &["LeetCode", "Pramp"],
    ),
];

const DATA_SCIENTIST: &[MilestoneTemplate] = &[
    tpl(
        "Data Analysis Foundations",
        "Get solid on the workhorse stack: Python, SQL, and descriptive statistics.",
        "3 months",
        &[
            "Complete a Python-for-data course and a SQL course",
            "Reproduce three published exploratory analyses from raw data",
            "Learn pandas and matplotlib well enough to work without docs",
            "Review descriptive and inferential statistics weekly",
        ],
        &["Jupyter", "pandas", "PostgreSQL"],
    ),
    tpl(
        "Machine Learning Fundamentals",
        "Learn the standard supervised and unsupervised toolkit and when each piece applies.",
        "4 months",
        &[
            "Work through a core ML course end to end",
            "Implement five classic models from scratch",
            "Enter two entry-level Kaggle competitions",
            "Keep a notebook of model-selection decisions and results",
        ],
        &["scikit-learn", "Kaggle", "MLflow"],
    ),
    tpl(
        "Portfolio Projects",
        "Ship analyses that answer real questions, with the messy data work visible.",
        "3 months",
        &[
            "Publish two end-to-end projects from raw data to conclusions",
            "Deploy one model behind a simple API or app",
            "Write up each project for a non-technical reader",
        ],
        &["GitHub", "Streamlit"],
    ),
    tpl(
        "Interview Preparation",
        "Drill the three interview tracks: SQL/coding, statistics, and case studies.",
        "2 months",
        &[
            "Solve 50 SQL and Python screening problems",
            "Rehearse probability and A/B testing questions weekly",
            "Complete four mock case interviews",
            "Prepare a walkthrough of your strongest project",
        ],
        &["StrataScratch", "Pramp"],
    ),
];

const PRODUCT_MANAGER: &[MilestoneTemplate] = &[
    tpl(
        "Product Foundations",
        "Learn how products are discovered, specified, and measured.",
        "2 months",
        &[
            "Read two core product management books",
            "Write teardown analyses of three products you use",
            "Learn the basic discovery and prioritization frameworks",
        ],
        &["Notion", "Figma"],
    ),
    tpl(
        "Technical & Analytical Skills",
        "Get conversant with the data and engineering realities behind product decisions.",
        "3 months",
        &[
            "Learn enough SQL to answer your own product questions",
            "Study how A/B tests are designed and misread",
            "Sit in on engineering planning to learn estimation dynamics",
        ],
        &["SQL", "Amplitude"],
    ),
    tpl(
        "Portfolio of Case Studies",
        "Produce artifacts that show product judgment, not just frameworks.",
        "3 months",
        &[
            "Write three full case studies: problem, options, metrics, decision",
            "Ship a side project or feature spec with real user feedback",
            "Present one case study to a practicing PM for critique",
        ],
        &["Notion", "Miro"],
    ),
    tpl(
        "Interview Preparation",
        "Practice the PM loop: product sense, execution, and behavioral rounds.",
        "2 months",
        &[
            "Complete eight mock product-sense interviews",
            "Drill estimation and metric-definition questions weekly",
            "Prepare STAR stories covering conflict and prioritization",
        ],
        &["Exponent"],
    ),
];

const UX_DESIGNER: &[MilestoneTemplate] = &[
    tpl(
        "Design Foundations",
        "Learn the principles: hierarchy, typography, color, and interaction patterns.",
        "3 months",
        &[
            "Complete a structured UX fundamentals course",
            "Recreate ten well-regarded screens to internalize patterns",
            "Start a daily critique habit on real products",
        ],
        &["Figma"],
    ),
    tpl(
        "Technical Tooling",
        "Get fast with the tools and learn how research feeds design.",
        "3 months",
        &[
            "Master Figma components, auto-layout, and prototyping",
            "Run three usability tests on existing products",
            "Learn enough HTML/CSS to understand handoff constraints",
        ],
        &["Figma", "Maze"],
    ),
    tpl(
        "Portfolio Development",
        "Build case studies that show process — not just final screens.",
        "4 months",
        &[
            "Complete three end-to-end case studies with research artifacts",
            "Publish a portfolio site with process narratives",
            "Get two rounds of critique from working designers",
        ],
        &["Figma", "Framer"],
    ),
    tpl(
        "Interview Preparation",
        "Prepare for portfolio reviews, whiteboard challenges, and app critiques.",
        "2 months",
        &[
            "Rehearse each portfolio case study as a ten-minute talk",
            "Complete four mock whiteboard design challenges",
            "Practice live app critiques weekly",
        ],
        &["Figma"],
    ),
];

const DEVOPS_ENGINEER: &[MilestoneTemplate] = &[
    tpl(
        "Systems Foundations",
        "Get comfortable below the application layer: Linux, networking, shells.",
        "3 months",
        &[
            "Work through a Linux administration course",
            "Script daily tasks in Bash and Python",
            "Learn core networking: DNS, TLS, load balancing",
        ],
        &["Linux", "Bash"],
    ),
    tpl(
        "Technical Automation Skills",
        "Learn the delivery pipeline: containers, CI/CD, and infrastructure as code.",
        "4 months",
        &[
            "Containerize three applications and run them in Kubernetes",
            "Build a full CI/CD pipeline for a real project",
            "Manage a small environment with Terraform",
        ],
        &["Docker", "Kubernetes", "Terraform"],
    ),
    tpl(
        "Portfolio of Infrastructure Projects",
        "Show working infrastructure, with the failure handling visible.",
        "3 months",
        &[
            "Publish an infrastructure repo with documented runbooks",
            "Add monitoring and alerting to a deployed project",
            "Write a post-mortem for a self-inflicted outage drill",
        ],
        &["Grafana", "Prometheus", "GitHub"],
    ),
    tpl(
        "Interview Preparation",
        "Prepare for systems questions, troubleshooting scenarios, and on-call culture fit.",
        "2 months",
        &[
            "Drill Linux and networking troubleshooting scenarios",
            "Practice explaining your pipeline designs on a whiteboard",
            "Prepare incident-response stories from your projects",
        ],
        &["Linux"],
    ),
];

/// Generic fallback used when no role template matches.
const DEFAULT_TEMPLATES: &[MilestoneTemplate] = &[
    tpl(
        "Role Foundations",
        "Map the target role: responsibilities, typical backgrounds, and required skills.",
        "2 months",
        &[
            "Interview three people currently in the role",
            "List the skills gap between your background and job postings",
            "Choose learning resources for the top three gaps",
        ],
        &["LinkedIn", "Notion"],
    ),
    tpl(
        "Core Skill Building",
        "Close the highest-leverage skill gaps with deliberate practice.",
        "4 months",
        &[
            "Complete one structured course per priority skill",
            "Apply each new skill in a small real project",
            "Get feedback from a practitioner monthly",
        ],
        &["Coursera", "GitHub"],
    ),
    tpl(
        "Job Search Preparation",
        "Turn the work into applications: materials, network, and interview practice.",
        "2 months",
        &[
            "Rewrite your resume around the new role",
            "Reach out to ten people at target companies",
            "Complete four mock interviews",
        ],
        &["LinkedIn"],
    ),
];

/// Registered template sets. Substring matching takes the first hit.
const ROLE_TEMPLATES: &[(&str, &[MilestoneTemplate])] = &[
    ("software engineer", SOFTWARE_ENGINEER),
    ("data scientist", DATA_SCIENTIST),
    ("product manager", PRODUCT_MANAGER),
    ("ux designer", UX_DESIGNER),
    ("devops engineer", DEVOPS_ENGINEER),
];

/// Selects the template set for a desired role: exact key, then containment
/// either way, then the generic fallback. Never errors.
pub fn templates_for_role(desired_role: &str) -> &'static [MilestoneTemplate] {
    let normalized = desired_role.trim().to_lowercase();
    if normalized.is_empty() {
        return DEFAULT_TEMPLATES;
    }
    ROLE_TEMPLATES
        .iter()
        .find(|(key, _)| *key == normalized)
        .or_else(|| {
            ROLE_TEMPLATES
                .iter()
                .find(|(key, _)| key.contains(&normalized) || normalized.contains(*key))
        })
        .map(|(_, templates)| *templates)
        .unwrap_or(DEFAULT_TEMPLATES)
}

// ────────────────────────────────────────────────────────────────────────────
// Personalization tables
// ────────────────────────────────────────────────────────────────────────────

/// Weekly time commitment → timeline multiplier.
const TIME_MULTIPLIERS: &[(&str, f64)] = &[
    ("0-5 hours/week", 2.5),
    ("5-10 hours/week", 2.0),
    ("10-20 hours/week", 1.5),
    ("20-30 hours/week", 1.2),
    ("30+ hours/week", 1.0),
];

/// Multiplier applied when the commitment label is missing or unrecognized.
const DEFAULT_MULTIPLIER: f64 = 1.5;

/// Resolves a time-commitment label to a timeline multiplier.
/// Unrecognized labels silently get the moderate default.
pub fn time_multiplier(label: Option<&str>) -> f64 {
    let Some(label) = label else {
        return DEFAULT_MULTIPLIER;
    };
    let normalized = label.trim().to_lowercase();
    TIME_MULTIPLIERS
        .iter()
        .find(|(key, _)| *key == normalized || normalized.contains(*key) || key.contains(normalized.as_str()))
        .map(|(_, mult)| *mult)
        .unwrap_or(DEFAULT_MULTIPLIER)
}

/// Company size → focus phrase appended to milestone descriptions.
const SIZE_FOCUS: &[(&str, &str)] = &[
    (
        "startup",
        "In a startup environment, emphasize breadth: expect to wear many hats and own outcomes end to end.",
    ),
    (
        "mid",
        "At a mid-size company, balance individual depth with cross-team collaboration.",
    ),
    (
        "enterprise",
        "In an enterprise setting, focus on depth, process fluency, and operating at scale.",
    ),
    (
        "large",
        "In an enterprise setting, focus on depth, process fluency, and operating at scale.",
    ),
];

/// Focus phrase for a company-size label, if one matches. Unmatched sizes are
/// silently skipped.
pub fn company_size_focus(label: Option<&str>) -> Option<&'static str> {
    let normalized = label?.trim().to_lowercase();
    SIZE_FOCUS
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, focus)| *focus)
}

/// Current employment state → priority action phrases. Each priority becomes
/// an extra milestone prepended to the templated ones.
// "unemployed" must precede "employed": containment matching takes the first
// hit and "unemployed" contains "employed".
const STATE_PRIORITIES: &[(&str, &[&str])] = &[
    ("student", &["internship search", "foundational networking"]),
    ("unemployed", &["job search", "interview readiness"]),
    ("employed", &["professional networking", "side project"]),
    ("career break", &["skills refresh", "confidence rebuilding"]),
];

/// Priority actions for a current state: exact key first, then containment
/// either way. Empty when the state is missing or unrecognized.
pub fn state_priorities(state: Option<&str>) -> &'static [&'static str] {
    let Some(state) = state else {
        return &[];
    };
    let normalized = state.trim().to_lowercase();
    if normalized.is_empty() {
        return &[];
    }
    // Exact match first, so the plain "employed" label cannot be captured by
    // the "unemployed" entry via containment.
    if let Some((_, priorities)) = STATE_PRIORITIES.iter().find(|(key, _)| *key == normalized) {
        return *priorities;
    }
    STATE_PRIORITIES
        .iter()
        .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        .map(|(_, priorities)| *priorities)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_scientist_first_template_is_data_analysis_foundations() {
        let templates = templates_for_role("Data Scientist");
        assert_eq!(templates[0].title, "Data Analysis Foundations");
        assert_eq!(templates[0].timeline, "3 months");
    }

    #[test]
    fn test_role_matching_by_substring() {
        let templates = templates_for_role("Senior UX Designer");
        assert_eq!(templates[0].title, "Design Foundations");
    }

    #[test]
    fn test_unknown_role_gets_generic_three_template_set() {
        let templates = templates_for_role("astronaut");
        assert_eq!(templates.len(), 3);
        assert_eq!(templates[0].title, "Role Foundations");
    }

    #[test]
    fn test_all_templates_have_steps_and_parseable_timeline() {
        let all_roles = ROLE_TEMPLATES
            .iter()
            .map(|(_, t)| *t)
            .chain(std::iter::once(DEFAULT_TEMPLATES));
        for templates in all_roles {
            for template in templates {
                assert!(!template.steps.is_empty(), "{} has no steps", template.title);
                let leading = template.timeline.split_whitespace().next().unwrap();
                assert!(
                    leading.parse::<f64>().is_ok(),
                    "{} timeline not scalable: {}",
                    template.title,
                    template.timeline
                );
            }
        }
    }

    #[test]
    fn test_time_multiplier_extremes() {
        assert_eq!(time_multiplier(Some("0-5 hours/week")), 2.5);
        assert_eq!(time_multiplier(Some("30+ hours/week")), 1.0);
    }

    #[test]
    fn test_time_multiplier_default_for_unknown() {
        assert_eq!(time_multiplier(None), DEFAULT_MULTIPLIER);
        assert_eq!(time_multiplier(Some("whenever")), DEFAULT_MULTIPLIER);
    }

    #[test]
    fn test_company_size_focus_matching() {
        assert!(company_size_focus(Some("Startup (1-50)")).is_some());
        assert!(company_size_focus(Some("Large enterprise")).is_some());
        assert!(company_size_focus(Some("co-op")).is_none());
        assert!(company_size_focus(None).is_none());
    }

    #[test]
    fn test_state_priorities_matching() {
        assert_eq!(
            state_priorities(Some("Student")),
            &["internship search", "foundational networking"]
        );
        assert_eq!(
            state_priorities(Some("Employed, exploring a switch")).len(),
            2
        );
        assert!(state_priorities(Some("retired")).is_empty());
        assert!(state_priorities(None).is_empty());
    }

    #[test]
    fn test_unemployed_does_not_match_employed_entry() {
        assert_eq!(
            state_priorities(Some("Unemployed")),
            &["job search", "interview readiness"]
        );
    }

    #[test]
    fn test_plain_employed_matches_employed_entry() {
        // An exact key must beat containment: "unemployed" contains
        // "employed" and sits earlier in the table.
        assert_eq!(
            state_priorities(Some("Employed")),
            &["professional networking", "side project"]
        );
        assert_eq!(
            state_priorities(Some("  employed  ")),
            &["professional networking", "side project"]
        );
    }
}
