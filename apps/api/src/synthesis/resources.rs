//! Resource tables — per-role learning resources keyed by category, plus the
//! budget-tier filter.
//!
//! Category selection: milestone indices 0–3 map onto `CATEGORY_FRAGMENTS` in
//! order; later milestones match a fragment against their title. The generic
//! default table backs any role or category miss. All misses are silent.

/// A static resource definition. Instantiated into `models::Resource` with a
/// fresh id at synthesis time.
#[derive(Debug, Clone, Copy)]
pub struct ResourceDef {
    pub name: &'static str,
    pub url: Option<&'static str>,
    pub is_paid: bool,
}

const fn res(name: &'static str, url: Option<&'static str>, is_paid: bool) -> ResourceDef {
    ResourceDef { name, url, is_paid }
}

type Category = (&'static str, &'static [ResourceDef]);

/// Ordered category-name fragments. Milestone index 0 gets the category whose
/// name contains `"foundation"`, index 1 `"technical"`, and so on.
pub const CATEGORY_FRAGMENTS: [&str; 4] = ["foundation", "technical", "portfolio", "interview"];

const SOFTWARE_ENGINEER: &[Category] = &[
    (
        "Foundations",
        &[
            res("The Odin Project", Some("https://www.theodinproject.com"), false),
            res("CS50x", Some("https://cs50.harvard.edu/x/"), false),
            res("Exercism", Some("https://exercism.org"), false),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("Designing Data-Intensive Applications", None, true),
            res("Frontend Masters", Some("https://frontendmasters.com"), true),
            res("roadmap.sh", Some("https://roadmap.sh"), false),
        ],
    ),
    (
        "Portfolio",
        &[
            res("GitHub Pages", Some("https://pages.github.com"), false),
            res("Good First Issues", Some("https://goodfirstissues.com"), false),
        ],
    ),
    (
        "Interview Prep",
        &[
            res("LeetCode Premium", Some("https://leetcode.com"), true),
            res("NeetCode", Some("https://neetcode.io"), false),
            res("Pramp", Some("https://www.pramp.com"), false),
        ],
    ),
];

const DATA_SCIENTIST: &[Category] = &[
    (
        "Foundations",
        &[
            res("Kaggle Learn", Some("https://www.kaggle.com/learn"), false),
            res("Mode SQL Tutorial", Some("https://mode.com/sql-tutorial/"), false),
            res("Python for Data Analysis", None, true),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("Andrew Ng's Machine Learning Specialization", Some("https://www.coursera.org"), true),
            res("StatQuest", Some("https://www.youtube.com/@statquest"), false),
            res("fast.ai", Some("https://www.fast.ai"), false),
        ],
    ),
    (
        "Portfolio",
        &[
            res("Kaggle Competitions", Some("https://www.kaggle.com/competitions"), false),
            res("Streamlit Community Cloud", Some("https://streamlit.io/cloud"), false),
        ],
    ),
    (
        "Interview Prep",
        &[
            res("StrataScratch", Some("https://www.stratascratch.com"), true),
            res("Ace the Data Science Interview", None, true),
            res("DataLemur", Some("https://datalemur.com"), false),
        ],
    ),
];

const PRODUCT_MANAGER: &[Category] = &[
    (
        "Foundations",
        &[
            res("Inspired by Marty Cagan", None, true),
            res("Lenny's Newsletter", Some("https://www.lennysnewsletter.com"), false),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("SQL for Product Managers", Some("https://mode.com/sql-tutorial/"), false),
            res("Reforge", Some("https://www.reforge.com"), true),
        ],
    ),
    (
        "Portfolio",
        &[
            res("Product Teardown Templates", Some("https://www.notion.so/templates"), false),
        ],
    ),
    (
        "Interview Prep",
        &[
            res("Exponent PM Course", Some("https://www.tryexponent.com"), true),
            res("Decode and Conquer", None, true),
            res("PM Exercises", Some("https://www.productmanagementexercises.com"), false),
        ],
    ),
];

const UX_DESIGNER: &[Category] = &[
    (
        "Foundations",
        &[
            res("Google UX Design Certificate", Some("https://www.coursera.org"), true),
            res("Laws of UX", Some("https://lawsofux.com"), false),
            res("Refactoring UI", None, true),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("Figma Learn", Some("https://www.figma.com/resource-library/"), false),
            res("Nielsen Norman Group Articles", Some("https://www.nngroup.com/articles/"), false),
        ],
    ),
    (
        "Portfolio",
        &[
            res("Dribbble", Some("https://dribbble.com"), false),
            res("Framer Sites", Some("https://www.framer.com"), true),
        ],
    ),
    (
        "Interview Prep",
        &[
            res("ADPList Mentorship", Some("https://adplist.org"), false),
            res("Solving Product Design Exercises", None, true),
        ],
    ),
];

const DEVOPS_ENGINEER: &[Category] = &[
    (
        "Foundations",
        &[
            res("Linux Journey", Some("https://linuxjourney.com"), false),
            res("The Linux Command Line", None, false),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("Kubernetes the Hard Way", Some("https://github.com/kelseyhightower/kubernetes-the-hard-way"), false),
            res("A Cloud Guru", Some("https://www.pluralsight.com/cloud-guru"), true),
            res("Terraform Tutorials", Some("https://developer.hashicorp.com/terraform/tutorials"), false),
        ],
    ),
    (
        "Portfolio",
        &[
            res("GitHub Actions Docs", Some("https://docs.github.com/actions"), false),
            res("Grafana Cloud Free Tier", Some("https://grafana.com"), false),
        ],
    ),
    (
        "Interview Prep",
        &[
            res("SadServers", Some("https://sadservers.com"), false),
            res("Site Reliability Engineering (book)", Some("https://sre.google/books/"), false),
        ],
    ),
];

/// Generic fallback resources, keyed by the same category fragments.
const DEFAULT_RESOURCES: &[Category] = &[
    (
        "Foundations",
        &[
            res("Coursera", Some("https://www.coursera.org"), true),
            res("Khan Academy", Some("https://www.khanacademy.org"), false),
        ],
    ),
    (
        "Technical Skills",
        &[
            res("edX", Some("https://www.edx.org"), false),
            res("Udemy", Some("https://www.udemy.com"), true),
        ],
    ),
    (
        "Portfolio",
        &[res("LinkedIn", Some("https://www.linkedin.com"), false)],
    ),
    (
        "Interview Prep",
        &[
            res("Glassdoor Interview Questions", Some("https://www.glassdoor.com"), false),
            res("Big Interview", Some("https://biginterview.com"), true),
        ],
    ),
];

const ROLE_RESOURCES: &[(&str, &[Category])] = &[
    ("software engineer", SOFTWARE_ENGINEER),
    ("data scientist", DATA_SCIENTIST),
    ("product manager", PRODUCT_MANAGER),
    ("ux designer", UX_DESIGNER),
    ("devops engineer", DEVOPS_ENGINEER),
];

/// Resource categories for a role, falling back to the generic table.
pub fn resources_for_role(desired_role: &str) -> &'static [Category] {
    let normalized = desired_role.trim().to_lowercase();
    if normalized.is_empty() {
        return DEFAULT_RESOURCES;
    }
    ROLE_RESOURCES
        .iter()
        .find(|(key, _)| *key == normalized)
        .or_else(|| {
            ROLE_RESOURCES
                .iter()
                .find(|(key, _)| key.contains(&normalized) || normalized.contains(*key))
        })
        .map(|(_, categories)| *categories)
        .unwrap_or(DEFAULT_RESOURCES)
}

/// Picks the category for a milestone: the first four indices map onto
/// `CATEGORY_FRAGMENTS` in order; later milestones match a fragment against
/// the milestone title. Falls back to the default table, then to nothing.
pub fn category_for_milestone(
    categories: &'static [Category],
    index: usize,
    title: &str,
) -> &'static [ResourceDef] {
    let fragment = if index < CATEGORY_FRAGMENTS.len() {
        Some(CATEGORY_FRAGMENTS[index])
    } else {
        let title_lower = title.to_lowercase();
        CATEGORY_FRAGMENTS
            .iter()
            .copied()
            .find(|frag| title_lower.contains(frag))
    };
    let Some(fragment) = fragment else {
        return &[];
    };

    find_category(categories, fragment)
        .or_else(|| find_category(DEFAULT_RESOURCES, fragment))
        .unwrap_or(&[])
}

fn find_category(categories: &'static [Category], fragment: &str) -> Option<&'static [ResourceDef]> {
    categories
        .iter()
        .find(|(name, _)| name.to_lowercase().contains(fragment))
        .map(|(_, defs)| *defs)
}

// ────────────────────────────────────────────────────────────────────────────
// Budget tiers
// ────────────────────────────────────────────────────────────────────────────

/// Maximum monthly spend for a budget label. `Some(0)` admits only free
/// resources; `None` (and any positive cap) admits everything.
pub fn budget_max_price(label: Option<&str>) -> Option<u32> {
    let normalized = label?.trim().to_lowercase();
    if normalized.contains("free") || normalized.contains("no budget") {
        Some(0)
    } else if normalized.contains("200+") || normalized.contains("unlimited") {
        None
    } else if normalized.contains("200") {
        Some(200)
    } else if normalized.contains("50") {
        Some(50)
    } else {
        None
    }
}

/// Budget filter: a zero cap passes only unpaid resources; any positive or
/// absent cap passes everything.
pub fn passes_budget(def: &ResourceDef, max_price: Option<u32>) -> bool {
    match max_price {
        Some(0) => !def.is_paid,
        _ => true,
    }
}
