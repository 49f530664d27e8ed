//! Keyword-driven classification over the lower-cased document text.
//!
//! Matching is substring containment, not tokenized: a keyword can hit inside
//! a larger word. Both vocabularies are ordered tables passed into pure
//! functions so they can be swapped in tests.

/// Department signal keywords, evaluated in declaration order. Each keyword
/// counts once as a presence flag; the strictly greatest total wins and ties
/// keep the earlier department.
pub const DEPARTMENT_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Engineering",
        &[
            "engineer",
            "developer",
            "software",
            "programming",
            "coding",
            "technical",
            "backend",
            "frontend",
            "fullstack",
            "devops",
            "python",
            "react",
            "docker",
        ],
    ),
    (
        "Design",
        &[
            "designer",
            "ui",
            "ux",
            "graphic",
            "visual",
            "creative",
            "photoshop",
            "illustrator",
            "figma",
        ],
    ),
    (
        "Marketing",
        &[
            "marketing",
            "digital marketing",
            "seo",
            "social media",
            "advertising",
            "campaign",
            "brand",
        ],
    ),
    (
        "Sales",
        &[
            "sales",
            "business development",
            "account manager",
            "customer relations",
            "revenue",
        ],
    ),
    (
        "HR",
        &[
            "human resources",
            "hr",
            "recruitment",
            "talent acquisition",
            "people operations",
        ],
    ),
    (
        "Finance",
        &[
            "finance",
            "accounting",
            "financial",
            "budget",
            "audit",
            "controller",
            "analyst",
        ],
    ),
    (
        "Operations",
        &[
            "operations",
            "logistics",
            "supply chain",
            "project management",
            "process improvement",
        ],
    ),
];

/// Employment-status signals, evaluated in declaration order; the first
/// status with any keyword hit wins. "Pending" doubles as the review default
/// when nothing matched.
pub const STATUS_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Employed",
        &[
            "currently working",
            "currently employed",
            "present",
            "current position",
        ],
    ),
    (
        "Open to Work",
        &[
            "open to work",
            "seeking",
            "looking for",
            "available immediately",
        ],
    ),
    ("Student", &["student", "undergraduate", "intern"]),
];

pub fn classify_department(scan_lower: &str, table: &[(&str, &[&str])]) -> String {
    let mut best = "General";
    let mut best_count = 0;
    for &(department, keywords) in table {
        let count = keywords.iter().filter(|k| scan_lower.contains(*k)).count();
        if count > best_count {
            best_count = count;
            best = department;
        }
    }
    best.to_string()
}

pub fn classify_status(scan_lower: &str, table: &[(&str, &[&str])]) -> String {
    for &(status, keywords) in table {
        if keywords.iter().any(|k| scan_lower.contains(*k)) {
            return status.to_string();
        }
    }
    "Pending".to_string()
}

// ── Tests ──
