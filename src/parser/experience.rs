use std::sync::LazyLock;

use regex::Regex;

use super::sections::extract_section;

const EXPERIENCE_HEADERS: &[&str] = &["experience", "work history", "employment"];
const EDUCATION_HEADERS: &[&str] = &["education", "academic", "qualification", "degree"];

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\d+\s*(?:years?|yrs?)\s*(?:of\s*)?(?:experience|exp)").unwrap()
});

// Capitalized run followed by at/in/for, optionally introduced by "as":
// "worked as Senior Developer at Acme" captures "Senior Developer".
static ROLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:as\s+)?([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:at|in|for)\s+").unwrap()
});

/// Experience summary: an explicit "<N> years of experience" phrase anywhere
/// in the document wins; otherwise the experience section window, truncated.
pub fn find_experience(text: &str) -> String {
    if let Some(m) = YEARS_RE.find(text) {
        return m.as_str().to_string();
    }
    truncate_with_ellipsis(&extract_section(text, EXPERIENCE_HEADERS), 200)
}

pub fn find_education(text: &str) -> String {
    truncate_with_ellipsis(&extract_section(text, EDUCATION_HEADERS), 200)
}

/// Role guess, derived only from the experience summary. Empty experience
/// yields empty; the caller substitutes the sentinel.
pub fn find_role(experience: &str) -> String {
    if experience.is_empty() {
        return String::new();
    }
    if let Some(role) = ROLE_RE.captures(experience).and_then(|c| c.get(1)) {
        return role.as_str().to_string();
    }
    truncate_with_ellipsis(experience, 50)
}

fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

// ── Tests ──
