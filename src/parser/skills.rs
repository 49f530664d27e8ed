/// Flat skills vocabulary, stored lower-cased. Declaration order is the
/// output order, so additions belong at the end of the relevant group.
pub const SKILLS_VOCABULARY: &[&str] = &[
    "javascript",
    "typescript",
    "react",
    "vue",
    "angular",
    "node.js",
    "python",
    "java",
    "c++",
    "c#",
    "html",
    "css",
    "sass",
    "bootstrap",
    "tailwind",
    "mongodb",
    "mysql",
    "postgresql",
    "firebase",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "git",
    "github",
    "gitlab",
    "jenkins",
    "ci/cd",
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
    "adobe",
    "canva",
    "indesign",
    "excel",
    "powerpoint",
    "word",
    "google analytics",
    "seo",
    "sem",
    "social media",
    "project management",
    "agile",
    "scrum",
    "jira",
    "trello",
    "slack",
    "teams",
    "flutter",
    "react native",
    "graphql",
    "rest",
    "api",
    "web development",
    "mobile development",
    "data analysis",
    "machine learning",
    "artificial intelligence",
    "data science",
    "big data",
    "cloud computing",
    "cybersecurity",
    "penetration testing",
    "ethical hacking",
    "network security",
    "information security",
    "business analysis",
    "ux design",
    "ui design",
    "graphic design",
    "content creation",
    "copywriting",
    "video editing",
    "audio editing",
    "public speaking",
    "communication",
    "negotiation",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
];

/// Spoken languages recognized by the language scan.
pub const LANGUAGES: &[&str] = &[
    "english",
    "french",
    "arabic",
    "spanish",
    "german",
    "italian",
    "portuguese",
    "dutch",
    "russian",
    "turkish",
    "chinese",
    "japanese",
    "korean",
    "hindi",
];

/// A line is treated as a certification entry when it carries one of these.
pub const CERT_SIGNALS: &[&str] = &[
    "certified",
    "certification",
    "certificate",
    "licensed",
    "accredited",
];

/// All vocabulary skills present in the text, in vocabulary order, uncapped.
/// Containment matching: "word" will hit inside "wordpress".
pub fn match_skills(scan_lower: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|skill| scan_lower.contains(**skill))
        .map(|skill| skill.to_string())
        .collect()
}

/// Spoken languages present in the text, first letter capitalized.
pub fn match_languages(scan_lower: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|lang| scan_lower.contains(**lang))
        .map(|lang| capitalize_first(lang))
        .collect()
}

/// Structural lines that look like certification entries, cleaned down to
/// alphanumerics, spaces, and hyphens. Lines whose cleaned form falls outside
/// (3, 100) chars are dropped; at most five survive, in document order.
pub fn find_certifications(lines: &[String], signals: &[&str]) -> Vec<String> {
    let mut found = Vec::new();
    for line in lines {
        let lower = line.to_lowercase();
        if !signals.iter().any(|s| lower.contains(*s)) {
            continue;
        }
        let cleaned: String = line
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
            .collect();
        let cleaned = cleaned.trim().to_string();
        let len = cleaned.chars().count();
        if len > 3 && len < 100 {
            found.push(cleaned);
            if found.len() == 5 {
                break;
            }
        }
    }
    found
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

// ── Tests ──
