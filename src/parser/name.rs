use std::sync::LazyLock;

use regex::Regex;

static NAME_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());

/// Resolve the candidate's name, in precedence order: a plausible name line
/// near the top of the document, then a guess derived from the email local
/// part, then the literal "Unknown".
///
/// A qualifying line is one of the first 10 structural lines that, once
/// stripped to letters and spaces, splits into 2-4 words each shaped like
/// `Firstname`. That rejects ALL-CAPS banners, single words, and lines whose
/// punctuation residue left stray tokens.
pub fn resolve_name(lines: &[String], email: &str) -> String {
    for line in lines.iter().take(10) {
        let cleaned: String = line
            .chars()
            .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
            .collect();
        let cleaned = cleaned.trim();
        let words: Vec<&str> = cleaned.split_whitespace().collect();
        if (2..=4).contains(&words.len()) && words.iter().all(|w| NAME_WORD_RE.is_match(w)) {
            return words.join(" ");
        }
    }

    if !email.is_empty() {
        if let Some(name) = name_from_email(email) {
            return name;
        }
    }

    "Unknown".to_string()
}

/// "jane.doe@mail.com" -> "Jane Doe". First two segments of the local part,
/// split on dots and underscores.
fn name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next()?;
    let parts: Vec<String> = local
        .split(['.', '_'])
        .filter(|p| !p.is_empty())
        .take(2)
        .map(capitalize)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_qualifying_line_wins() {
        let input = lines(&["CURRICULUM VITAE", "Jane Marie Doe", "Senior Developer"]);
        assert_eq!(resolve_name(&input, ""), "Jane Marie Doe");
    }

    #[test]
    fn punctuation_stripped_before_matching() {
        let input = lines(&["Jane Doe, 2024"]);
        assert_eq!(resolve_name(&input, ""), "Jane Doe");
    }

    #[test]
    fn five_word_line_rejected() {
        let input = lines(&["One Two Three Four Five"]);
        assert_eq!(resolve_name(&input, ""), "Unknown");
    }

    #[test]
    fn scan_stops_after_ten_lines() {
        let mut raw: Vec<String> = (0..10).map(|i| format!("line{i}")).collect();
        raw.push("Jane Doe".to_string());
        assert_eq!(resolve_name(&raw, ""), "Unknown");
    }

    #[test]
    fn email_fallback_capitalizes_segments() {
        assert_eq!(resolve_name(&[], "user.name@x.com"), "User Name");
        assert_eq!(resolve_name(&[], "JANE_DOE@x.com"), "Jane Doe");
    }

    #[test]
    fn email_fallback_single_segment() {
        assert_eq!(resolve_name(&[], "bob@x.com"), "Bob");
    }

    #[test]
    fn email_fallback_keeps_first_two_segments() {
        assert_eq!(resolve_name(&[], "a.b.c@x.com"), "A B");
    }

    #[test]
    fn nothing_found_is_unknown() {
        assert_eq!(resolve_name(&[], ""), "Unknown");
    }
}
