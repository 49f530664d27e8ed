/// Headings that terminate any other section once one has started.
const MAJOR_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "references",
];

/// Slice out the body of the first section whose header line mentions one of
/// `keywords`.
///
/// Lines here are the document's physical lines (blanks kept), so the
/// fallback window tracks layout rather than content. The header itself is
/// any line containing a keyword, which means a sentence like "worked on
/// education software" can open the education section; acceptable noise for
/// keyword-driven segmentation.
pub fn extract_section(text: &str, keywords: &[&str]) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some(start) = lines
        .iter()
        .position(|line| contains_any(&line.to_lowercase(), keywords))
    else {
        return String::new();
    };

    // The section runs until the next major heading that is not one of our
    // own keywords. Without such a boundary it is capped ten lines past the
    // header.
    let end = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| {
            let lower = line.to_lowercase();
            contains_any(&lower, MAJOR_SECTIONS) && !contains_any(&lower, keywords)
        })
        .map(|(i, _)| i)
        .unwrap_or_else(|| (start + 10).min(lines.len()));

    lines[start + 1..end].join("\n").trim().to_string()
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work history", "employment"];

    #[test]
    fn body_runs_until_next_major_heading() {
        let text = "Jane Doe\n\nSummary line\n\nWork Experience\nBuilt things\nLed teams\nShipped stuff\nEducation\nBSc";
        assert_eq!(
            extract_section(text, EXPERIENCE_KEYWORDS),
            "Built things\nLed teams\nShipped stuff"
        );
    }

    #[test]
    fn own_keyword_does_not_terminate() {
        let text = "Experience\nten years of experience with Java\nEducation\nBSc";
        assert_eq!(
            extract_section(text, EXPERIENCE_KEYWORDS),
            "ten years of experience with Java"
        );
    }

    #[test]
    fn fallback_window_without_boundary() {
        let mut text = String::from("Employment\n");
        for i in 0..12 {
            text.push_str(&format!("job line {i}\n"));
        }
        let body = extract_section(&text, EXPERIENCE_KEYWORDS);
        // No terminating heading: the window ends ten lines past the header.
        assert_eq!(body.lines().count(), 9);
        assert!(body.starts_with("job line 0"));
        assert!(body.ends_with("job line 8"));
    }

    #[test]
    fn distant_boundary_beats_the_window() {
        let mut text = String::from("Work History\n");
        for i in 0..14 {
            text.push_str(&format!("role {i}\n"));
        }
        text.push_str("References\n");
        let body = extract_section(&text, EXPERIENCE_KEYWORDS);
        assert_eq!(body.lines().count(), 14);
    }

    #[test]
    fn missing_header_yields_empty() {
        assert_eq!(extract_section("no headings at all", EXPERIENCE_KEYWORDS), "");
    }

    #[test]
    fn blank_lines_count_toward_window_then_trim() {
        let text = "Experience\n\nShipped a compiler\n\n";
        assert_eq!(extract_section(text, EXPERIENCE_KEYWORDS), "Shipped a compiler");
    }
}
