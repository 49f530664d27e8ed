/// Read-only derived views of one document's extracted text.
///
/// `scan_lower` is the whole text lower-cased in one piece, so keyword and
/// multi-line pattern checks run against it without re-allocating per probe.
/// `lines` keeps the document's structural shape: trimmed, blank lines
/// dropped, original order preserved. Built once per extraction call and
/// never mutated.
pub struct NormalizedView {
    pub scan_lower: String,
    pub lines: Vec<String>,
}

pub fn normalize(text: &str) -> NormalizedView {
    NormalizedView {
        scan_lower: text.to_lowercase(),
        lines: text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_whole_text() {
        let v = normalize("John SMITH\nSenior Developer");
        assert_eq!(v.scan_lower, "john smith\nsenior developer");
    }

    #[test]
    fn lines_trimmed_and_blanks_dropped() {
        let v = normalize("  John Smith  \n\n   \nDeveloper\n");
        assert_eq!(v.lines, vec!["John Smith", "Developer"]);
    }

    #[test]
    fn empty_text() {
        let v = normalize("");
        assert!(v.scan_lower.is_empty());
        assert!(v.lines.is_empty());
    }

    #[test]
    fn order_preserved() {
        let v = normalize("a\n\nb\nc");
        assert_eq!(v.lines, vec!["a", "b", "c"]);
    }
}
