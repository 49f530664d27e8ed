use std::sync::LazyLock;

use regex::Regex;

// All contact extractors scan the raw extracted text, not the lower-cased
// view, so link handles keep their original casing. First match wins; no
// match yields an empty string.

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,4}[-.\s]?)?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+").unwrap()
});

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:https?://)?(?:www\.)?[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.(?:com|net|org|io|co|me)\b(?:/[^\s]*)?").unwrap()
});

static ADDRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d{1,5}\s+(?:[A-Za-z0-9.'-]+\s+){0,4}?(?:street|avenue|road|boulevard|lane|drive|court|place|way|st|ave|rd|blvd|ln|dr|ct|pl)\b\.?[^,\n;]*",
    )
    .unwrap()
});

pub fn find_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// First phone-shaped digit run, reduced to `+` and digits. The pattern is
/// deliberately loose about separators, so the reduction is what makes the
/// stored value comparable across documents.
pub fn find_phone(text: &str) -> String {
    PHONE_RE
        .find(text)
        .map(|m| {
            m.as_str()
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect()
        })
        .unwrap_or_default()
}

pub fn find_linkedin(text: &str) -> String {
    LINKEDIN_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Coarse portfolio guess: any bare domain with a common suffix. This will
/// also hit the linkedin domain or an email's mail host when one of those
/// appears first in the document; callers get no de-duplication between the
/// two link extractors.
pub fn find_website(text: &str) -> String {
    WEBSITE_RE
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// House number + street-type word + the rest of the line up to a comma,
/// semicolon, or newline.
pub fn find_address(text: &str) -> String {
    ADDRESS_RE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_first_occurrence() {
        let text = "Contact: jane.doe@mail.com or backup j.doe@other.org";
        assert_eq!(find_email(text), "jane.doe@mail.com");
    }

    #[test]
    fn email_absent() {
        assert_eq!(find_email("no contact details here"), "");
    }

    #[test]
    fn phone_separators_stripped() {
        assert_eq!(find_phone("+1 555-123-4567"), "+15551234567");
        assert_eq!(find_phone("(216) 71 123456"), "21671123456");
        assert_eq!(find_phone("555.123.4567"), "5551234567");
    }

    #[test]
    fn phone_absent() {
        assert_eq!(find_phone("no digits at all"), "");
    }

    #[test]
    fn linkedin_with_and_without_scheme() {
        assert_eq!(
            find_linkedin("see https://www.linkedin.com/in/jane-doe for more"),
            "https://www.linkedin.com/in/jane-doe"
        );
        assert_eq!(
            find_linkedin("linkedin.com/in/jdoe42"),
            "linkedin.com/in/jdoe42"
        );
    }

    #[test]
    fn website_bare_domain() {
        assert_eq!(find_website("portfolio: janedoe.io"), "janedoe.io");
    }

    #[test]
    fn website_matches_linkedin_domain_when_first() {
        // Documented coarseness: the generic matcher does not exclude the
        // professional-network domain.
        let text = "linkedin.com/in/jdoe and janedoe.io";
        assert_eq!(find_website(text), "linkedin.com/in/jdoe");
    }

    #[test]
    fn address_stops_at_comma() {
        let text = "Address: 123 Main Street, Springfield";
        assert_eq!(find_address(text), "123 Main Street");
    }

    #[test]
    fn address_with_intermediate_words() {
        let text = "lives at 42 North Oak Avenue Apt 7";
        assert_eq!(find_address(text), "42 North Oak Avenue Apt 7");
    }

    #[test]
    fn address_absent() {
        assert_eq!(find_address("remote worker, no fixed address"), "");
    }
}
