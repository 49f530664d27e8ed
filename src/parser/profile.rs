use serde::{Deserialize, Serialize};

/// Structured result of one extraction pass. Every field is always present:
/// code paths that found nothing resolve to a sentinel default instead of an
/// absent value, so consumers never branch on missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Vocabulary skills found in the text, vocabulary order, at most 10.
    pub skills: Vec<String>,
    pub experience: String,
    /// At most 200 chars plus an ellipsis marker when truncated.
    pub education: String,
    /// The loader's output, verbatim. Kept so profiles can be recomputed
    /// when vocabularies change, without re-reading the source document.
    pub raw_text: String,
    pub role: String,
    /// Comma-joined `skills`, or "Not specified".
    pub skills_summary: String,
    pub status: String,
    pub address: String,
    pub linkedin: String,
    pub portfolio: String,
    /// At most 5 entries, document order.
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub availability: String,
    pub salary: String,
    pub notes: String,
}
