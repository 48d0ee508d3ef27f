//! Documentation marker tables for E/M axis scoring.
//!
//! Markers are matched against the lowercased documentation text. Tables
//! are immutable module-scoped constants; the engine only reads them.

use lazy_static::lazy_static;
use regex::Regex;

/// Chief-complaint section markers.
pub const CHIEF_COMPLAINT_MARKERS: &[&str] =
    &["chief complaint", "cc:", "presenting complaint", "presents with"];

/// History-of-present-illness element markers. An HPI element word such as
/// a pain descriptor counts as history documentation.
pub const HISTORY_MARKERS: &[&str] = &[
    "history", "hpi", "onset", "duration", "started", "began", "pain", "symptom",
];

/// Review-of-systems / past-medical-history markers (history level 3).
pub const ROS_PMH_MARKERS: &[&str] = &[
    "review of systems",
    "ros:",
    "past medical history",
    "pmh",
    "denies",
];

/// Examination section and vital-signs markers.
pub const EXAM_MARKERS: &[&str] =
    &["physical exam", "examination", "vital signs", "vitals", "on exam"];

/// Assessment section markers.
pub const ASSESSMENT_MARKERS: &[&str] = &["assessment", "impression", "diagnosis"];

/// Plan section markers.
pub const PLAN_MARKERS: &[&str] = &["plan", "treatment", "recommend"];

/// Markers escalating medical decision-making to moderate complexity.
pub const MDM_ESCALATION_MARKERS: &[&str] =
    &["differential", "follow-up", "follow up", "return if", "refer"];

lazy_static! {
    /// Organ-qualified examination phrase, e.g. "cardiac examination" or
    /// "lung exam". A generic "physical examination: lungs clear" does not
    /// qualify; the organ word must qualify the examination noun.
    pub static ref ORGAN_EXAM_RE: Regex = Regex::new(
        r"(?i)\b(?:cardiac|cardiovascular|heart|lungs?|pulmonary|respiratory|abdomen|abdominal|neurologic(?:al)?|skin|heent)\s+exam(?:ination)?\b"
    )
    .unwrap();
}

/// True when the lowercased text contains any of the given markers.
pub fn contains_any(lower: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| lower.contains(marker))
}
