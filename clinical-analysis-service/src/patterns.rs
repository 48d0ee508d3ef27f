//! Structural pattern extractors over raw transcription text.
//!
//! Each extractor is a standalone match-or-`None` function so it can be
//! tested in isolation; the analyzer evaluates them in a fixed order.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CHIEF_COMPLAINT_RE: Regex =
        Regex::new(r"(?i)chief complaint\s*[:\-]?\s*([^.\n]+)").unwrap();
    static ref VITALS_STABLE_RE: Regex =
        Regex::new(r"(?i)vital signs?[^.\n]*stable").unwrap();
    static ref PHYSICAL_EXAM_RE: Regex =
        Regex::new(r"(?i)physical exam(?:ination)?\s*[:\-]?\s*([^.\n]+)").unwrap();
    static ref ASSESSMENT_RE: Regex =
        Regex::new(r"(?i)(?:assessment|diagnosis|impression)\s*[:\-]\s*([^.\n]+)").unwrap();
    static ref LIKELY_RE: Regex =
        Regex::new(r"(?i)\blikely\s+([^.,\n]+)").unwrap();
    static ref PLAN_RE: Regex =
        Regex::new(r"(?is)\b(?:plan|treatment|recommend(?:ations?)?)\s*[:\-]\s*(.+)\z").unwrap();
    static ref SUPPORTIVE_CARE_RE: Regex =
        Regex::new(r"(?i)(supportive care[^.\n]*)").unwrap();
}

/// Ordered structural finding extractors. Order here is output order.
pub const FINDING_EXTRACTORS: &[fn(&str) -> Option<String>] = &[
    extract_chief_complaint_finding,
    extract_vitals_finding,
    extract_exam_finding,
];

/// "Chief complaint: ..." clause as a finding.
pub fn extract_chief_complaint_finding(text: &str) -> Option<String> {
    CHIEF_COMPLAINT_RE
        .captures(text)
        .map(|caps| format!("Chief complaint: {}", caps[1].trim()))
}

/// "Vital signs ... stable" phrase as a finding.
pub fn extract_vitals_finding(text: &str) -> Option<String> {
    VITALS_STABLE_RE
        .find(text)
        .map(|_| "Vital signs stable".to_string())
}

/// "Physical examination: ..." clause as a finding.
pub fn extract_exam_finding(text: &str) -> Option<String> {
    PHYSICAL_EXAM_RE
        .captures(text)
        .map(|caps| format!("Examination: {}", caps[1].trim()))
}

/// Labeled assessment/diagnosis/impression clause.
pub fn extract_assessment_clause(text: &str) -> Option<String> {
    ASSESSMENT_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// "likely <condition>" clause, prefixed for display.
pub fn extract_likely_clause(text: &str) -> Option<String> {
    LIKELY_RE
        .captures(text)
        .map(|caps| format!("Likely {}", caps[1].trim()))
}

/// Labeled plan/treatment clause, capturing through end of input.
pub fn extract_plan_clause(text: &str) -> Option<String> {
    PLAN_RE.captures(text).map(|caps| caps[1].trim().to_string())
}

/// "supportive care ..." clause through end of sentence.
pub fn extract_supportive_care_clause(text: &str) -> Option<String> {
    SUPPORTIVE_CARE_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chief_complaint_clause_is_case_insensitive() {
        let finding = extract_chief_complaint_finding("CHIEF COMPLAINT: shortness of breath.");
        assert_eq!(finding.as_deref(), Some("Chief complaint: shortness of breath"));
    }

    #[test]
    fn vitals_finding_requires_stable() {
        assert!(extract_vitals_finding("Vital signs within normal limits and stable.").is_some());
        assert!(extract_vitals_finding("Vital signs: BP 180/110.").is_none());
    }

    #[test]
    fn assessment_clause_requires_label_separator() {
        assert_eq!(
            extract_assessment_clause("Assessment: acute bronchitis. Plan: rest.").as_deref(),
            Some("acute bronchitis")
        );
        assert!(extract_assessment_clause("no formal assessment was documented").is_none());
    }

    #[test]
    fn likely_clause_stops_at_punctuation() {
        assert_eq!(
            extract_likely_clause("Symptoms are likely viral pharyngitis, will recheck.").as_deref(),
            Some("Likely viral pharyngitis")
        );
    }

    #[test]
    fn plan_clause_captures_to_end_of_input() {
        let clause = extract_plan_clause("Assessment: GERD. Plan: omeprazole 20mg daily.\nReturn in 4 weeks.");
        assert_eq!(clause.as_deref(), Some("omeprazole 20mg daily.\nReturn in 4 weeks."));
    }

    #[test]
    fn recommend_label_is_a_plan_clause() {
        let clause = extract_plan_clause("Assessment: viral URI. Recommend: rest and fluids.");
        assert_eq!(clause.as_deref(), Some("rest and fluids."));

        let clause = extract_plan_clause("Recommendations: increase fluid intake.");
        assert_eq!(clause.as_deref(), Some("increase fluid intake."));
    }

    #[test]
    fn supportive_care_clause_stops_at_sentence_end() {
        let clause = extract_supportive_care_clause("Advised supportive care with fluids and rest. Return if worse.");
        assert_eq!(clause.as_deref(), Some("supportive care with fluids and rest"));
    }
}
