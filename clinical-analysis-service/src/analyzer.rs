//! Rule-based clinical text analysis.
//!
//! Pure function of the input text plus the static tables in
//! [`crate::vocabulary`]: no I/O, no shared state, deterministic for
//! identical input. Every step falls back to a default instead of failing.

use std::collections::BTreeMap;

use crate::models::{
    BodySystem, ClinicalSummary, DifferentialDiagnosis, DIAGNOSIS_PENDING, TREATMENT_PENDING,
};
use crate::patterns::{
    extract_assessment_clause, extract_likely_clause, extract_plan_clause,
    extract_supportive_care_clause, FINDING_EXTRACTORS,
};
use crate::vocabulary::{
    DEFAULT_DIFFERENTIAL, DIFFERENTIAL_TRIGGERS, KEY_PHRASE_MIN_COUNT, KEY_PHRASE_MIN_LEN,
    KEY_PHRASE_STOPWORDS, MAX_DIFFERENTIAL_ENTRIES, MAX_KEY_FINDINGS, ROS_KEYWORDS,
};

/// Analyze a raw encounter transcription into a structured clinical summary.
///
/// Accepts arbitrary text, including the empty string; sparse input yields a
/// summary composed of placeholder values and whatever keyword matches were
/// found.
pub fn analyze_clinical_text(text: &str) -> ClinicalSummary {
    let lower = text.to_lowercase();

    ClinicalSummary {
        key_findings: extract_key_findings(text),
        diagnosis: extract_diagnosis(text),
        differential_diagnosis: build_differential(&lower),
        review_of_systems: classify_review_of_systems(&lower),
        treatment: extract_treatment(text),
    }
}

/// Structural pattern findings first, then bullet-prefixed key phrases,
/// capped at [`MAX_KEY_FINDINGS`].
fn extract_key_findings(text: &str) -> Vec<String> {
    let mut findings: Vec<String> = FINDING_EXTRACTORS
        .iter()
        .filter_map(|extract| extract(text))
        .collect();

    for phrase in derive_key_phrases(text) {
        if findings.len() >= MAX_KEY_FINDINGS {
            break;
        }
        let already_covered = findings
            .iter()
            .any(|finding| finding.to_lowercase().contains(&phrase));
        if !already_covered {
            findings.push(format!("• {phrase}"));
        }
    }

    findings.truncate(MAX_KEY_FINDINGS);
    findings
}

/// Frequent non-trivial tokens, in first-appearance order.
///
/// Stands in for an external key-phrase extractor: lowercased alphabetic
/// tokens of at least [`KEY_PHRASE_MIN_LEN`] characters, outside the
/// stopword list, occurring at least [`KEY_PHRASE_MIN_COUNT`] times.
fn derive_key_phrases(text: &str) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for raw in text.split(|c: char| !c.is_alphabetic()) {
        if raw.chars().count() < KEY_PHRASE_MIN_LEN {
            continue;
        }
        let token = raw.to_lowercase();
        if KEY_PHRASE_STOPWORDS.contains(&token.as_str()) {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == token) {
            Some((_, count)) => *count += 1,
            None => counts.push((token, 1)),
        }
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count >= KEY_PHRASE_MIN_COUNT)
        .map(|(token, _)| token)
        .collect()
}

/// Labeled assessment clause, then "likely ..." clause, then placeholder.
fn extract_diagnosis(text: &str) -> String {
    extract_assessment_clause(text)
        .or_else(|| extract_likely_clause(text))
        .unwrap_or_else(|| DIAGNOSIS_PENDING.to_string())
}

/// First matching trigger keyword contributes its full candidate list;
/// multi-symptom presentations are not merged.
fn build_differential(lower: &str) -> Vec<DifferentialDiagnosis> {
    let candidates = DIFFERENTIAL_TRIGGERS
        .iter()
        .find(|(trigger, _)| lower.contains(trigger))
        .map(|(_, candidates)| *candidates)
        .unwrap_or(DEFAULT_DIFFERENTIAL);

    let mut entries: Vec<DifferentialDiagnosis> = candidates
        .iter()
        .map(|candidate| DifferentialDiagnosis {
            condition: candidate.condition.to_string(),
            probability: candidate.probability,
            reasoning: candidate.reasoning.to_string(),
        })
        .collect();

    entries.sort_by(|a, b| b.probability.cmp(&a.probability));
    entries.truncate(MAX_DIFFERENTIAL_ENTRIES);
    entries
}

/// A body system appears in the map only when at least one keyword matched.
fn classify_review_of_systems(lower: &str) -> BTreeMap<BodySystem, Vec<String>> {
    let mut review = BTreeMap::new();

    for (system, keywords) in ROS_KEYWORDS {
        let mut labels: Vec<String> = Vec::new();
        for (keyword, label) in *keywords {
            if lower.contains(keyword) && !labels.iter().any(|seen| seen == label) {
                labels.push((*label).to_string());
            }
        }
        if !labels.is_empty() {
            review.insert(*system, labels);
        }
    }

    review
}

/// Labeled plan clause, then the supportive-care clause, then placeholder.
fn extract_treatment(text: &str) -> String {
    extract_plan_clause(text)
        .or_else(|| extract_supportive_care_clause(text))
        .unwrap_or_else(|| TREATMENT_PENDING.to_string())
}
