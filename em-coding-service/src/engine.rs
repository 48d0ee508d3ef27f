//! Three-axis E/M scoring and code selection.
//!
//! Pure function of the documentation text plus the marker tables in
//! [`crate::markers`]; deterministic, no shared state, never fails.

use crate::markers::{
    contains_any, ASSESSMENT_MARKERS, CHIEF_COMPLAINT_MARKERS, EXAM_MARKERS, HISTORY_MARKERS,
    MDM_ESCALATION_MARKERS, ORGAN_EXAM_RE, PLAN_MARKERS, ROS_PMH_MARKERS,
};
use crate::models::{AxisScore, EmCode, EmCodingResult};

/// Confidence floor for any recommendation.
pub const BASE_CONFIDENCE: u8 = 70;

/// Confidence ceiling for any recommendation.
pub const MAX_CONFIDENCE: u8 = 95;

const MARKER_BONUS: u8 = 5;
const LENGTH_BONUS: u8 = 10;
const LENGTH_BONUS_THRESHOLD: usize = 200;

const HISTORY_DESCRIPTIONS: [&str; 4] = [
    "Problem Focused",
    "Expanded Problem Focused",
    "Detailed",
    "Comprehensive",
];

const EXAM_DESCRIPTIONS: [&str; 4] = [
    "Problem Focused",
    "Expanded Problem Focused",
    "Detailed",
    "Comprehensive",
];

const MDM_DESCRIPTIONS: [&str; 4] = [
    "Straightforward",
    "Low Complexity",
    "Moderate Complexity",
    "High Complexity",
];

/// Compute an E/M code recommendation from raw encounter documentation.
///
/// Operates on the same raw text as the clinical analyzer but is
/// independent of its output. Empty or unstructured input leaves every
/// axis at level 1 and recommends 99211.
pub fn compute_em_coding(text: &str) -> EmCodingResult {
    let lower = text.to_lowercase();

    let history = score_history(&lower);
    let examination = score_examination(&lower);
    let medical_decision_making = score_medical_decision_making(&lower);

    let overall_level = history
        .level
        .max(examination.level)
        .max(medical_decision_making.level);

    let rationale = format!(
        "Documentation supports a {} history, {} examination, and {} medical decision making (overall level {}).",
        history.description.to_lowercase(),
        examination.description.to_lowercase(),
        medical_decision_making.description.to_lowercase(),
        overall_level,
    );

    EmCodingResult {
        recommended_code: select_code(overall_level),
        confidence: estimate_confidence(&lower, text.chars().count()),
        history,
        examination,
        medical_decision_making,
        rationale,
    }
}

/// History axis: level 2 needs both a chief-complaint marker and an HPI
/// element marker; level 3 additionally needs a ROS or PMH marker. Level 4
/// is not attainable from marker matching alone.
fn score_history(lower: &str) -> AxisScore {
    let mut level = 1;
    if contains_any(lower, CHIEF_COMPLAINT_MARKERS) && contains_any(lower, HISTORY_MARKERS) {
        level = 2;
        if contains_any(lower, ROS_PMH_MARKERS) {
            level = 3;
        }
    }
    axis(level, &HISTORY_DESCRIPTIONS)
}

/// Examination axis: level 2 for an examination or vital-signs marker;
/// level 3 for an organ-qualified examination phrase.
fn score_examination(lower: &str) -> AxisScore {
    let mut level = 1;
    if contains_any(lower, EXAM_MARKERS) {
        level = 2;
    }
    if ORGAN_EXAM_RE.is_match(lower) {
        level = 3;
    }
    axis(level, &EXAM_DESCRIPTIONS)
}

/// MDM axis: level 2 needs both an assessment and a plan marker; level 3
/// additionally needs a differential or follow-up marker.
fn score_medical_decision_making(lower: &str) -> AxisScore {
    let mut level = 1;
    if contains_any(lower, ASSESSMENT_MARKERS) && contains_any(lower, PLAN_MARKERS) {
        level = 2;
        if contains_any(lower, MDM_ESCALATION_MARKERS) {
            level = 3;
        }
    }
    axis(level, &MDM_DESCRIPTIONS)
}

fn axis(level: u8, descriptions: &[&str; 4]) -> AxisScore {
    let description = descriptions
        .get(usize::from(level.saturating_sub(1)))
        .copied()
        .unwrap_or(descriptions[0]);
    AxisScore {
        level,
        description: description.to_string(),
    }
}

/// Code selection keys off the strongest axis. Conventional E/M guidance
/// gates the code on the weakest axis instead; changing this alters billing
/// output for existing customers, so it ships as-is pending a product
/// decision.
fn select_code(overall_level: u8) -> EmCode {
    if overall_level >= 3 {
        EmCode::Em99213
    } else if overall_level >= 2 {
        EmCode::Em99212
    } else {
        EmCode::Em99211
    }
}

/// Base 70, +5 per structural section present, +10 for substantive length,
/// capped at 95.
fn estimate_confidence(lower: &str, char_len: usize) -> u8 {
    let mut score = BASE_CONFIDENCE;
    if contains_any(lower, CHIEF_COMPLAINT_MARKERS) {
        score += MARKER_BONUS;
    }
    if contains_any(lower, EXAM_MARKERS) {
        score += MARKER_BONUS;
    }
    if contains_any(lower, ASSESSMENT_MARKERS) {
        score += MARKER_BONUS;
    }
    if contains_any(lower, PLAN_MARKERS) {
        score += MARKER_BONUS;
    }
    if char_len > LENGTH_BONUS_THRESHOLD {
        score += LENGTH_BONUS;
    }
    score.min(MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SOAP_NOTE: &str = "Chief complaint: chest pain. Physical examination: lungs clear. \
                             Assessment: costochondritis. Plan: ibuprofen 600mg TID.";

    #[test]
    fn structured_soap_note_scores_level_two_across_axes() {
        let coding = compute_em_coding(SOAP_NOTE);

        assert_eq!(coding.history.level, 2);
        assert_eq!(coding.examination.level, 2);
        assert_eq!(coding.medical_decision_making.level, 2);
        assert_eq!(coding.recommended_code, EmCode::Em99212);
        assert_eq!(coding.confidence, 90);
    }

    #[test]
    fn empty_documentation_stays_at_level_one() {
        let coding = compute_em_coding("");

        assert_eq!(coding.history.level, 1);
        assert_eq!(coding.history.description, "Problem Focused");
        assert_eq!(coding.examination.level, 1);
        assert_eq!(coding.medical_decision_making.level, 1);
        assert_eq!(coding.medical_decision_making.description, "Straightforward");
        assert_eq!(coding.recommended_code, EmCode::Em99211);
        assert_eq!(coding.confidence, BASE_CONFIDENCE);
    }

    #[test]
    fn ros_documentation_raises_history_to_detailed() {
        let coding = compute_em_coding(
            "Chief complaint: cough. History of present illness: three days of symptoms. \
             Review of systems otherwise negative.",
        );
        assert_eq!(coding.history.level, 3);
        assert_eq!(coding.history.description, "Detailed");
    }

    #[test]
    fn organ_qualified_exam_raises_examination_to_detailed() {
        let coding =
            compute_em_coding("Vital signs stable. Cardiac examination reveals a regular rhythm.");
        assert_eq!(coding.examination.level, 3);
        assert_eq!(coding.recommended_code, EmCode::Em99213);
    }

    #[test]
    fn follow_up_raises_mdm_to_moderate() {
        let coding = compute_em_coding(
            "Assessment: pneumonia. Plan: azithromycin, follow-up in one week.",
        );
        assert_eq!(coding.medical_decision_making.level, 3);
        assert_eq!(coding.medical_decision_making.description, "Moderate Complexity");
    }

    #[test]
    fn adding_a_plan_never_lowers_mdm_or_code() {
        let without_plan = compute_em_coding("Assessment: pneumonia.");
        let with_plan = compute_em_coding("Assessment: pneumonia. Plan: azithromycin.");

        assert!(with_plan.medical_decision_making.level >= without_plan.medical_decision_making.level);
        assert!(with_plan.recommended_code.rank() >= without_plan.recommended_code.rank());
    }

    #[test]
    fn confidence_is_capped_at_ninety_five() {
        let long_note = format!(
            "Chief complaint: fatigue. {} Physical examination: unremarkable. \
             Assessment: anemia suspected. Plan: CBC and iron studies.",
            "Reports several weeks of progressive tiredness affecting work and sleep. ".repeat(4)
        );
        assert!(long_note.chars().count() > 200);

        let coding = compute_em_coding(&long_note);
        assert_eq!(coding.confidence, MAX_CONFIDENCE);
    }

    #[test]
    fn rationale_names_axis_descriptions_in_lowercase() {
        let coding = compute_em_coding(SOAP_NOTE);
        assert!(coding.rationale.contains("expanded problem focused history"));
        assert!(coding.rationale.contains("expanded problem focused examination"));
        assert!(coding.rationale.contains("low complexity medical decision making"));
        assert!(coding.rationale.contains("overall level 2"));
    }

    proptest! {
        #[test]
        fn confidence_stays_within_bounds(text in ".{0,600}") {
            let coding = compute_em_coding(&text);
            prop_assert!(coding.confidence >= BASE_CONFIDENCE);
            prop_assert!(coding.confidence <= MAX_CONFIDENCE);
        }

        #[test]
        fn coding_is_deterministic(text in ".{0,600}") {
            prop_assert_eq!(compute_em_coding(&text), compute_em_coding(&text));
        }

        #[test]
        fn axis_levels_stay_in_range(text in ".{0,600}") {
            let coding = compute_em_coding(&text);
            for axis in [&coding.history, &coding.examination, &coding.medical_decision_making] {
                prop_assert!((1..=4).contains(&axis.level));
            }
        }
    }
}
