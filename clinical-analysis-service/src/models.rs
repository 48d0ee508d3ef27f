use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Diagnosis placeholder used when no assessment clause is found.
pub const DIAGNOSIS_PENDING: &str = "Assessment pending — refer to full transcription";

/// Treatment placeholder used when no plan clause is found.
pub const TREATMENT_PENDING: &str = "Treatment plan pending — refer to full transcription";

/// Body system category for review-of-systems classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodySystem {
    Constitutional,
    Cardiovascular,
    Respiratory,
    Gastrointestinal,
    Neurological,
    Musculoskeletal,
    Psychiatric,
}

/// One candidate condition in a ranked differential diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialDiagnosis {
    pub condition: String,
    /// Independent likelihood estimate (0-100). Entries are not normalized
    /// and do not sum to 100.
    pub probability: u8,
    pub reasoning: String,
}

/// Structured clinical summary derived from an encounter transcription
///
/// A category appears in `review_of_systems` only when at least one of its
/// keywords matched; no category is ever present with an empty label list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalSummary {
    pub key_findings: Vec<String>,
    pub diagnosis: String,
    pub differential_diagnosis: Vec<DifferentialDiagnosis>,
    pub review_of_systems: BTreeMap<BodySystem, Vec<String>>,
    pub treatment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_with_camel_case_fields_and_lowercase_categories() {
        let mut review = BTreeMap::new();
        review.insert(BodySystem::Cardiovascular, vec!["Chest pain".to_string()]);

        let summary = ClinicalSummary {
            key_findings: vec!["Chief complaint: chest pain".to_string()],
            diagnosis: "costochondritis".to_string(),
            differential_diagnosis: vec![DifferentialDiagnosis {
                condition: "Costochondritis".to_string(),
                probability: 65,
                reasoning: "Reproducible chest wall tenderness.".to_string(),
            }],
            review_of_systems: review,
            treatment: "ibuprofen 600mg TID".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&summary).unwrap();
        assert!(json["keyFindings"].is_array());
        assert_eq!(json["differentialDiagnosis"][0]["probability"], 65);
        assert_eq!(json["reviewOfSystems"]["cardiovascular"][0], "Chest pain");
    }
}
