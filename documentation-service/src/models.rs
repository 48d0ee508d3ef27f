use chrono::{DateTime, Utc};
use clinical_analysis_service::ClinicalSummary;
use em_coding_service::EmCodingResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Merged analysis output for one encounter, handed to the persistence
/// layer as opaque structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncounterDocumentation {
    pub id: Uuid,
    pub summary: ClinicalSummary,
    /// Omitted when E/M coding is disabled by configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub em_coding: Option<EmCodingResult>,
    pub transcription_confidence: f32,
    pub transcription_duration: String,
    pub created_at: DateTime<Utc>,
}
