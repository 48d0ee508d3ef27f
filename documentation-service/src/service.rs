use clinical_analysis_service::analyze_clinical_text;
use em_coding_service::compute_em_coding;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::DocumentationConfig;
use crate::error::DocumentationResult;
use crate::models::EncounterDocumentation;
use crate::transcription::TranscriptionOutput;

/// Encounter documentation service
pub struct DocumentationService {
    config: DocumentationConfig,
}

impl DocumentationService {
    /// Create a new documentation service
    pub fn new(config: DocumentationConfig) -> Self {
        Self { config }
    }

    /// Analyze one encounter's transcription and assemble the merged
    /// documentation aggregate.
    ///
    /// Both engines run on the same raw text; the E/M engine does not
    /// consume the analyzer's output. Analysis itself cannot fail, so the
    /// only fallible part of this path is downstream serialization.
    pub async fn document_encounter(
        &self,
        transcription: TranscriptionOutput,
    ) -> DocumentationResult<EncounterDocumentation> {
        let text = truncate_chars(&transcription.text, self.config.max_text_chars);
        debug!(
            chars = text.chars().count(),
            truncated = text.len() < transcription.text.len(),
            "Analyzing encounter transcription"
        );

        let summary = analyze_clinical_text(text);
        let em_coding = self
            .config
            .em_coding_enabled
            .then(|| compute_em_coding(text));

        let documentation = EncounterDocumentation {
            id: Uuid::new_v4(),
            summary,
            em_coding,
            transcription_confidence: transcription.confidence,
            transcription_duration: transcription.duration,
            created_at: chrono::Utc::now(),
        };

        info!(
            encounter_doc_id = %documentation.id,
            diagnosis = %documentation.summary.diagnosis,
            recommended_code = documentation
                .em_coding
                .as_ref()
                .map(|coding| coding.recommended_code.as_str())
                .unwrap_or("n/a"),
            "Encounter documentation assembled"
        );

        Ok(documentation)
    }

    /// Serialize an encounter document for the external store.
    pub fn to_persistence_json(
        &self,
        documentation: &EncounterDocumentation,
    ) -> DocumentationResult<String> {
        Ok(serde_json::to_string(documentation)?)
    }
}

/// Truncate at a character boundary; never splits a UTF-8 sequence.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 10), "");
    }
}
