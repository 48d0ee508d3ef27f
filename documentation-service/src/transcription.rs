use serde::{Deserialize, Serialize};

/// Transcription result supplied by the external speech-to-text provider.
///
/// Only `text` feeds the analysis engines; `confidence` and `duration` are
/// provider metadata passed through onto the encounter document unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionOutput {
    pub text: String,
    pub confidence: f32,
    pub duration: String,
}
