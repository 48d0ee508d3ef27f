use serde::{Deserialize, Serialize};

use crate::error::{DocumentationError, DocumentationResult};

/// Encounter documentation service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationConfig {
    /// Attach an E/M coding block to each encounter document.
    pub em_coding_enabled: bool,
    /// Character cap applied to transcription text before analysis.
    /// Longer input is truncated, never rejected.
    pub max_text_chars: usize,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            em_coding_enabled: true,
            max_text_chars: 100_000,
        }
    }
}

impl DocumentationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> DocumentationResult<Self> {
        let em_coding_enabled = std::env::var("DOCS_EM_CODING_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        let max_text_chars = std::env::var("DOCS_MAX_TEXT_CHARS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100_000);

        if max_text_chars == 0 {
            return Err(DocumentationError::Config(
                "DOCS_MAX_TEXT_CHARS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            em_coding_enabled,
            max_text_chars,
        })
    }
}
