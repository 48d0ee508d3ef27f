//! Encounter Documentation Service
//!
//! Thin orchestration over the two analysis engines: given a transcription
//! result from the external speech-to-text provider, runs the clinical text
//! analyzer and the E/M coding engine on the same raw text and merges both
//! results into a single encounter-documentation aggregate for the
//! persistence layer.
//!
//! The service owns no storage schema, HTTP routes, or authentication; it
//! is invoked in-process by the request handler. Oversized input is
//! truncated rather than rejected. The only error sources are configuration
//! misuse and JSON serialization.
//!
//! # Example
//!
//! ```rust,no_run
//! use documentation_service::{DocumentationConfig, DocumentationService, TranscriptionOutput};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = DocumentationService::new(DocumentationConfig::from_env()?);
//!
//! let transcription = TranscriptionOutput {
//!     text: "Chief complaint: cough. Assessment: bronchitis. Plan: rest.".to_string(),
//!     confidence: 0.94,
//!     duration: "00:03:12".to_string(),
//! };
//!
//! let documentation = service.document_encounter(transcription).await?;
//! println!("Recommended code: {:?}", documentation.em_coding);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod transcription;

pub use config::*;
pub use error::*;
pub use models::*;
pub use service::*;
pub use transcription::*;
