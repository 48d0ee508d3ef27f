//! Clinical Text Analysis for Encounter Documentation
//!
//! Turns a raw encounter transcription into a structured clinical summary:
//! - Key findings extracted from structural documentation patterns
//! - A working diagnosis from assessment/impression clauses
//! - A ranked differential diagnosis from symptom trigger tables
//! - A review-of-systems breakdown grouped by body system
//! - A treatment statement from plan/treatment clauses
//!
//! The analyzer is rule-based: ordered pattern extractors over the raw text
//! plus immutable keyword tables. Every step is match-or-default and never
//! fails. Sparse or empty input degrades to placeholder values.
//!
//! # Example
//!
//! ```rust
//! use clinical_analysis_service::analyze_clinical_text;
//!
//! let note = "Chief complaint: chest pain. Assessment: costochondritis. \
//!             Plan: ibuprofen 600mg TID.";
//! let summary = analyze_clinical_text(note);
//!
//! assert_eq!(summary.diagnosis, "costochondritis");
//! assert!(!summary.differential_diagnosis.is_empty());
//! ```

pub mod analyzer;
pub mod models;
pub mod patterns;
pub mod vocabulary;

pub use analyzer::*;
pub use models::*;
