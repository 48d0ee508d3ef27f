//! E/M Coding Engine for Clinical Documentation
//!
//! Scores encounter documentation across the three Evaluation & Management
//! axes (History, Examination, Medical Decision-Making) and maps the result
//! to a recommended CPT code with a confidence estimate and a rationale.
//!
//! Scoring is deterministic marker matching over the raw text against
//! immutable marker tables; there is no model inference and no external
//! state. Sparse or empty documentation scores level 1 on every axis and
//! recommends the lowest code rather than failing.
//!
//! # Example
//!
//! ```rust
//! use em_coding_service::{compute_em_coding, EmCode};
//!
//! let note = "Chief complaint: chest pain. Physical examination: lungs clear. \
//!             Assessment: costochondritis. Plan: ibuprofen 600mg TID.";
//! let coding = compute_em_coding(note);
//!
//! assert_eq!(coding.recommended_code, EmCode::Em99212);
//! assert!(coding.confidence <= 95);
//! ```

pub mod engine;
pub mod markers;
pub mod models;

pub use engine::*;
pub use models::*;
