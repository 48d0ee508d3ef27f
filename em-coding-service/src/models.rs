use serde::{Deserialize, Serialize};
use std::fmt;

/// Score for a single E/M documentation axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisScore {
    /// Documentation level, always in 1..=4.
    pub level: u8,
    pub description: String,
}

/// Simplified outpatient E/M code enumeration (CPT 99211-99215)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmCode {
    #[serde(rename = "99211")]
    Em99211,
    #[serde(rename = "99212")]
    Em99212,
    #[serde(rename = "99213")]
    Em99213,
    #[serde(rename = "99214")]
    Em99214,
    #[serde(rename = "99215")]
    Em99215,
}

impl EmCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmCode::Em99211 => "99211",
            EmCode::Em99212 => "99212",
            EmCode::Em99213 => "99213",
            EmCode::Em99214 => "99214",
            EmCode::Em99215 => "99215",
        }
    }

    /// Complexity rank within the family (99211 -> 1 .. 99215 -> 5).
    pub fn rank(&self) -> u8 {
        match self {
            EmCode::Em99211 => 1,
            EmCode::Em99212 => 2,
            EmCode::Em99213 => 3,
            EmCode::Em99214 => 4,
            EmCode::Em99215 => 5,
        }
    }
}

impl fmt::Display for EmCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// E/M code recommendation for one encounter's documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmCodingResult {
    pub history: AxisScore,
    pub examination: AxisScore,
    pub medical_decision_making: AxisScore,
    pub recommended_code: EmCode,
    /// Additive documentation-quality score, 70-95.
    pub confidence: u8,
    pub rationale: String,
}
