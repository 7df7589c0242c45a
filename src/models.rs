// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Qualitative strength classes reported by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Blacklisted,
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    /// One-line verdict shown by the terminal surface.
    pub fn message(&self) -> &'static str {
        match self {
            StrengthLabel::Blacklisted => {
                "Blacklisted password - choose something more unique."
            }
            StrengthLabel::Weak => "Weak password - improve it using the suggestions below.",
            StrengthLabel::Moderate => {
                "Moderate password - consider adding more security features."
            }
            StrengthLabel::Strong => "Strong password!",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Blacklisted => write!(f, "Blacklisted"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Outcome of a single strength evaluation. Freshly constructed per call;
/// nothing is retained between evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub tips: Vec<String>,
}
