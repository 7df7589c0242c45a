// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::StrengthLabel;

// Strength evaluation types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CheckStrengthRequest {
    /// Password to evaluate
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StrengthCheckResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Score between 0 and 5 (only present on success)
    pub score: Option<u8>,
    /// Qualitative label for the score (only present on success)
    pub label: Option<StrengthLabel>,
    /// Suggestions for improving the password
    pub tips: Vec<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordRequest {
    /// Desired password length (defaults to the configured length)
    pub length: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GeneratePasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Score of the generated password (only present on success)
    pub score: Option<u8>,
    /// Label of the generated password (only present on success)
    pub label: Option<StrengthLabel>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

// System types
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Current server time
    pub server_time: DateTime<Utc>,
}
