use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::models::domain::PairingResult;

/// Envelope for the reverse-logistics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseLogisticsResponse {
    pub success: bool,
    pub request_id: String,
    pub data: PairingResult,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub services: BTreeMap<String, String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
