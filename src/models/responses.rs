use serde::{Deserialize, Serialize};
use crate::models::domain::RankedVenue;

/// Response for the nearby venues endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyResponse {
    pub venues: Vec<RankedVenue>,
    /// Venues within range before the limit was applied
    pub total_results: usize,
    /// Venues left out because of invalid coordinates
    pub skipped: usize,
    pub radius_km: f64,
    pub location_age_minutes: Option<i64>,
    pub stale: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
