use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{GeoPoint, LocationFix};

/// Request to find play spaces near a location fix
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NearbyRequest {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
    /// Accuracy radius of the fix in meters
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[validate(length(min = 1, max = 64))]
    #[serde(default)]
    pub sport: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

impl NearbyRequest {
    pub fn reference(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn fix(&self) -> LocationFix {
        LocationFix {
            point: self.reference(),
            accuracy: self.accuracy,
            timestamp: self.timestamp,
        }
    }
}
