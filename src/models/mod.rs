// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, LocationFix, RankedVenue, VenueRecord};
pub use requests::NearbyRequest;
pub use responses::{ErrorResponse, HealthResponse, NearbyResponse};
