//! PlaySpace Finder - nearby sports venue discovery
//!
//! This library provides the proximity search used to find play spaces
//! around a user's location, plus the HTTP service wrapped around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{find_nearby, haversine_distance, NearbyResult, SearchError};
pub use models::{GeoPoint, RankedVenue, VenueRecord, NearbyRequest, NearbyResponse};
