use crate::models::{GeoPoint, RankedVenue, VenueRecord};
use thiserror::Error;

/// Errors that can occur during a proximity search
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Invalid radius: {0} km (must be a positive, finite number)")]
    InvalidRadius(f64),
}

/// Result of a proximity search
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyResult {
    /// Venues within range, nearest first
    pub venues: Vec<RankedVenue>,
    /// Venues dropped because their coordinates were out of range
    pub skipped: usize,
}

/// Check the reference point and radius of a query
///
/// Fails on an out-of-range reference or a radius that is not a positive,
/// finite number.
pub fn validate_query(reference: GeoPoint, radius_km: f64) -> Result<(), SearchError> {
    if !reference.is_valid() {
        return Err(SearchError::InvalidCoordinate {
            latitude: reference.latitude,
            longitude: reference.longitude,
        });
    }
    if !(radius_km > 0.0 && radius_km.is_finite()) {
        return Err(SearchError::InvalidRadius(radius_km));
    }
    Ok(())
}

/// Find all venues within `radius_km` of `reference`, nearest first
///
/// The boundary is inclusive. Venues at equal distance keep their input
/// order. Venues with out-of-range coordinates are left out and counted
/// in [`NearbyResult::skipped`].
///
/// # Arguments
/// * `reference` - Point to measure from, typically the user's location
/// * `venues` - Candidate venues, not modified
/// * `radius_km` - Search radius in kilometers
pub fn find_nearby(
    reference: GeoPoint,
    venues: &[VenueRecord],
    radius_km: f64,
) -> Result<NearbyResult, SearchError> {
    validate_query(reference, radius_km)?;

    let mut skipped = 0;
    let mut ranked: Vec<RankedVenue> = venues
        .iter()
        .filter_map(|venue| {
            if !venue.location.is_valid() {
                tracing::debug!(
                    "Skipping venue {} with invalid location ({}, {})",
                    venue.id,
                    venue.location.latitude,
                    venue.location.longitude
                );
                skipped += 1;
                return None;
            }

            let distance_km = reference.distance_km(&venue.location);
            (distance_km <= radius_km).then(|| RankedVenue {
                venue: venue.clone(),
                distance_km,
            })
        })
        .collect();

    // sort_by is stable, so ties keep input order
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    Ok(NearbyResult {
        venues: ranked,
        skipped,
    })
}
