use crate::models::VenueRecord;

/// Check if a venue offers the requested sport
///
/// Comparison ignores case. A missing or blank sport matches every venue.
#[inline]
pub fn matches_sport(venue: &VenueRecord, sport: Option<&str>) -> bool {
    let sport = match sport.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return true,
    };

    venue
        .sports
        .iter()
        .any(|offered| offered.trim().eq_ignore_ascii_case(sport))
}

/// Keep only venues offering `sport`, preserving order
pub fn filter_by_sport(venues: &[VenueRecord], sport: Option<&str>) -> Vec<VenueRecord> {
    venues
        .iter()
        .filter(|venue| matches_sport(venue, sport))
        .cloned()
        .collect()
}
