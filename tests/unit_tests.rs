// Unit tests for PlaySpace Finder

use playspace_finder::core::{
    distance::haversine_distance,
    filters::filter_by_sport,
    proximity::find_nearby,
};
use playspace_finder::models::{GeoPoint, VenueRecord};

fn create_test_venue(id: &str, lat: f64, lon: f64) -> VenueRecord {
    VenueRecord {
        id: id.to_string(),
        name: format!("Play space {}", id),
        location: GeoPoint::new(lat, lon),
        address: None,
        sports: vec!["Football".to_string()],
        facilities: vec![],
        price: None,
        available_time: None,
    }
}

fn delhi() -> GeoPoint {
    GeoPoint::new(28.6139, 77.2090)
}

/// A spread of venues around Delhi, some out of a 10km radius
fn delhi_venues() -> Vec<VenueRecord> {
    (0..40)
        .map(|i| {
            let step = i as f64 * 0.005;
            create_test_venue(&i.to_string(), 28.6139 + step, 77.2090 - step / 2.0)
        })
        .collect()
}

#[test]
fn test_haversine_distance_zero() {
    let distance = haversine_distance(28.6139, 77.2090, 28.6139, 77.2090);
    assert_eq!(distance, 0.0);
}

#[test]
fn test_haversine_one_degree_longitude() {
    let distance = haversine_distance(0.0, 0.0, 0.0, 1.0);
    assert!((distance - 111.19).abs() <= 0.5, "Expected ~111.19km, got {}", distance);
}

#[test]
fn test_haversine_symmetry() {
    let points = [
        (28.6139, 77.2090),
        (19.0760, 72.8777),
        (-33.8688, 151.2093),
        (51.5074, -0.1278),
        (0.0, 0.0),
    ];

    for &(lat1, lon1) in &points {
        for &(lat2, lon2) in &points {
            let ab = haversine_distance(lat1, lon1, lat2, lon2);
            let ba = haversine_distance(lat2, lon2, lat1, lon1);
            assert!((ab - ba).abs() < 1e-9, "Asymmetric: {} vs {}", ab, ba);
        }
    }
}

#[test]
fn test_all_results_within_radius() {
    let venues = delhi_venues();

    for radius in [0.5, 1.0, 2.5, 5.0, 10.0] {
        let result = find_nearby(delhi(), &venues, radius).unwrap();
        assert!(!result.venues.is_empty());
        for ranked in &result.venues {
            assert!(ranked.distance_km <= radius);
        }
    }
}

#[test]
fn test_result_set_is_exactly_venues_in_range() {
    let venues = delhi_venues();
    let radius = 3.0;

    let result = find_nearby(delhi(), &venues, radius).unwrap();

    let expected: Vec<&str> = venues
        .iter()
        .filter(|v| delhi().distance_km(&v.location) <= radius)
        .map(|v| v.id.as_str())
        .collect();
    let mut actual: Vec<&str> = result.venues.iter().map(|v| v.venue.id.as_str()).collect();
    actual.sort_by_key(|id| id.parse::<u32>().unwrap());

    assert_eq!(actual, expected);
}

#[test]
fn test_results_sorted_nearest_first() {
    let mut venues = delhi_venues();
    venues.reverse();

    let result = find_nearby(delhi(), &venues, 10.0).unwrap();

    for pair in result.venues.windows(2) {
        assert!(pair[0].distance_km <= pair[1].distance_km, "Results not sorted by distance");
    }
}

#[test]
fn test_equal_distances_keep_input_order() {
    let venues = vec![
        create_test_venue("second-court", 28.62, 77.21),
        create_test_venue("close", 28.6140, 77.2090),
        create_test_venue("first-court", 28.62, 77.21),
    ];

    let result = find_nearby(delhi(), &venues, 10.0).unwrap();

    let ids: Vec<_> = result.venues.iter().map(|v| v.venue.id.as_str()).collect();
    assert_eq!(ids, vec!["close", "second-court", "first-court"]);
}

#[test]
fn test_empty_venue_list() {
    for radius in [0.1, 10.0, 20000.0] {
        let result = find_nearby(delhi(), &[], radius).unwrap();
        assert!(result.venues.is_empty());
        assert_eq!(result.skipped, 0);
    }
}

#[test]
fn test_radius_boundary_is_inclusive() {
    let venue = create_test_venue("edge", 28.70, 77.25);
    let exact = delhi().distance_km(&venue.location);

    let included = find_nearby(delhi(), std::slice::from_ref(&venue), exact).unwrap();
    assert_eq!(included.venues.len(), 1);
    assert_eq!(included.venues[0].distance_km, exact);

    // Shrinking the radius puts the venue at radius + epsilon
    let excluded = find_nearby(delhi(), std::slice::from_ref(&venue), exact - 1e-9).unwrap();
    assert!(excluded.venues.is_empty());
}

#[test]
fn test_invalid_latitude_is_skipped_and_counted() {
    let venues = vec![
        create_test_venue("a", 28.6200, 77.2100),
        create_test_venue("broken", 200.0, 77.2100),
        create_test_venue("b", 28.6300, 77.2200),
    ];

    let result = find_nearby(delhi(), &venues, 10.0).unwrap();

    assert_eq!(result.skipped, 1);
    let ids: Vec<_> = result.venues.iter().map(|v| v.venue.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_sport_filter_then_search() {
    let mut venues = delhi_venues();
    venues[1].sports = vec!["Tennis".to_string()];
    venues[3].sports = vec!["tennis".to_string(), "Badminton".to_string()];

    let tennis = filter_by_sport(&venues, Some("Tennis"));
    let result = find_nearby(delhi(), &tennis, 10.0).unwrap();

    let ids: Vec<_> = result.venues.iter().map(|v| v.venue.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}
