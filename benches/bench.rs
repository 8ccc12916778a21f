// Criterion benchmarks for PlaySpace Finder

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use playspace_finder::core::{distance::haversine_distance, filters::filter_by_sport, proximity::find_nearby};
use playspace_finder::models::{GeoPoint, VenueRecord};

fn create_venue(id: usize, lat: f64, lon: f64) -> VenueRecord {
    VenueRecord {
        id: id.to_string(),
        name: format!("Play space {}", id),
        location: GeoPoint::new(lat, lon),
        address: None,
        sports: vec![if id % 2 == 0 { "Football" } else { "Tennis" }.to_string()],
        facilities: vec![],
        price: None,
        available_time: None,
    }
}

fn create_venues(count: usize) -> Vec<VenueRecord> {
    (0..count)
        .map(|i| {
            let lat_offset = (i as f64 * 0.001) % 0.5;
            let lon_offset = (i as f64 * 0.0007) % 0.5;
            create_venue(i, 28.6139 + lat_offset - 0.25, 77.2090 + lon_offset - 0.25)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(28.6139),
                black_box(77.2090),
                black_box(28.5503),
                black_box(77.2167),
            )
        });
    });
}

fn bench_find_nearby(c: &mut Criterion) {
    let reference = GeoPoint::new(28.6139, 77.2090);

    let mut group = c.benchmark_group("find_nearby");

    for venue_count in [10, 100, 1000, 10000].iter() {
        let venues = create_venues(*venue_count);

        group.bench_with_input(
            BenchmarkId::new("radius_10km", venue_count),
            venue_count,
            |b, _| {
                b.iter(|| find_nearby(black_box(reference), black_box(&venues), black_box(10.0)));
            },
        );
    }

    group.finish();
}

fn bench_sport_then_nearby(c: &mut Criterion) {
    let reference = GeoPoint::new(28.6139, 77.2090);
    let venues = create_venues(1000);

    c.bench_function("sport_filter_then_nearby_1000_venues", |b| {
        b.iter(|| {
            let tennis = filter_by_sport(black_box(&venues), Some("tennis"));
            black_box(find_nearby(reference, &tennis, 10.0))
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_find_nearby,
    bench_sport_then_nearby
);

criterion_main!(benches);
