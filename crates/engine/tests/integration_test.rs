//! Integration tests for the recommendation engine.
//!
//! These tests run full queries against small catalogs and check the
//! observable behaviour end to end.

use catalog::{Catalog, GeoPoint, RestaurantRecord};
use engine::filters::*;
use engine::{FilterPipeline, RecommendationEngine, RecommendationRequest, recommend};
use std::collections::HashSet;

const HOME: GeoPoint = GeoPoint {
    latitude: 40.7128,
    longitude: -74.0060,
};

fn restaurant(id: &str, name: &str, rating: f64, cuisine: &str) -> RestaurantRecord {
    RestaurantRecord {
        business_id: id.to_string(),
        bus_name: name.to_string(),
        address: format!("{} Broadway", id),
        latitude: HOME.latitude + 0.01,
        longitude: HOME.longitude,
        rating,
        cuisine_type: cuisine.to_string(),
        cuisine_type_encoded: 0.0,
        has_parking: true,
        has_wifi: true,
    }
}

/// A mixed catalog: chains, amenities, cuisines, and a few distant rows
fn create_test_catalog() -> Catalog {
    let mut records = vec![
        restaurant("a1", "Joe's Diner", 3.5, "American"),
        restaurant("a2", "Joe's Diner", 4.2, "American"),
        restaurant("a3", "Liberty Grill", 4.0, "American"),
        restaurant("a4", "Hudson Burgers", 3.2, "American"),
        restaurant("i1", "Luigi's", 4.6, "Italian"),
        restaurant("i2", "Trattoria Roma", 4.1, "Italian"),
        restaurant("t1", "Thai Palace", 4.4, "Thai"),
    ];

    let mut no_parking = restaurant("a5", "Empire Steak", 4.8, "American");
    no_parking.has_parking = false;
    records.push(no_parking);

    let mut no_wifi = restaurant("a6", "Broadway Bistro", 4.3, "American");
    no_wifi.has_wifi = false;
    records.push(no_wifi);

    // Boston, roughly 300 km away
    let mut far_away = restaurant("a7", "Beacon Hill Tavern", 5.0, "American");
    far_away.latitude = 42.3601;
    far_away.longitude = -71.0589;
    records.push(far_away);

    Catalog::from_records(records).unwrap()
}

fn american(min_rating: f64) -> RecommendationRequest {
    RecommendationRequest::new(HOME, min_rating, "American")
}

#[test]
fn test_scenario_a_chain_reports_best_branch() {
    let catalog = create_test_catalog();

    let results = recommend(&catalog, &american(0.0)).unwrap();

    let joes: Vec<_> = results.iter().filter(|r| r.bus_name == "Joe's Diner").collect();
    assert_eq!(joes.len(), 1);
    assert_eq!(joes[0].rating, 4.2);
    assert_eq!(joes[0].business_id, "a2");
}

#[test]
fn test_scenario_b_unknown_cuisine_is_empty() {
    let catalog = create_test_catalog();
    let request = RecommendationRequest::new(HOME, 0.0, "Sushi");

    let results = recommend(&catalog, &request).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_scenario_c_parking_requirement_excludes() {
    let catalog = create_test_catalog();

    let without = recommend(&catalog, &american(4.0)).unwrap();
    assert!(without.iter().any(|r| r.business_id == "a5"));

    let with = recommend(&catalog, &american(4.0).with_parking(true)).unwrap();
    assert!(with.iter().all(|r| r.business_id != "a5"));
}

#[test]
fn test_scenario_d_top_five_of_seven() {
    let ratings = [3.1, 4.9, 2.5, 4.4, 3.8, 4.7, 4.0];
    let records = ratings
        .iter()
        .enumerate()
        .map(|(i, &rating)| restaurant(&format!("d{}", i), &format!("Spot {}", i), rating, "Greek"))
        .collect();
    let catalog = Catalog::from_records(records).unwrap();
    let request = RecommendationRequest::new(HOME, 0.0, "Greek");

    let results = recommend(&catalog, &request).unwrap();
    let got: Vec<f64> = results.iter().map(|r| r.rating).collect();

    assert_eq!(got, vec![4.9, 4.7, 4.4, 4.0, 3.8]);
}

#[test]
fn test_results_respect_every_bound() {
    let catalog = create_test_catalog();
    let request = american(0.0).with_max_distance_km(25.0);

    let results = recommend(&catalog, &request).unwrap();

    assert!(!results.is_empty());
    assert!(results.len() <= 5);
    assert!(results.iter().all(|r| r.distance_km <= 25.0));
    assert!(results.iter().all(|r| r.cuisine_type == "American"));
    assert!(results.windows(2).all(|pair| pair[0].rating >= pair[1].rating));

    let names: HashSet<&str> = results.iter().map(|r| r.bus_name.as_str()).collect();
    assert_eq!(names.len(), results.len(), "names must be unique");

    // The Boston tavern is the best rated but too far away
    assert!(results.iter().all(|r| r.business_id != "a7"));
}

#[test]
fn test_far_record_included_with_large_radius() {
    let catalog = create_test_catalog();
    let request = american(0.0).with_max_distance_km(400.0);

    let results = recommend(&catalog, &request).unwrap();
    assert_eq!(results[0].business_id, "a7");
    assert!(results[0].distance_km > 250.0);
}

#[test]
fn test_attribute_filters_are_monotonic() {
    let catalog = create_test_catalog();
    let pipeline = FilterPipeline::attribute_filters();
    let count = |request: &RecommendationRequest| {
        pipeline
            .apply(catalog.records().iter().collect(), request)
            .unwrap()
            .len()
    };

    let base = count(&american(0.0));
    let stricter_rating = count(&american(4.0));
    let needs_parking = count(&american(0.0).with_parking(true));
    let needs_wifi = count(&american(0.0).with_wifi(true));
    let needs_both = count(&american(0.0).with_parking(true).with_wifi(true));

    assert!(stricter_rating <= base);
    assert!(needs_parking <= base);
    assert!(needs_wifi <= base);
    assert!(needs_both <= needs_parking.min(needs_wifi));
}

#[test]
fn test_filter_order_does_not_change_results() {
    let catalog = create_test_catalog();
    let request = american(3.4).with_parking(true).with_wifi(true);

    let reversed = FilterPipeline::new()
        .add_filter(WifiFilter)
        .add_filter(ParkingFilter)
        .add_filter(MinimumRatingFilter)
        .add_filter(CuisineFilter);
    let engine = RecommendationEngine::with_pipeline(reversed, Default::default()).unwrap();

    assert_eq!(
        engine.recommend(&catalog, &request).unwrap(),
        recommend(&catalog, &request).unwrap()
    );
}

#[test]
fn test_repeated_queries_are_identical() {
    let catalog = create_test_catalog();
    let request = american(0.0);

    let first = recommend(&catalog, &request).unwrap();
    for _ in 0..10 {
        assert_eq!(recommend(&catalog, &request).unwrap(), first);
    }
}

#[test]
fn test_concurrent_queries_share_catalog() {
    let catalog = create_test_catalog();
    let engine = RecommendationEngine::default();
    let expected = engine.recommend(&catalog, &american(0.0)).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.recommend(&catalog, &american(0.0)).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
