use super::*;

fn coord(lat: Float, lng: Float) -> Coordinate {
    Coordinate::new(lat, lng).unwrap()
}

#[test]
fn can_calculate_ellipsoidal_distance() {
    let flinders_peak = coord(-37.95103341666667, 144.42486788888888);
    let buninyong = coord(-37.65282113888889, 143.92649552777777);

    let distance = geodesic_distance(&flinders_peak, &buninyong);

    assert!((distance - 54_972.271).abs() < 0.01, "unexpected distance: {distance}");
}

#[test]
fn can_calculate_symmetric_distance() {
    let boston = coord(42.3554334, -71.060511);
    let new_york = coord(40.7127281, -74.0060152);

    let forward = geodesic_distance(&boston, &new_york);
    let backward = geodesic_distance(&new_york, &boston);

    assert!((forward - backward).abs() < 1E-6);
    let miles = DistanceUnit::Miles.from_meters(forward);
    assert!((185. ..195.).contains(&miles), "unexpected distance: {miles}");
}

#[test]
fn can_return_zero_for_same_point() {
    let boston = coord(42.3554334, -71.060511);

    assert_eq!(geodesic_distance(&boston, &boston), 0.);
    assert_eq!(haversine_distance(&boston, &boston), 0.);
}

#[test]
fn can_fall_back_for_antipodal_points() {
    let distance = geodesic_distance(&coord(0., 0.), &coord(0., 180.));

    assert!(distance.is_finite());
    assert!((19_900_000. ..20_100_000.).contains(&distance), "unexpected distance: {distance}");
}

#[test]
fn can_take_shorter_way_across_antimeridian() {
    let west = coord(0., 179.5);
    let east = coord(0., -179.5);

    let distance = geodesic_distance(&west, &east);

    assert!((distance - 111_319.49).abs() < 1., "unexpected distance: {distance}");
}

#[test]
fn can_calculate_haversine_distance() {
    let distance = haversine_distance(&coord(0., 0.), &coord(0., 1.));

    assert!((distance - 111_195.08).abs() < 1., "unexpected distance: {distance}");
}

#[test]
fn can_convert_meters_to_units() {
    let parameters = vec![
        (DistanceUnit::Meters, 1_609.344, 1_609.344),
        (DistanceUnit::Kilometers, 1_609.344, 1.609344),
        (DistanceUnit::Miles, 1_609.344, 1.),
    ];

    for (unit, meters, expected) in parameters {
        let value = unit.from_meters(meters);

        assert!((value - expected).abs() < 1E-9, "{unit}: {value} != {expected}");
    }
}

#[test]
fn can_parse_distance_unit() {
    let parameters = vec![
        ("m", Ok(DistanceUnit::Meters)),
        ("meters", Ok(DistanceUnit::Meters)),
        ("KM", Ok(DistanceUnit::Kilometers)),
        ("kilometers", Ok(DistanceUnit::Kilometers)),
        ("mi", Ok(DistanceUnit::Miles)),
        ("Miles", Ok(DistanceUnit::Miles)),
        ("feet", Err(GenericError::from("unknown distance unit: 'feet'"))),
    ];

    for (value, expected) in parameters {
        assert_eq!(value.parse::<DistanceUnit>(), expected);
    }
}

#[test]
fn can_display_distance_unit() {
    assert_eq!(DistanceUnit::default(), DistanceUnit::Miles);
    assert_eq!(DistanceUnit::Kilometers.to_string(), "kilometers");
    assert_eq!(serde_json::to_string(&DistanceUnit::Meters).unwrap(), "\"meters\"");
}
