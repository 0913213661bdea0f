use utm_epsg::{
    central_meridian, try_utm_epsg_from_coordinate, utm_epsg_code, utm_epsg_from_coordinate,
    utm_zone_from_longitude, Coordinate, EpsgCode, Error, Hemisphere,
};

#[test]
fn zone_stays_in_range_over_valid_longitudes() {
    for i in 0..3600 {
        let longitude = -180.0 + f64::from(i) * 0.1;
        let zone = utm_zone_from_longitude(longitude);
        assert!((1..=60).contains(&zone), "longitude {longitude} gave zone {zone}");
    }
}

#[test]
fn zone_boundaries() {
    assert_eq!(utm_zone_from_longitude(-180.0), 1);
    assert_eq!(utm_zone_from_longitude(-174.0001), 1);
    assert_eq!(utm_zone_from_longitude(-174.0), 2);
    assert_eq!(utm_zone_from_longitude(-0.0001), 30);
    assert_eq!(utm_zone_from_longitude(0.0), 31);
    assert_eq!(utm_zone_from_longitude(174.0), 60);
    assert_eq!(utm_zone_from_longitude(179.9999), 60);
}

#[test]
fn zone_is_periodic_over_360_degrees() {
    for i in -960..960 {
        // Offset keeps every sample at least 0.1° away from a zone edge
        let longitude = f64::from(i) * 0.75 + 0.1;
        assert_eq!(
            utm_zone_from_longitude(longitude),
            utm_zone_from_longitude(longitude + 360.0),
            "longitude {longitude}",
        );
    }
}

#[test]
fn zone_wraps_out_of_range_longitudes() {
    assert_eq!(utm_zone_from_longitude(180.0), 1);
    assert_eq!(utm_zone_from_longitude(-181.0), 60);
    assert_eq!(utm_zone_from_longitude(540.0), 1);
    assert_eq!(utm_zone_from_longitude(f64::NAN), 1);

    for longitude in [f64::INFINITY, f64::NEG_INFINITY, f64::MAX, f64::MIN] {
        assert!((1..=60).contains(&utm_zone_from_longitude(longitude)));
    }
}

#[test]
fn epsg_code_from_zone_and_latitude() {
    assert_eq!(utm_epsg_code(31, 10.0).code(), 32631);
    assert_eq!(utm_epsg_code(31, -10.0).code(), 32731);
    assert_eq!(utm_epsg_code(1, 5.0).code(), 32601);
    assert_eq!(utm_epsg_code(60, -89.0).code(), 32760);

    assert_eq!(utm_epsg_code(31, 10.0).to_string(), "32631");
    assert_eq!(utm_epsg_code(1, 5.0).to_string(), "32601");
}

#[test]
fn equator_resolves_to_southern_hemisphere() {
    assert_eq!(utm_epsg_code(31, 0.0).code(), 32731);
    assert_eq!(utm_epsg_code(31, -0.0).code(), 32731);
    assert_eq!(utm_epsg_code(31, f64::MIN_POSITIVE).code(), 32631);
    assert_eq!(utm_epsg_code(31, f64::NAN).hemisphere(), Hemisphere::South);
}

#[test]
fn unpadded_string_keeps_single_digit_zones_short() {
    assert_eq!(utm_epsg_code(31, 10.0).to_unpadded_string(), "32631");
    assert_eq!(utm_epsg_code(31, 0.0).to_unpadded_string(), "32731");
    assert_eq!(utm_epsg_code(1, 5.0).to_unpadded_string(), "3261");
    assert_eq!(utm_epsg_code(9, -5.0).to_unpadded_string(), "3279");

    for zone in 1..=60 {
        let unpadded = utm_epsg_code(zone, 1.0).to_unpadded_string();
        let expected_len = if zone < 10 { 4 } else { 5 };
        assert_eq!(unpadded.len(), expected_len, "zone {zone}");
        assert!(unpadded.starts_with("326"));
    }
}

#[test]
fn resolves_city_coordinates() {
    // Paris
    assert_eq!(utm_epsg_from_coordinate([2.3522, 48.8566]).code(), 32631);
    // Buenos Aires
    assert_eq!(utm_epsg_from_coordinate([-58.3816, -34.6037]).code(), 32721);
    // New York
    assert_eq!(utm_epsg_from_coordinate((-73.985278, 40.748333)).code(), 32618);
    // Sydney
    let sydney = Coordinate::create(151.2093, -33.8688).unwrap();
    assert_eq!(sydney.utm_zone(), 56);
    assert_eq!(sydney.utm_epsg().to_authority_string(), "EPSG:32756");
}

#[test]
fn resolution_is_deterministic() {
    let coord = Coordinate::from([-58.3816, -34.6037]);
    let first = utm_epsg_from_coordinate(coord);

    for _ in 0..100 {
        assert_eq!(utm_epsg_from_coordinate(coord), first);
    }
}

#[test]
fn unchecked_resolution_accepts_garbage() {
    let code = utm_epsg_from_coordinate([f64::NAN, f64::NAN]);
    assert_eq!(code.zone(), 1);
    assert!(!code.is_north());

    let code = utm_epsg_from_coordinate([200.0, 95.0]);
    assert_eq!(code.zone(), utm_zone_from_longitude(200.0));
    assert!(code.is_north());
}

#[test]
fn checked_resolution_rejects_invalid_points() {
    assert_eq!(try_utm_epsg_from_coordinate(2.3522, 48.8566).unwrap().code(), 32631);
    assert_eq!(try_utm_epsg_from_coordinate(-180.0, -90.0).unwrap().code(), 32701);
    assert_eq!(try_utm_epsg_from_coordinate(179.9999, 90.0).unwrap().code(), 32660);

    for (longitude, latitude) in [
        (180.0, 0.0),
        (-180.5, 0.0),
        (0.0, 90.5),
        (0.0, -90.5),
        (f64::NAN, 0.0),
        (0.0, f64::NAN),
        (f64::INFINITY, 0.0),
    ] {
        let result = try_utm_epsg_from_coordinate(longitude, latitude);
        assert!(
            matches!(result, Err(Error::InvalidCoord(_))),
            "({longitude}, {latitude}) gave {result:?}",
        );
    }
}

#[test]
fn checked_code_construction() {
    for zone in 1..=60 {
        let north = EpsgCode::create(zone, Hemisphere::North).unwrap();
        let south = EpsgCode::create(zone, Hemisphere::South).unwrap();
        assert_eq!(north.code(), 32600 + i64::from(zone));
        assert_eq!(south.code(), 32700 + i64::from(zone));
        assert_eq!(EpsgCode::from_code(north.code()), Ok(north));
        assert_eq!(EpsgCode::try_from(south.code()), Ok(south));
    }

    assert_eq!(EpsgCode::create(0, Hemisphere::North), Err(Error::InvalidZone(0)));
    assert_eq!(EpsgCode::create(61, Hemisphere::South), Err(Error::InvalidZone(61)));

    for code in [32600, 32661, 32700, 32761, 4326, 3857, -32631, i64::MIN, i64::MAX] {
        assert_eq!(EpsgCode::from_code(code), Err(Error::InvalidEpsg(code.to_string())));
    }
}

#[test]
fn hemisphere_digits() {
    assert_eq!(Hemisphere::North.epsg_digit(), '6');
    assert_eq!(Hemisphere::South.epsg_digit(), '7');
    assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::South);
    assert_eq!(Hemisphere::North.to_string(), "N");
}

#[test]
fn central_meridians() {
    assert_eq!(central_meridian(1), -177.0);
    assert_eq!(central_meridian(31), 3.0);
    assert_eq!(central_meridian(60), 177.0);

    for zone in 1..=60 {
        assert_eq!(utm_zone_from_longitude(central_meridian(zone)), zone);
    }
}
