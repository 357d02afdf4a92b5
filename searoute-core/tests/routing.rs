use geo::{Coord, LineString, coord, line_string};
use searoute_core::prelude::*;

const TWO_LEG_NETWORK: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 0.0]]}},
        {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[1.0, 0.0], [1.0, 1.0]]}}
    ]
}"#;

fn two_leg_network() -> SeaNetwork {
    sea_network_from_geojson_str(TWO_LEG_NETWORK, SeaNetworkMeta::default()).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= expected.abs() * 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn two_segments_sharing_a_vertex() {
    let network = two_leg_network();
    let router = SeaRouter::new(network);

    let route = router
        .calculate_route(
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            Units::Kilometers,
        )
        .unwrap()
        .expect("route exists");

    assert_eq!(
        route.coordinates(),
        &[
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 }
        ]
    );

    let first_leg = great_circle_distance_km(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 });
    let second_leg = great_circle_distance_km(coord! { x: 1.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 });
    assert_close(route.length, first_leg + second_leg);
    assert!((route.length - 222.39).abs() < 0.01);
}

#[test]
fn default_units_are_nautical_miles() {
    let router = SeaRouter::new(two_leg_network());

    let km = router
        .calculate_route(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }, Units::Kilometers)
        .unwrap()
        .unwrap();
    let nm = router
        .calculate_route(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 1.0 }, Units::default())
        .unwrap()
        .unwrap();

    assert_eq!(nm.units, Units::NauticalMiles);
    assert_close(nm.length, convert_distance(km.length, Units::Kilometers, Units::NauticalMiles));
}

#[test]
fn far_point_with_small_threshold_is_not_found() {
    let network = SeaNetwork::with_meta(
        vec![
            line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)],
            line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 1.0)],
        ],
        SeaNetworkMeta {
            snap_threshold_km: 500.0,
        },
    );
    let far = coord! { x: 100.0, y: 40.0 };

    assert_eq!(snap_to_network(&network, far), far);
    assert!(find_path(network.graph(), coord! { x: 0.0, y: 0.0 }, far).is_none());

    let router = SeaRouter::new(network);
    let route = router
        .calculate_route(coord! { x: 0.0, y: 0.0 }, far, Units::NauticalMiles)
        .unwrap();
    assert!(route.is_none());
}

#[test]
fn default_threshold_admits_any_point_on_earth() {
    let network = two_leg_network();
    let antipode = coord! { x: -179.5, y: -0.5 };

    let snapped = snap_to_network(&network, antipode);
    assert_ne!(snapped, antipode);
    assert!(network.graph().contains(VertexKey::from_coord(snapped).expect("finite")));
}

#[test]
fn dijkstra_distance_is_minimal_and_matches_path() {
    // A ring of four vertices plus a diagonal between opposite corners
    let lines: Vec<LineString<f64>> = vec![
        line_string![(x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0)],
        line_string![(x: 2.0, y: 2.0), (x: 0.0, y: 2.0), (x: 0.0, y: 0.0)],
        line_string![(x: 0.0, y: 0.0), (x: 2.0, y: 2.0)],
    ];
    let graph = NetworkGraph::build(&lines);

    let start = coord! { x: 0.0, y: 0.0 };
    let end = coord! { x: 2.0, y: 2.0 };
    let result = find_path(&graph, start, end).expect("connected");

    assert_eq!(result.path, vec![start, end]);
    assert_close(result.distance_km, polyline_length(&result.path, Units::Kilometers));

    let around_south = polyline_length(
        &[start, coord! { x: 2.0, y: 0.0 }, end],
        Units::Kilometers,
    );
    let around_north = polyline_length(
        &[start, coord! { x: 0.0, y: 2.0 }, end],
        Units::Kilometers,
    );
    assert!(result.distance_km < around_south);
    assert!(result.distance_km < around_north);
}

#[test]
fn every_pair_of_connected_vertices_has_consistent_distance() {
    let lines: Vec<LineString<f64>> = vec![
        line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0), (x: 3.0, y: 0.0)],
        line_string![(x: 1.0, y: 0.0), (x: 1.5, y: 1.0), (x: 3.0, y: 0.0)],
        line_string![(x: 2.0, y: 0.0), (x: 2.0, y: -1.0)],
    ];
    let graph = NetworkGraph::build(&lines);
    let vertices: Vec<Coord<f64>> = graph.vertices().map(|v| v.coordinate).collect();

    for &a in &vertices {
        for &b in &vertices {
            let forward = find_path(&graph, a, b).expect("single component");
            let backward = find_path(&graph, b, a).expect("single component");

            assert_eq!(forward.path.first(), Some(&a));
            assert_eq!(forward.path.last(), Some(&b));
            assert!((forward.distance_km - backward.distance_km).abs() < 1e-9);
            assert!(
                (forward.distance_km - polyline_length(&forward.path, Units::Kilometers)).abs()
                    < 1e-9
            );
        }
    }
}

#[test]
fn snapping_is_idempotent_over_a_grid_of_queries() {
    let network = two_leg_network();

    for lon in -3..=4 {
        for lat in -3..=4 {
            let query = coord! { x: f64::from(lon) * 0.5, y: f64::from(lat) * 0.5 };
            let once = snap_to_network(&network, query);
            assert_eq!(snap_to_network(&network, once), once, "query {query:?}");
        }
    }
}

#[test]
fn route_feature_round_trips_through_geojson() {
    let router = SeaRouter::new(two_leg_network());
    let route = router
        .calculate_route(coord! { x: 0.1, y: -0.2 }, coord! { x: 1.3, y: 1.2 }, Units::Miles)
        .unwrap()
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&route.to_geojson_string().unwrap()).unwrap();
    assert_eq!(value["properties"]["units"], "miles");
    assert_eq!(value["geometry"]["coordinates"].as_array().map(Vec::len), Some(3));
}
