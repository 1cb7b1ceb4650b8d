use gridmap::points::{
    hit_test, scale, MapPoint, PointStore, ScreenOrigin, POINT_RADIUS, X_SCALE, Y_SCALE,
};

fn point_at(x: i32, y: i32, name: &str, radius: f32) -> MapPoint {
    MapPoint {
        original_x: x,
        original_y: y,
        scaled_x: x,
        scaled_y: y,
        name: name.to_string(),
        radius,
    }
}

#[test]
fn scaling_is_deterministic() {
    let origin = ScreenOrigin::new(640, 360);
    for &(x, y) in &[(0, 0), (10, 10), (-250, 480), (i16::MAX as i32, -1)] {
        assert_eq!(scale(x, y, origin), scale(x, y, origin));
    }
}

#[test]
fn scaling_matches_reference_example() {
    // round(10 * 0.63733) + 100 = 106, round(10 * -0.298) + 100 = 97
    let origin = ScreenOrigin::new(100, 100);
    assert_eq!(scale(10, 10, origin), (106, 97));
}

#[test]
fn y_axis_is_inverted() {
    let origin = ScreenOrigin::new(0, 0);
    let (_, above) = scale(0, 100, origin);
    let (_, below) = scale(0, -100, origin);
    // Server Y grows upward, screen Y grows downward.
    assert!(above < 0);
    assert!(below > 0);
}

#[test]
fn map_point_new_scales_on_construction() {
    let origin = ScreenOrigin::new(100, 100);
    let p = MapPoint::new(10, 10, "P", origin);
    assert_eq!((p.scaled_x, p.scaled_y), (106, 97));
    assert_eq!((p.original_x, p.original_y), (10, 10));
    assert_eq!(p.radius, POINT_RADIUS);
}

#[test]
fn rescale_recomputes_from_originals() {
    let mut p = MapPoint::new(10, 10, "P", ScreenOrigin::new(100, 100));
    p.rescale(ScreenOrigin::new(200, 50));
    assert_eq!((p.scaled_x, p.scaled_y), (206, 47));
    // Originals are untouched.
    assert_eq!((p.original_x, p.original_y), (10, 10));
}

#[test]
fn origin_derives_from_canvas_center() {
    let origin = ScreenOrigin::from_canvas_size(800.0, 600.0);
    assert_eq!(origin, ScreenOrigin::new(400, 300));
}

#[test]
fn scale_factors_are_the_fixed_constants() {
    assert_eq!(X_SCALE, 0.63733);
    assert_eq!(Y_SCALE, 0.298);
}

#[test]
fn points_draw_with_the_fixed_radius() {
    assert_eq!(POINT_RADIUS, 15.0);
    let p = MapPoint::new(0, 0, "P", ScreenOrigin::new(0, 0));
    assert_eq!(p.radius, POINT_RADIUS);
}

#[test]
fn store_replaces_wholesale() {
    let origin = ScreenOrigin::new(0, 0);
    let mut store = PointStore::new();
    assert!(store.is_empty());

    store.replace(vec![MapPoint::new(1, 2, "A", origin)], origin);
    assert_eq!(store.len(), 1);

    store.replace(
        vec![
            MapPoint::new(3, 4, "B", origin),
            MapPoint::new(5, 6, "C", origin),
        ],
        origin,
    );
    assert_eq!(store.len(), 2);
    assert_eq!(store.current()[0].name, "B");
    assert_eq!(store.current()[1].name, "C");
}

#[test]
fn store_replacement_is_idempotent() {
    let origin = ScreenOrigin::new(50, 50);
    let points = vec![
        MapPoint::new(1, 2, "A", origin),
        MapPoint::new(3, 4, "B", origin),
    ];
    let mut store = PointStore::new();
    store.replace(points.clone(), origin);
    let first = store.current().to_vec();
    store.replace(points, origin);
    assert_eq!(store.current(), &first[..]);
}

#[test]
fn store_rescale_moves_points_with_the_origin() {
    let old_origin = ScreenOrigin::new(100, 100);
    let mut store = PointStore::new();
    store.replace(vec![MapPoint::new(10, 10, "P", old_origin)], old_origin);

    store.rescale(ScreenOrigin::new(400, 300));
    assert_eq!(
        (store.current()[0].scaled_x, store.current()[0].scaled_y),
        (406, 297)
    );

    // Same origin again is a no-op.
    store.rescale(ScreenOrigin::new(400, 300));
    assert_eq!(
        (store.current()[0].scaled_x, store.current()[0].scaled_y),
        (406, 297)
    );
}

#[test]
fn hit_test_covers_the_drawn_circle() {
    let points = vec![point_at(50, 50, "P", 20.0)];
    // Center and circle edge hit, far away misses.
    assert_eq!(hit_test(&points, 50.0, 50.0).unwrap().name, "P");
    assert_eq!(hit_test(&points, 70.0, 50.0).unwrap().name, "P");
    assert_eq!(hit_test(&points, 50.0, 30.0).unwrap().name, "P");
    assert!(hit_test(&points, 1000.0, 1000.0).is_none());
    // Just outside the radius misses.
    assert!(hit_test(&points, 71.0, 50.0).is_none());
}

#[test]
fn hit_test_returns_first_match_in_store_order() {
    let points = vec![point_at(50, 50, "first", 20.0), point_at(55, 50, "second", 20.0)];
    assert_eq!(hit_test(&points, 52.0, 50.0).unwrap().name, "first");
}

#[test]
fn hit_test_on_empty_store_is_no_match() {
    // Before the first successful fetch there is nothing to hit; this must
    // degrade to "no match", never fail.
    assert!(hit_test(&[], 10.0, 10.0).is_none());
}

#[test]
fn tooltip_shows_name_and_original_coordinates() {
    let p = MapPoint::new(10, -20, "Gåsö", ScreenOrigin::new(100, 100));
    assert_eq!(p.tooltip(), "Gåsö: 10, -20");
}
