// Integration tests for the circle engines:
//   minimum bounding circle, maximum inscribed circle and circumcircle,
//   on the reference octagon, triangles, disks and degenerate inputs.

use approx::assert_relative_eq;
use geo::{polygon, Coord, MultiPolygon, Polygon};
use polycompact::{
    circumcircle, maximum_inscribed_circle, minimum_bounding_circle, minimum_bounding_circle_with, Circle,
    CircleOptions, CompactnessError, PointSet, Warning,
};

fn xy(x: f64, y: f64) -> Coord<f64> { Coord { x, y } }

fn octagon() -> Polygon<f64> {
    polygon![
        (x: 0.0, y: 0.0), (x: 0.25, y: 0.25), (x: 0.0, y: 0.5), (x: 0.25, y: 0.75),
        (x: 0.0, y: 1.0), (x: 1.25, y: 1.0), (x: 0.75, y: 0.5), (x: 1.25, y: 0.0),
    ]
}

#[test]
fn octagon_bounding_circle() {
    let circle = minimum_bounding_circle(&octagon()).unwrap();
    assert!(circle.is_clean());
    assert_relative_eq!(circle.value.radius, 0.800390, epsilon = 1e-3);
    assert_relative_eq!(circle.value.center.x, 0.625, epsilon = 1e-3);
    assert_relative_eq!(circle.value.center.y, 0.5, epsilon = 1e-3);
}

#[test]
fn octagon_inscribed_circle() {
    let circle = maximum_inscribed_circle(&octagon()).unwrap().value;
    assert_relative_eq!(circle.radius, 0.309359, epsilon = 1e-3);
    assert_relative_eq!(circle.center.x, 0.4375, epsilon = 1e-3);
    assert_relative_eq!(circle.center.y, 0.5, epsilon = 1e-3);
}

#[test]
fn bounding_circle_contains_every_input_point() {
    let shape = octagon();
    let circle = minimum_bounding_circle(&shape).unwrap().value;
    for point in shape.boundary_points() {
        assert!(circle.contains(point, 1e-9), "{point:?} outside {circle:?}");
    }
}

#[test]
fn inscribed_circle_has_no_boundary_point_inside() {
    let shape = octagon();
    let circle = maximum_inscribed_circle(&shape).unwrap().value;
    for point in shape.exterior().points() {
        assert!(!circle.strictly_contains(point.0, 1e-9), "{point:?} inside {circle:?}");
    }
}

#[test]
fn acute_triangle_uses_circumcircle() {
    let triangle = vec![xy(0.0, 0.0), xy(4.0, 0.0), xy(1.0, 3.0)];
    let circle = minimum_bounding_circle(&triangle).unwrap().value;
    assert_relative_eq!(circle.center.x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(circle.center.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, 5.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn obtuse_triangle_uses_longest_side() {
    let triangle = vec![xy(0.0, 0.0), xy(4.0, 0.0), xy(1.0, 0.5)];
    let circle = minimum_bounding_circle(&triangle).unwrap().value;
    assert_relative_eq!(circle.center.x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(circle.center.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, 2.0, epsilon = 1e-12);
}

#[test]
fn right_triangle_uses_hypotenuse() {
    let triangle = vec![xy(0.0, 0.0), xy(2.0, 0.0), xy(0.0, 2.0)];
    let circle = minimum_bounding_circle(&triangle).unwrap().value;
    assert_relative_eq!(circle.center.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(circle.center.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, 2.0f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn interior_and_repeated_points_do_not_matter() {
    let mut points = vec![xy(0.0, 0.0), xy(4.0, 0.0), xy(1.0, 3.0)];
    let bare = minimum_bounding_circle(&points).unwrap();
    points.extend([xy(1.0, 1.0), xy(2.0, 0.5), xy(4.0, 0.0), xy(0.0, 0.0)]);
    let crowded = minimum_bounding_circle(&points).unwrap();
    assert_relative_eq!(bare.value.radius, crowded.value.radius, epsilon = 1e-12);
    assert_relative_eq!(bare.value.center.x, crowded.value.center.x, epsilon = 1e-12);
    assert_relative_eq!(bare.value.center.y, crowded.value.center.y, epsilon = 1e-12);
}

#[test]
fn results_are_deterministic() {
    let shape = octagon();
    assert_eq!(minimum_bounding_circle(&shape).unwrap(), minimum_bounding_circle(&shape).unwrap());
    assert_eq!(maximum_inscribed_circle(&shape).unwrap(), maximum_inscribed_circle(&shape).unwrap());
}

#[test]
fn disk_polygon_round_trip() {
    let disk = Circle::new(xy(3.0, -2.0), 5.0);
    let polygon = disk.to_disk(&CircleOptions::default());

    let outer = minimum_bounding_circle(&polygon).unwrap().value;
    assert_relative_eq!(outer.radius, 5.0, epsilon = 1e-9);
    assert_relative_eq!(outer.center.x, 3.0, epsilon = 1e-9);
    assert_relative_eq!(outer.center.y, -2.0, epsilon = 1e-9);

    let inner = maximum_inscribed_circle(&polygon).unwrap().value;
    let apothem = 5.0 * (std::f64::consts::PI / 64.0).cos();
    assert_relative_eq!(inner.radius, apothem, epsilon = 1e-6);
    assert_relative_eq!(inner.center.x, 3.0, epsilon = 1e-6);
    assert_relative_eq!(inner.center.y, -2.0, epsilon = 1e-6);
}

#[test]
fn multipolygon_bounding_circle_spans_all_parts() {
    let a = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = polygon![(x: 9.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 1.0), (x: 9.0, y: 1.0)];
    let circle = minimum_bounding_circle(&MultiPolygon(vec![a, b])).unwrap().value;
    assert_relative_eq!(circle.center.x, 5.0, epsilon = 1e-12);
    assert_relative_eq!(circle.center.y, 0.5, epsilon = 1e-12);
    assert_relative_eq!(circle.radius, (25.0f64 + 0.25).sqrt(), epsilon = 1e-12);
}

#[test]
fn degenerate_point_sets_are_errors() {
    let two = vec![xy(0.0, 0.0), xy(1.0, 1.0)];
    assert!(matches!(minimum_bounding_circle(&two), Err(CompactnessError::DegenerateInput(_))));

    let line = vec![xy(0.0, 0.0), xy(1.0, 1.0), xy(2.0, 2.0), xy(3.0, 3.0)];
    assert!(matches!(minimum_bounding_circle(&line), Err(CompactnessError::DegenerateInput(_))));

    let nan = vec![xy(0.0, 0.0), xy(f64::NAN, 1.0), xy(2.0, 0.0)];
    assert!(matches!(minimum_bounding_circle(&nan), Err(CompactnessError::NonFiniteCoordinate { .. })));
}

#[test]
fn iteration_budget_is_enforced() {
    let options = CircleOptions::default().with_max_iterations(1);
    let result = minimum_bounding_circle_with(&octagon(), &options);
    // The rectangle hull finishes in one iteration.
    assert!(result.is_ok());

    let pentagon = (0..5)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / 5.0;
            xy(theta.cos() * 2.0, theta.sin())
        })
        .collect::<Vec<_>>();
    assert!(matches!(
        minimum_bounding_circle_with(&pentagon, &CircleOptions::default().with_max_iterations(0)),
        Err(CompactnessError::IterationBudgetExceeded { .. })
    ));
}

#[test]
fn collinear_circumcircle_warns_and_falls_back() {
    let circle = circumcircle(xy(0.0, 0.0), xy(1.0, 0.0), xy(3.0, 0.0)).unwrap();
    assert!(matches!(circle.warnings.as_slice(), [Warning::NearCollinear { .. }]));
    assert_relative_eq!(circle.value.center.x, 1.5);
    assert_relative_eq!(circle.value.radius, 1.5);
}
