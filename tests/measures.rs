// Integration tests for the compactness indices:
//   reference values on the octagon, regular n-gon convergence,
//   and error reporting through the Index enum.

use std::f64::consts::PI;

use approx::assert_relative_eq;
use geo::{polygon, Coord, LineString, MultiPolygon, Polygon};
use polycompact::{evaluate_batch, indices, CircleOptions, CompactnessError, Index, Shape};

fn octagon() -> Polygon<f64> {
    polygon![
        (x: 0.0, y: 0.0), (x: 0.25, y: 0.25), (x: 0.0, y: 0.5), (x: 0.25, y: 0.75),
        (x: 0.0, y: 1.0), (x: 1.25, y: 1.0), (x: 0.75, y: 0.5), (x: 1.25, y: 0.0),
    ]
}

fn regular_polygon(sides: usize) -> Polygon<f64> {
    let ring = (0..sides)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / sides as f64;
            Coord { x: 10.0 + theta.cos(), y: -4.0 + theta.sin() }
        })
        .collect::<Vec<_>>();
    Polygon::new(LineString::from(ring), vec![])
}

#[test]
fn octagon_reference_values() {
    let shape = octagon();
    let options = CircleOptions::default();
    let expected = [
        (Index::Ipq, 0.387275),
        (Index::Iaq, 0.622314),
        (Index::ConvexHull, 0.7),
        (Index::BoundaryAmplitude, 0.844527),
        (Index::Reock, 0.434764),
        (Index::ContainedCircle, 0.343611),
        (Index::FlahertyCrumplinRadius, 0.659366),
        (Index::Nmi, 0.487412),
        (Index::MoaRatio, 3.249799),
        (Index::MomentOfInertia, 0.315715),
        (Index::FlahertyCrumplinLw, 0.220863),
        (Index::EigSeitzinger, 0.25),
        (Index::TaylorReflexive, 0.25),
    ];
    assert_eq!(expected.len(), Index::ALL.len());
    for (index, value) in expected {
        let score = index.evaluate(&shape, &options).unwrap();
        assert!(score.is_clean(), "{index} raised {:?}", score.warnings);
        assert_relative_eq!(score.value, value, epsilon = 1e-3);
    }
}

#[test]
fn octagon_geometry() {
    let shape = octagon();
    assert_relative_eq!(shape.area(), 0.875, epsilon = 1e-12);
    assert_relative_eq!(shape.boundary_length(), 2.5 + 4.0 * 0.125f64.sqrt() + 2.0 * 0.5f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn regular_polygons_approach_the_circle() {
    let options = CircleOptions::default();
    let mut last = [0.0; 4];
    for sides in [6, 12, 24, 48] {
        let shape = regular_polygon(sides);
        let n = sides as f64;

        let ipq = indices::polsby_popper(&shape).unwrap();
        let iaq = indices::schwartzberg(&shape).unwrap();
        let reock = indices::reock(&shape, &options).unwrap().value;
        let contained = indices::contained_circle_quotient(&shape).unwrap().value;

        assert_relative_eq!(ipq, PI / (n * (PI / n).tan()), epsilon = 1e-9);
        assert_relative_eq!(iaq, ipq.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(reock, n * (2.0 * PI / n).sin() / (2.0 * PI), epsilon = 1e-9);
        assert_relative_eq!(contained, PI / (n * (PI / n).tan()), epsilon = 1e-6);

        let current = [ipq, iaq, reock, contained];
        for (now, before) in current.iter().zip(&last) {
            assert!(now > before && *now < 1.0, "{sides} sides: {current:?} after {last:?}");
        }
        last = current;
    }
}

#[test]
fn convex_shapes_have_unit_hull_ratios() {
    let shape = regular_polygon(9);
    assert_relative_eq!(indices::convex_hull_ratio(&shape).unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(indices::boundary_amplitude(&shape).unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(indices::taylor_reflexive(&shape).unwrap(), 1.0);
}

#[test]
fn contained_circle_needs_a_simple_polygon() {
    let a = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 1.0)];
    let b = polygon![(x: 3.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 1.0), (x: 3.0, y: 1.0)];
    let parts = MultiPolygon(vec![a, b]);
    let options = CircleOptions::default();

    assert!(matches!(
        Index::ContainedCircle.evaluate(&parts, &options),
        Err(CompactnessError::NonSimplePolygon(_))
    ));
    // Everything else is defined for multipolygons.
    for index in Index::ALL.into_iter().filter(|&i| i != Index::ContainedCircle) {
        assert!(index.evaluate(&parts, &options).is_ok(), "{index} failed");
    }
}

#[test]
fn zero_area_shape_is_degenerate() {
    let flat = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 2.0, y: 0.0)];
    let options = CircleOptions::default();
    for index in [Index::ConvexHull, Index::Reock, Index::Nmi, Index::MomentOfInertia] {
        assert!(
            matches!(index.evaluate(&flat, &options), Err(CompactnessError::DegenerateInput(_))),
            "{index} accepted a flat shape"
        );
    }
}

#[test]
fn batch_matches_single_evaluation() {
    let shapes = vec![octagon(), regular_polygon(6), regular_polygon(24)];
    let options = CircleOptions::default();
    let scores = evaluate_batch(&shapes, &Index::ALL, &options);
    for (shape, row) in shapes.iter().zip(&scores) {
        for (index, score) in row {
            assert_eq!(score, &index.evaluate(shape, &options));
        }
    }
}
