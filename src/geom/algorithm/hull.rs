use std::f64::consts::PI;

use geo::{ConvexHull, Coord, MultiPoint, Point, Winding};

use crate::error::{CompactnessError, Result};
use crate::geom::algorithm::angle::angle_at;
use crate::geom::points::{dedup_points, ensure_finite, open_ring};

/// Compute the vertices of the convex hull of `points`, in clockwise order.
///
/// Duplicates and interior points are discarded, and so are hull points
/// lying on a hull edge (within `collinear_tolerance` radians of a straight
/// angle), leaving a strictly convex ring of at least three vertices.
pub(crate) fn clockwise_hull(points: &[Coord<f64>], collinear_tolerance: f64) -> Result<Vec<Coord<f64>>> {
    ensure_finite(points)?;

    let points = dedup_points(points);
    if points.len() < 3 {
        return Err(CompactnessError::DegenerateInput(
            format!("need at least 3 distinct points, got {}", points.len())
        ));
    }

    let mut ring = MultiPoint::from(points.into_iter().map(Point::from).collect::<Vec<_>>())
        .convex_hull()
        .exterior()
        .clone();
    ring.make_cw_winding();

    let hull = strictly_convex(&open_ring(&ring), collinear_tolerance);
    if hull.len() < 3 {
        return Err(CompactnessError::DegenerateInput("all points are collinear".to_string()));
    }
    Ok(hull)
}

/// Drop vertices whose interior angle is (nearly) straight.
fn strictly_convex(ring: &[Coord<f64>], collinear_tolerance: f64) -> Vec<Coord<f64>> {
    let n = ring.len();
    if n < 3 { return ring.to_vec() }

    (0..n)
        .filter(|&i| {
            let prev = ring[(i + n - 1) % n];
            let next = ring[(i + 1) % n];
            PI - angle_at(prev, ring[i], next) > collinear_tolerance
        })
        .map(|i| ring[i])
        .collect()
}
