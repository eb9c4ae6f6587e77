use ahash::AHashSet;
use geo::{Coord, CoordsIter, LineString, MultiPolygon, Polygon};

use crate::error::{CompactnessError, Result};

/// Anything that can enumerate the vertices of its outer boundary.
///
/// Polygons contribute the vertices of every exterior ring, without the
/// duplicate closing coordinate.  Holes are ignored: they cannot touch the
/// bounding circle, and the inscribed-circle search rejects them separately.
pub trait PointSet {
    fn boundary_points(&self) -> Vec<Coord<f64>>;
}

impl PointSet for [Coord<f64>] {
    fn boundary_points(&self) -> Vec<Coord<f64>> { self.to_vec() }
}

impl PointSet for Vec<Coord<f64>> {
    fn boundary_points(&self) -> Vec<Coord<f64>> { self.clone() }
}

impl PointSet for LineString<f64> {
    fn boundary_points(&self) -> Vec<Coord<f64>> { open_ring(self) }
}

impl PointSet for Polygon<f64> {
    fn boundary_points(&self) -> Vec<Coord<f64>> { open_ring(self.exterior()) }
}

impl PointSet for MultiPolygon<f64> {
    fn boundary_points(&self) -> Vec<Coord<f64>> {
        self.0.iter().flat_map(|polygon| open_ring(polygon.exterior())).collect()
    }
}

/// Get the vertices of a ring without the duplicate closing coord.
pub(crate) fn open_ring(ring: &LineString<f64>) -> Vec<Coord<f64>> {
    let mut coords = ring.coords_iter().collect::<Vec<_>>();
    if coords.len() > 1 && coords.first() == coords.last() { coords.pop(); }
    coords
}

/// Fail on the first NaN or infinite coordinate.
pub(crate) fn ensure_finite(points: &[Coord<f64>]) -> Result<()> {
    match points.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        Some(c) => Err(CompactnessError::NonFiniteCoordinate { x: c.x, y: c.y }),
        None => Ok(()),
    }
}

/// Drop exact duplicate coordinates, keeping the first occurrence of each.
pub(crate) fn dedup_points(points: &[Coord<f64>]) -> Vec<Coord<f64>> {
    // Normalize -0.0 so that it hashes equal to 0.0.
    #[inline]
    fn key(c: &Coord<f64>) -> (u64, u64) { ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits()) }

    let mut seen = AHashSet::with_capacity(points.len());
    points.iter().filter(|c| seen.insert(key(c))).copied().collect()
}

/// Twice the signed area of triangle `abc` (positive when counter-clockwise).
#[inline]
pub(crate) fn cross(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
