use geo::{Coord, LineString, MultiPolygon, Polygon};

use crate::geom::points::open_ring;

/// Anything built from outer rings with holes.
pub trait RingTree {
    /// Get the polygon parts (each an outer ring with its holes).
    fn parts(&self) -> &[Polygon<f64>];
}

impl RingTree for Polygon<f64> {
    fn parts(&self) -> &[Polygon<f64>] { std::slice::from_ref(self) }
}

impl RingTree for MultiPolygon<f64> {
    fn parts(&self) -> &[Polygon<f64>] { &self.0 }
}

/// Second moment of area of a polygon or multipolygon, about the origin.
///
/// Each part contributes the magnitude of its outer ring's moment minus the
/// moments of its holes, so ring orientation does not matter.  Parts are
/// summed.
pub fn second_moment_of_area<T: RingTree + ?Sized>(shape: &T) -> f64 {
    shape.parts().iter().map(polygon_moment).sum()
}

/// Post-order over the ring tree: holes first, then the outer ring.
fn polygon_moment(polygon: &Polygon<f64>) -> f64 {
    let holes = polygon.interiors().iter().map(|hole| ring_moment(hole).abs()).sum::<f64>();
    (ring_moment(polygon.exterior()).abs() - holes).abs()
}

/// Signed moment accumulation over the edges of a closed ring.
///
/// `(1/24) Σ (x_i y_{i+1} + 2 x_i y_i + 2 x_{i+1} y_{i+1} + x_{i+1} y_i)(x_i y_{i+1} - x_{i+1} y_i)`
fn ring_moment(ring: &LineString<f64>) -> f64 {
    let coords = open_ring(ring);
    let n = coords.len();
    if n < 3 { return 0.0 }

    let term = |a: Coord<f64>, b: Coord<f64>| {
        let cross = a.x * b.y - b.x * a.y;
        (a.x * b.y + 2.0 * a.x * a.y + 2.0 * b.x * b.y + b.x * a.y) * cross
    };

    (0..n).map(|i| term(coords[i], coords[(i + 1) % n])).sum::<f64>() / 24.0
}
