use geo::{Area, Centroid, ConvexHull, Coord, LineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::geom::{distance, open_ring, PointSet, RingTree, SimpleRing};

/// A polygon-like object the compactness indices are evaluated against.
///
/// Every method has a default built on the polygon parts, so implementing
/// [`RingTree`] and [`PointSet`] is enough.
pub trait Shape: RingTree + PointSet + SimpleRing + Sync {
    /// Total area of all parts (holes excluded).
    fn area(&self) -> f64 {
        self.parts().iter().map(|polygon| polygon.unsigned_area()).sum()
    }

    /// Total boundary length, including hole boundaries.
    fn boundary_length(&self) -> f64 {
        self.parts().iter()
            .flat_map(|polygon| std::iter::once(polygon.exterior()).chain(polygon.interiors()))
            .map(ring_length)
            .sum()
    }

    /// Area-weighted centroid of the parts.
    fn area_centroid(&self) -> Option<Coord<f64>> {
        let (mut x, mut y, mut total) = (0.0, 0.0, 0.0);
        for polygon in self.parts() {
            let Some(c) = Centroid::centroid(polygon) else { continue };
            let area = polygon.unsigned_area();
            x += c.x() * area;
            y += c.y() * area;
            total += area;
        }
        (total > 0.0).then(|| Coord { x: x / total, y: y / total })
    }

    /// Convex hull of the outer boundary vertices.
    fn hull(&self) -> Polygon<f64> {
        MultiPoint::from(self.boundary_points().into_iter().map(Point::from).collect::<Vec<_>>())
            .convex_hull()
    }

    /// Vertices of every outer ring as stored, closing vertex included.
    fn stored_exterior_vertices(&self) -> Vec<Coord<f64>> {
        self.parts().iter().flat_map(|polygon| polygon.exterior().0.iter().copied()).collect()
    }

    /// Open outer rings of every part.
    fn exterior_rings(&self) -> Vec<Vec<Coord<f64>>> {
        self.parts().iter().map(|polygon| open_ring(polygon.exterior())).collect()
    }
}

impl Shape for Polygon<f64> {}

impl Shape for MultiPolygon<f64> {}

/// Length of a closed ring.
pub(crate) fn ring_length(ring: &LineString<f64>) -> f64 {
    ring.lines().map(|line| distance(line.start, line.end)).sum()
}
