//! Maximum inscribed circle by Voronoi vertex search.
//!
//! The center of the largest empty circle inside a simple polygon lies on a
//! Voronoi vertex of the boundary points.  Every vertex strictly inside the
//! polygon is scored by its distance to the nearest boundary *segment*
//! (distance to the nearest boundary point would overestimate the radius
//! wherever an edge passes closer than its endpoints), and the best one wins.

use geo::{Contains, Coord, LineString, MultiPolygon, Polygon};
use tracing::debug;

use crate::diagnostics::Diagnosed;
use crate::error::{CompactnessError, Result};
use crate::geom::algorithm::voronoi::voronoi_vertices;
use crate::geom::circle::Circle;
use crate::geom::points::{ensure_finite, open_ring};
use crate::geom::segment::SegmentIndex;

/// Something that describes a single simple ring without holes.
pub trait SimpleRing {
    /// The ring's vertices in boundary order, without a closing duplicate.
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>>;
}

impl SimpleRing for [Coord<f64>] {
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>> { Ok(open_ring(&LineString::from(self.to_vec()))) }
}

impl SimpleRing for Vec<Coord<f64>> {
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>> { self.as_slice().simple_ring() }
}

impl SimpleRing for LineString<f64> {
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>> { Ok(open_ring(self)) }
}

impl SimpleRing for Polygon<f64> {
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>> {
        if !self.interiors().is_empty() {
            return Err(CompactnessError::NonSimplePolygon(
                format!("polygon has {} holes", self.interiors().len())
            ));
        }
        Ok(open_ring(self.exterior()))
    }
}

impl SimpleRing for MultiPolygon<f64> {
    fn simple_ring(&self) -> Result<Vec<Coord<f64>>> {
        match self.0.as_slice() {
            [polygon] => polygon.simple_ring(),
            parts => Err(CompactnessError::NonSimplePolygon(
                format!("expected a single polygon, got {} parts", parts.len())
            )),
        }
    }
}

/// Largest circle inside the simple ring described by `boundary`.
///
/// Fails with `NonSimplePolygon` for holes, multiple parts or a
/// self-intersecting ring, and with `DegenerateInput` when the ring has fewer
/// than three distinct vertices or no Voronoi vertex falls inside it.
pub fn maximum_inscribed_circle<R: SimpleRing + ?Sized>(boundary: &R) -> Result<Diagnosed<Circle>> {
    let mut ring = boundary.simple_ring()?;
    ensure_finite(&ring)?;

    // Drop repeated consecutive vertices, which would form zero-length edges.
    ring.dedup();
    while ring.len() > 1 && ring.first() == ring.last() { ring.pop(); }
    if ring.len() < 3 {
        return Err(CompactnessError::DegenerateInput(
            format!("ring needs at least 3 distinct vertices, got {}", ring.len())
        ));
    }

    let edges = SegmentIndex::from_ring(&ring);
    if let Some((a, b)) = edges.first_crossing() {
        return Err(CompactnessError::NonSimplePolygon(format!("edges {a} and {b} intersect")));
    }

    let polygon = Polygon::new(LineString::from(ring.clone()), vec![]);
    let vertices = voronoi_vertices(&ring)?;
    let candidates = vertices.iter().filter(|v| polygon.contains(*v)).collect::<Vec<_>>();
    debug!(edges = edges.len(), vertices = vertices.len(), interior = candidates.len(),
        "searching Voronoi vertices for maximum inscribed circle");

    let mut best: Option<Circle> = None;
    for &center in candidates {
        let Some(radius) = edges.nearest_distance(center) else { continue };
        if best.is_none_or(|b| radius > b.radius) { best = Some(Circle::new(center, radius)) }
    }

    best.map(Diagnosed::clean).ok_or_else(|| {
        CompactnessError::DegenerateInput("no Voronoi vertex lies inside the polygon".to_string())
    })
}
