use geo::{line_intersection::{line_intersection, LineIntersection}, Coord, Line};
use rstar::{PointDistance, RTree, RTreeObject, AABB};

/// A boundary edge in an R-tree, associated with its position in the ring.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    idx: usize, // Index of the edge in the ring (edge i runs from vertex i to i + 1)
    line: Line<f64>,
}

impl Segment {
    pub(crate) fn new(idx: usize, start: Coord<f64>, end: Coord<f64>) -> Self {
        Self { idx, line: Line::new(start, end) }
    }

    /// Get the index of the edge in its ring.
    #[inline] pub(crate) fn idx(&self) -> usize { self.idx }

    /// Get a reference to the underlying line.
    #[inline] pub(crate) fn line(&self) -> &Line<f64> { &self.line }

    /// Squared distance from `point` to the closest point of the segment.
    fn distance_2_to(&self, point: Coord<f64>) -> f64 {
        let (start, dx, dy) = (self.line.start, self.line.dx(), self.line.dy());
        let length_2 = dx * dx + dy * dy;
        let t = if length_2 > 0.0 {
            (((point.x - start.x) * dx + (point.y - start.y) * dy) / length_2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (ex, ey) = (start.x + t * dx - point.x, start.y + t * dy - point.y);
        ex * ex + ey * ey
    }
}

impl RTreeObject for Segment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.line.start.into(), self.line.end.into())
    }
}

impl PointDistance for Segment {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.distance_2_to(Coord { x: point[0], y: point[1] })
    }
}

/// The edges of a closed ring, indexed for nearest-edge and crossing queries.
#[derive(Debug)]
pub(crate) struct SegmentIndex {
    len: usize,
    rtree: RTree<Segment>,
}

impl SegmentIndex {
    /// Index the edges of the ring through `ring` (closing edge included).
    pub(crate) fn from_ring(ring: &[Coord<f64>]) -> Self {
        let n = ring.len();
        Self {
            len: n,
            rtree: RTree::bulk_load(
                (0..n).map(|i| Segment::new(i, ring[i], ring[(i + 1) % n])).collect()
            ),
        }
    }

    /// Get the number of edges.
    #[inline] pub(crate) fn len(&self) -> usize { self.len }

    /// Distance from `point` to the nearest edge.
    pub(crate) fn nearest_distance(&self, point: Coord<f64>) -> Option<f64> {
        self.rtree.nearest_neighbor(&[point.x, point.y])
            .map(|segment| segment.distance_2_to(point).sqrt())
    }

    /// Find a pair of edges that cross or overlap, if any.
    ///
    /// Consecutive edges may share their common vertex, but must not overlap.
    pub(crate) fn first_crossing(&self) -> Option<(usize, usize)> {
        for a in self.rtree.iter() {
            for b in self.rtree.locate_in_envelope_intersecting(&a.envelope()) {
                if b.idx() <= a.idx() { continue }
                let Some(intersection) = line_intersection(*a.line(), *b.line()) else { continue };

                let adjacent = b.idx() == a.idx() + 1 || (a.idx() == 0 && b.idx() + 1 == self.len);
                let crossing = match intersection {
                    LineIntersection::Collinear { .. } => true,
                    LineIntersection::SinglePoint { is_proper, .. } => is_proper || !adjacent,
                };
                if crossing { return Some((a.idx(), b.idx())) }
            }
        }
        None
    }
}
