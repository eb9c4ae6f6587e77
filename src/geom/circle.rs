use std::f64::consts::PI;

use geo::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

use crate::options::CircleOptions;

/// A circle in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl Circle {
    /// Construct a circle from its center and radius.
    #[inline]
    pub fn new(center: Coord<f64>, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "radius must be non-negative");
        Self { center, radius }
    }

    /// The smallest circle through `a` and `b`, i.e. the circle with `ab` as diameter.
    pub fn from_diameter(a: Coord<f64>, b: Coord<f64>) -> Self {
        let center = Coord { x: (a.x + b.x) / 2.0, y: (a.y + b.y) / 2.0 };
        Self { center, radius: distance(a, b) / 2.0 }
    }

    /// Area of the disk.
    #[inline] pub fn area(&self) -> f64 { PI * self.radius * self.radius }

    /// Check if `point` lies in the closed disk, allowing `tolerance` of slack.
    #[inline]
    pub fn contains(&self, point: Coord<f64>, tolerance: f64) -> bool {
        distance(self.center, point) <= self.radius + tolerance
    }

    /// Check if `point` lies strictly inside the disk, by more than `tolerance`.
    #[inline]
    pub fn strictly_contains(&self, point: Coord<f64>, tolerance: f64) -> bool {
        distance(self.center, point) < self.radius - tolerance
    }

    /// Approximate the filled disk by a counter-clockwise polygon with `segments` vertices.
    pub fn to_polygon(&self, segments: usize) -> Polygon<f64> {
        debug_assert!(segments >= 3, "segments must be at least 3");

        let ring = (0..segments)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / segments as f64;
                Coord {
                    x: self.center.x + self.radius * theta.cos(),
                    y: self.center.y + self.radius * theta.sin(),
                }
            })
            .collect::<Vec<_>>();

        Polygon::new(LineString::from(ring), vec![])
    }

    /// Approximate the filled disk with `options.disk_segments` vertices.
    pub fn to_disk(&self, options: &CircleOptions) -> Polygon<f64> {
        self.to_polygon(options.disk_segments)
    }
}

/// Euclidean distance between two coordinates.
#[inline]
pub(crate) fn distance(a: Coord<f64>, b: Coord<f64>) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
