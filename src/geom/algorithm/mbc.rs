//! Minimum bounding circle by Skyum's vertex elimination.
//!
//! The point set is reduced to its strictly convex hull, stored clockwise in
//! a circular linked list.  Each iteration scans every remaining vertex `p`
//! together with its two clockwise predecessors, and selects the triple that
//! is lexicographically largest by (circumradius, angle at the middle point).
//! If that angle is at most a right angle, the triple's circumcircle is the
//! answer; otherwise the middle point cannot be on the final circle and is
//! removed.
//!
//! Radii within a relative `RADIUS_TIE` of each other count as equal, so the
//! angle decides between triples of the same circle (e.g. the three triples of
//! a triangle).  Ties on both keys go to the vertex scanned last, which makes
//! results deterministic for a given input order.

use std::f64::consts::FRAC_PI_2;

use geo::Coord;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::diagnostics::Diagnosed;
use crate::error::{CompactnessError, Result};
use crate::geom::algorithm::angle::{angle_at, circumcircle_into};
use crate::geom::algorithm::hull::clockwise_hull;
use crate::geom::circle::Circle;
use crate::geom::points::PointSet;
use crate::options::CircleOptions;

/// Relative difference below which two circumradii are considered equal.
const RADIUS_TIE: f64 = 1e-12;

/// One iteration of the bounding-circle search.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MbcStep {
    /// Circumcircle of the selected triple.
    pub candidate: Circle,
    /// Angle at the middle point of the selected triple.
    pub angle: f64,
    /// The middle point, if it was removed in this iteration.
    pub removed: Option<Coord<f64>>,
}

/// Smallest circle enclosing `points`, using the default options.
pub fn minimum_bounding_circle<P: PointSet + ?Sized>(points: &P) -> Result<Diagnosed<Circle>> {
    minimum_bounding_circle_with(points, &CircleOptions::default())
}

/// Smallest circle enclosing `points`.
///
/// Fails with `DegenerateInput` when fewer than three distinct points are
/// given or all points are collinear, and with `IterationBudgetExceeded`
/// when `options.max_iterations` is set and reached.
pub fn minimum_bounding_circle_with<P: PointSet + ?Sized>(
    points: &P,
    options: &CircleOptions,
) -> Result<Diagnosed<Circle>> {
    skyum(&points.boundary_points(), options, None)
}

/// As [`minimum_bounding_circle_with`], also returning every iteration.
pub fn minimum_bounding_circle_trace<P: PointSet + ?Sized>(
    points: &P,
    options: &CircleOptions,
) -> Result<(Diagnosed<Circle>, Vec<MbcStep>)> {
    let mut steps = Vec::new();
    let circle = skyum(&points.boundary_points(), options, Some(&mut steps))?;
    Ok((circle, steps))
}

/// The selected triple of one iteration.
struct Selection {
    radius: f64,
    angle: f64,
    middle: usize,
    circle: Circle,
}

fn skyum(
    points: &[Coord<f64>],
    options: &CircleOptions,
    mut steps: Option<&mut Vec<MbcStep>>,
) -> Result<Diagnosed<Circle>> {
    let hull = clockwise_hull(points, options.collinear_tolerance)?;
    debug!(points = points.len(), hull = hull.len(), "computing minimum bounding circle");

    let n = hull.len();

    // Circular "linked list" via index arrays.
    let mut prev = (0..n)
        .map(|i| if i == 0 { n - 1 } else { i - 1 })
        .collect::<Vec<_>>();
    let mut next = (0..n)
        .map(|i| if i + 1 == n { 0 } else { i + 1 })
        .collect::<Vec<_>>();
    let mut alive = vec![true; n];
    let mut remaining = n;

    let mut warnings = Vec::new();
    let mut scratch = Vec::new();
    let mut iterations = 0;

    loop {
        if options.max_iterations.is_some_and(|max| iterations >= max) {
            return Err(CompactnessError::IterationBudgetExceeded { iterations });
        }
        iterations += 1;

        // Two points left: the circle on them as diameter encloses everything removed.
        if remaining == 2 {
            let a = (0..n).find(|&i| alive[i]).unwrap_or(0);
            let circle = Circle::from_diameter(hull[a], hull[next[a]]);
            if let Some(steps) = steps.as_deref_mut() {
                steps.push(MbcStep { candidate: circle, angle: 0.0, removed: None });
            }
            debug!(iterations, radius = circle.radius, "minimum bounding circle on two points");
            return Ok(Diagnosed::new(circle, warnings));
        }

        let mut best: Option<Selection> = None;
        for p in (0..n).filter(|&i| alive[i]) {
            let q = prev[p];
            let r = prev[q];

            scratch.clear();
            let circle = circumcircle_into(hull[p], hull[q], hull[r], options, &mut scratch)?;
            for warning in scratch.drain(..) {
                if !warnings.contains(&warning) { warnings.push(warning) }
            }

            let angle = angle_at(hull[p], hull[q], hull[r]);
            let radius = circle.radius;
            let better = match &best {
                None => true,
                Some(b) if (radius - b.radius).abs() <= RADIUS_TIE * radius.max(b.radius) => angle >= b.angle,
                Some(b) => radius > b.radius,
            };
            if better { best = Some(Selection { radius, angle, middle: q, circle }) }
        }

        let Some(Selection { radius, angle, middle, circle }) = best else {
            return Err(CompactnessError::DegenerateInput("no vertices left in hull".to_string()));
        };

        if angle <= FRAC_PI_2 {
            if let Some(steps) = steps.as_deref_mut() {
                steps.push(MbcStep { candidate: circle, angle, removed: None });
            }
            debug!(iterations, radius, "minimum bounding circle converged");
            return Ok(Diagnosed::new(circle, warnings));
        }

        trace!(iteration = iterations, radius, angle, "removing obtuse hull vertex");
        if let Some(steps) = steps.as_deref_mut() {
            steps.push(MbcStep { candidate: circle, angle, removed: Some(hull[middle]) });
        }

        // Remove the middle vertex and link its neighbors together.
        alive[middle] = false;
        remaining -= 1;
        next[prev[middle]] = next[middle];
        prev[next[middle]] = prev[middle];
    }
}
