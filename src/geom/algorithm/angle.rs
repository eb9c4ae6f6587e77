use std::f64::consts::PI;

use geo::Coord;

use crate::diagnostics::{Diagnosed, Warning};
use crate::error::{CompactnessError, Result};
use crate::geom::circle::{distance, Circle};
use crate::options::CircleOptions;

/// Unsigned angle at `q` between the rays towards `p` and `r`, in `[0, π]`.
///
/// Returns `0.0` when `q` coincides with `p` or `r`.
#[inline]
pub fn angle_at(p: Coord<f64>, q: Coord<f64>, r: Coord<f64>) -> f64 {
    let (ux, uy) = (p.x - q.x, p.y - q.y);
    let (vx, vy) = (r.x - q.x, r.y - q.y);
    let cross = ux * vy - uy * vx;
    let dot = ux * vx + uy * vy;
    cross.abs().atan2(dot)
}

/// Circle through `a`, `b` and `c`, using the default tolerances.
///
/// See [`circumcircle_with`].
pub fn circumcircle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Result<Diagnosed<Circle>> {
    circumcircle_with(a, b, c, &CircleOptions::default())
}

/// Circle through `a`, `b` and `c`.
///
/// Coincident points and collinear triples fall back to the circle whose
/// diameter is the farthest pair, with a warning.  A denominator that
/// underflows for a triple that is not collinear is an error.
pub fn circumcircle_with(
    a: Coord<f64>,
    b: Coord<f64>,
    c: Coord<f64>,
    options: &CircleOptions,
) -> Result<Diagnosed<Circle>> {
    let mut warnings = Vec::new();
    let circle = circumcircle_into(a, b, c, options, &mut warnings)?;
    Ok(Diagnosed::new(circle, warnings))
}

/// As [`circumcircle_with`], pushing warnings onto `warnings`.
pub(crate) fn circumcircle_into(
    a: Coord<f64>,
    b: Coord<f64>,
    c: Coord<f64>,
    options: &CircleOptions,
    warnings: &mut Vec<Warning>,
) -> Result<Circle> {
    let (ab, bc, ca) = (distance(a, b), distance(b, c), distance(c, a));
    let extent = ab.max(bc).max(ca);
    let near = |d: f64| d <= options.duplicate_tolerance * extent;

    if near(ab) || near(bc) || near(ca) {
        let (p, q) = if near(ab) { (a, b) } else if near(bc) { (b, c) } else { (c, a) };
        warnings.push(Warning::DuplicatePoints { a: p, b: q });
        return Ok(farthest_pair_circle(a, b, c));
    }

    let angle = angle_at(a, b, c);
    if angle <= options.collinear_tolerance || PI - angle <= options.collinear_tolerance {
        warnings.push(Warning::NearCollinear { angle });
        return Ok(farthest_pair_circle(a, b, c));
    }

    // Work relative to `a` and evaluate every difference of products with a
    // compensated FMA step, which keeps the denominator accurate for thin triangles.
    let (bx, by) = (b.x - a.x, b.y - a.y);
    let (cx, cy) = (c.x - a.x, c.y - a.y);

    let denominator = 2.0 * diff_of_products(bx, cy, by, cx);
    if !denominator.is_normal() {
        return Err(CompactnessError::NumericalInstability { denominator });
    }

    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let center = Coord {
        x: a.x + diff_of_products(cy, b2, by, c2) / denominator,
        y: a.y + diff_of_products(bx, c2, cx, b2) / denominator,
    };
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(CompactnessError::NumericalInstability { denominator });
    }

    let radius = distance(center, a).max(distance(center, b)).max(distance(center, c));
    Ok(Circle::new(center, radius))
}

/// Circle whose diameter is the farthest-apart pair of the three points.
fn farthest_pair_circle(a: Coord<f64>, b: Coord<f64>, c: Coord<f64>) -> Circle {
    let pairs = [(a, b), (b, c), (c, a)];
    let (p, q) = pairs.into_iter()
        .max_by(|(p1, q1), (p2, q2)| distance(*p1, *q1).total_cmp(&distance(*p2, *q2)))
        .unwrap_or((a, b));
    Circle::from_diameter(p, q)
}

/// `a * b - c * d` with a single rounding error (Kahan's algorithm).
#[inline]
fn diff_of_products(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let w = d * c;
    let e = (-d).mul_add(c, w);
    let f = a.mul_add(b, -w);
    f + e
}
