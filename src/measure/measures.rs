//! Compactness indices: dimensionless ratios comparing a shape to reference
//! circles built from its area, perimeter, moment or point set.

use std::f64::consts::PI;

use geo::Area;

use crate::diagnostics::Diagnosed;
use crate::error::{CompactnessError, Result};
use crate::geom::{
    cross, distance, maximum_inscribed_circle, minimum_bounding_circle_with, second_moment_of_area,
};
use crate::measure::shape::{ring_length, Shape};
use crate::options::CircleOptions;

/// Divide, failing on a zero (or non-finite) divisor instead of returning infinity.
fn ratio(numerator: f64, denominator: f64, what: &str) -> Result<f64> {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(CompactnessError::DegenerateInput(format!("{what} is {denominator}")));
    }
    Ok(numerator / denominator)
}

// ---------------------------------------------------------------------------
// Area / perimeter measures
// ---------------------------------------------------------------------------

/// Isoperimetric quotient (Polsby-Popper): area over the area of the
/// circle with the same perimeter, `4π·A / P²`.
pub fn polsby_popper<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let perimeter = shape.boundary_length();
    ratio(4.0 * PI * shape.area(), perimeter * perimeter, "perimeter")
}

/// Isoareal quotient (Schwartzberg): perimeter of the circle with the same
/// area over the perimeter, `2π·sqrt(A/π) / P`.
pub fn schwartzberg<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    ratio(2.0 * PI * (shape.area() / PI).sqrt(), shape.boundary_length(), "perimeter")
}

/// Area over the area of the convex hull.
pub fn convex_hull_ratio<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    ratio(shape.area(), shape.hull().unsigned_area(), "convex hull area")
}

/// Perimeter of the convex hull over the perimeter.
pub fn boundary_amplitude<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    ratio(ring_length(shape.hull().exterior()), shape.boundary_length(), "perimeter")
}

// ---------------------------------------------------------------------------
// Circle measures
// ---------------------------------------------------------------------------

/// Reock: area over the area of the minimum bounding circle.
pub fn reock<S: Shape + ?Sized>(shape: &S, options: &CircleOptions) -> Result<Diagnosed<f64>> {
    let circle = minimum_bounding_circle_with(shape, options)?;
    let value = ratio(shape.area(), circle.value.area(), "bounding circle area")?;
    Ok(circle.map(|_| value))
}

/// Contained-circle areal quotient: area of the maximum inscribed circle over
/// the area.  Only defined for a single polygon without holes.
pub fn contained_circle_quotient<S: Shape + ?Sized>(shape: &S) -> Result<Diagnosed<f64>> {
    let circle = maximum_inscribed_circle(shape)?;
    let value = ratio(circle.value.area(), shape.area(), "area")?;
    Ok(circle.map(|_| value))
}

/// Flaherty-Crumplin radius ratio: radius of the circle with the same area
/// over the radius of the minimum bounding circle.
pub fn flaherty_crumplin_radius<S: Shape + ?Sized>(shape: &S, options: &CircleOptions) -> Result<Diagnosed<f64>> {
    let circle = minimum_bounding_circle_with(shape, options)?;
    let value = ratio((shape.area() / PI).sqrt(), circle.value.radius, "bounding circle radius")?;
    Ok(circle.map(|_| value))
}

// ---------------------------------------------------------------------------
// Moment measures
// ---------------------------------------------------------------------------

/// Normalized moment of inertia: `A² / (2π·I)` with `I` the second moment of area.
pub fn normalized_moment_of_inertia<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let area = shape.area();
    ratio(area * area, 2.0 * PI * second_moment_of_area(shape), "second moment of area")
}

/// Moment of the circle with the same perimeter, `π/2·r⁴`, over the second
/// moment of area.
pub fn moment_of_area_ratio<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let r = shape.boundary_length() / (2.0 * PI);
    ratio(PI * 0.5 * r.powi(4), second_moment_of_area(shape), "second moment of area")
}

/// Area over `sqrt(2·Σ d²)`, where `d` runs over the distances from the
/// centroid to every stored outer-ring vertex (unit point masses).
pub fn moment_of_inertia<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let centroid = shape.area_centroid()
        .ok_or_else(|| CompactnessError::DegenerateInput("shape has no centroid".to_string()))?;
    let sum = shape.stored_exterior_vertices().into_iter()
        .map(|v| distance(v, centroid).powi(2))
        .sum::<f64>();
    ratio(shape.area(), (2.0 * sum).sqrt(), "point moment")
}

// ---------------------------------------------------------------------------
// Length-width and angle measures
// ---------------------------------------------------------------------------

/// Flaherty-Crumplin length-width ratio: shortest non-zero over longest
/// pairwise distance between boundary vertices.
pub fn flaherty_crumplin_length_width<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let points = shape.boundary_points();
    let (mut min, mut max) = (f64::INFINITY, 0.0f64);
    for (i, &a) in points.iter().enumerate() {
        for &b in &points[i + 1..] {
            let d = distance(a, b);
            if d > 0.0 { min = min.min(d) }
            max = max.max(d);
        }
    }
    ratio(min, max, "diameter")
}

/// Eig-Seitzinger: east-west extent minus north-south extent.
pub fn eig_seitzinger<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let points = shape.boundary_points();
    if points.is_empty() {
        return Err(CompactnessError::DegenerateInput("shape has no vertices".to_string()));
    }
    let (min_x, max_x, min_y, max_y) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(a, b, c, d), p| (a.min(p.x), b.max(p.x), c.min(p.y), d.max(p.y)),
    );
    Ok((max_x - min_x) - (max_y - min_y))
}

/// Taylor reflexive-angle index, `(N - R) / (N + R)`, where `R` counts the
/// reflex interior angles of the outer rings and `N` the rest.
///
/// Straight angles count as non-reflex.  The result is positive when convex
/// corners dominate, and equals 1 for a convex polygon.
pub fn taylor_reflexive<S: Shape + ?Sized>(shape: &S) -> Result<f64> {
    let (mut convex, mut reflex) = (0usize, 0usize);
    for ring in shape.exterior_rings() {
        let n = ring.len();
        if n < 3 { continue }

        // Orientation of the ring, so that reflex corners turn against it.
        let orientation = (0..n).map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        }).sum::<f64>().signum();

        for i in 0..n {
            let turn = cross(ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]);
            if turn * orientation < 0.0 { reflex += 1 } else { convex += 1 }
        }
    }
    let (n, r) = (convex as f64, reflex as f64);
    ratio(n - r, n + r, "vertex count")
}
