use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use polycompact_core::{CircleOptions, CompactnessError, Diagnosed, Index, Warning};

use geo::{Coord, LineString, Polygon};

fn to_py_err(e: CompactnessError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn coords(points: Vec<(f64, f64)>) -> Vec<Coord<f64>> {
    points.into_iter().map(|(x, y)| Coord { x, y }).collect()
}

fn warning_strings(warnings: &[Warning]) -> Vec<String> {
    warnings.iter().map(Warning::to_string).collect()
}

/// Python-facing circle result.
#[pyclass(frozen)]
pub struct Circle {
    #[pyo3(get)] x: f64,
    #[pyo3(get)] y: f64,
    #[pyo3(get)] radius: f64,
    /// Degeneracies met while computing the circle.
    #[pyo3(get)] warnings: Vec<String>,
}

impl From<Diagnosed<polycompact_core::Circle>> for Circle {
    fn from(circle: Diagnosed<polycompact_core::Circle>) -> Self {
        Self {
            x: circle.value.center.x,
            y: circle.value.center.y,
            radius: circle.value.radius,
            warnings: warning_strings(&circle.warnings),
        }
    }
}

#[pymethods]
impl Circle {
    /// Area of the circle.
    pub fn area(&self) -> f64 { std::f64::consts::PI * self.radius * self.radius }

    fn __repr__(&self) -> String {
        format!("Circle(x={}, y={}, radius={})", self.x, self.y, self.radius)
    }
}

/// Smallest circle enclosing a list of (x, y) points.
#[pyfunction]
#[pyo3(signature = (points, max_iterations=None))]
fn minimum_bounding_circle(points: Vec<(f64, f64)>, max_iterations: Option<usize>) -> PyResult<Circle> {
    let options = CircleOptions { max_iterations, ..CircleOptions::default() };
    polycompact_core::minimum_bounding_circle_with(&coords(points), &options)
        .map(Circle::from)
        .map_err(to_py_err)
}

/// Largest circle inside the simple ring given as a list of (x, y) points.
#[pyfunction]
fn maximum_inscribed_circle(ring: Vec<(f64, f64)>) -> PyResult<Circle> {
    polycompact_core::maximum_inscribed_circle(&coords(ring))
        .map(Circle::from)
        .map_err(to_py_err)
}

/// Second moment of area about the origin of a polygon with optional holes.
#[pyfunction]
#[pyo3(signature = (exterior, holes=Vec::new()))]
fn second_moment_of_area(exterior: Vec<(f64, f64)>, holes: Vec<Vec<(f64, f64)>>) -> f64 {
    polycompact_core::second_moment_of_area(&polygon(exterior, holes))
}

/// Evaluate a compactness index by name, returning (value, warnings).
///
/// Parameters
/// ----------
/// index : str
///     Index name, e.g. "ipq", "reock", "polsby_popper", "moment_of_inertia".
/// exterior : list[tuple[float, float]]
///     Outer ring.
/// holes : list[list[tuple[float, float]]], default=[]
///     Inner rings.
#[pyfunction]
#[pyo3(signature = (index, exterior, holes=Vec::new()))]
fn compactness(index: &str, exterior: Vec<(f64, f64)>, holes: Vec<Vec<(f64, f64)>>) -> PyResult<(f64, Vec<String>)> {
    let index = Index::from_name(index).ok_or_else(|| {
        let names = Index::ALL.iter().map(Index::short_name).collect::<Vec<_>>().join(", ");
        PyValueError::new_err(format!("Unknown index {index:?}. Expected one of: {names}"))
    })?;
    let score = index.evaluate(&polygon(exterior, holes), &CircleOptions::default()).map_err(to_py_err)?;
    Ok((score.value, warning_strings(&score.warnings)))
}

fn polygon(exterior: Vec<(f64, f64)>, holes: Vec<Vec<(f64, f64)>>) -> Polygon<f64> {
    Polygon::new(
        LineString::from(coords(exterior)),
        holes.into_iter().map(|hole| LineString::from(coords(hole))).collect(),
    )
}

#[pymodule]
fn polycompact(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Circle>()?;
    m.add_function(wrap_pyfunction!(minimum_bounding_circle, m)?)?;
    m.add_function(wrap_pyfunction!(maximum_inscribed_circle, m)?)?;
    m.add_function(wrap_pyfunction!(second_moment_of_area, m)?)?;
    m.add_function(wrap_pyfunction!(compactness, m)?)?;
    Ok(())
}
