use serde::{Deserialize, Serialize};

/// Tolerances and budgets shared by the circle engines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleOptions {
    /// Angles (in radians) within this distance of 0 or π count as collinear.
    pub collinear_tolerance: f64,
    /// Two points of a triple closer than this fraction of the triple's
    /// extent count as duplicates.
    pub duplicate_tolerance: f64,
    /// Maximum number of bounding-circle iterations, if any.
    pub max_iterations: Option<usize>,
    /// Number of vertices used when a circle is converted to a polygon.
    pub disk_segments: usize,
}

impl Default for CircleOptions {
    fn default() -> Self {
        Self {
            collinear_tolerance: 1e-8,
            duplicate_tolerance: 1e-12,
            max_iterations: None,
            disk_segments: 64,
        }
    }
}

impl CircleOptions {
    /// Set the bounding-circle iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the collinearity tolerance (radians).
    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }
}
