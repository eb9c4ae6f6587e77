use thiserror::Error;

/// Errors returned by the circle engines and the compactness indices.
///
/// Recoverable degeneracies (duplicate neighbours, near-collinear triples) are
/// not errors; they are reported through [`crate::Warning`] instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompactnessError {
    /// Too few distinct points, collinear input, or a zero divisor.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// The circumcircle denominator underflowed for a non-collinear triple.
    #[error("numerical instability: circumcircle denominator {denominator:e} is not a normal float")]
    NumericalInstability {
        /// The offending denominator.
        denominator: f64,
    },

    /// The inscribed-circle search needs a single, hole-free, simple ring.
    #[error("non-simple polygon: {0}")]
    NonSimplePolygon(String),

    /// An input coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// The bounding-circle iteration ran past the caller's budget.
    #[error("iteration budget exceeded after {iterations} iterations")]
    IterationBudgetExceeded { iterations: usize },

    /// The Delaunay triangulation rejected the point set.
    #[error("triangulation failed: {0}")]
    Triangulation(String),
}

pub type Result<T> = std::result::Result<T, CompactnessError>;
