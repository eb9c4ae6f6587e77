use rayon::prelude::*;
use tracing::debug;

use crate::diagnostics::Diagnosed;
use crate::error::Result;
use crate::measure::index::Index;
use crate::measure::shape::Shape;
use crate::options::CircleOptions;

/// Scores of one shape, one entry per requested index (in request order).
pub type ShapeScores = Vec<(Index, Result<Diagnosed<f64>>)>;

/// Evaluate `indices` for every shape in parallel.
///
/// Shapes are independent, so each is scored on its own worker; the output
/// preserves input order and a failing index never affects the others.
pub fn evaluate_batch<S: Shape>(shapes: &[S], indices: &[Index], options: &CircleOptions) -> Vec<ShapeScores> {
    debug!(shapes = shapes.len(), indices = indices.len(), "evaluating compactness batch");
    shapes.par_iter()
        .map(|shape| indices.iter().map(|&index| (index, index.evaluate(shape, options))).collect())
        .collect()
}
