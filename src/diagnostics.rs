use std::fmt;

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A recoverable degeneracy met during a computation.
///
/// The computation proceeds with a documented fallback; the warning is handed
/// back to the caller alongside the result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// Two points of a triple coincide (within tolerance).
    DuplicatePoints { a: Coord<f64>, b: Coord<f64> },
    /// A triple is collinear; its circle is the diameter circle of the farthest pair.
    NearCollinear { angle: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::DuplicatePoints { a, b } => {
                write!(f, "duplicate neighbouring points ({}, {}) and ({}, {})", a.x, a.y, b.x, b.y)
            }
            Warning::NearCollinear { angle } => {
                write!(f, "near-collinear triple (angle {angle:e} rad)")
            }
        }
    }
}

/// A value together with the warnings raised while computing it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnosed<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Diagnosed<T> {
    /// Wrap a value with the given warnings.
    #[inline] pub fn new(value: T, warnings: Vec<Warning>) -> Self { Self { value, warnings } }

    /// Wrap a value that raised no warnings.
    #[inline] pub fn clean(value: T) -> Self { Self { value, warnings: Vec::new() } }

    /// Check if no warnings were raised.
    #[inline] pub fn is_clean(&self) -> bool { self.warnings.is_empty() }

    /// Transform the value, keeping the warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Diagnosed<U> {
        Diagnosed { value: f(self.value), warnings: self.warnings }
    }

    /// Discard the warnings.
    #[inline] pub fn into_value(self) -> T { self.value }
}
