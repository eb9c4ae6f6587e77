#![doc = "Shape-compactness descriptors: minimum bounding circle, maximum inscribed circle, second moment of area and the compactness indices built on them."]
mod diagnostics;
mod error;
mod geom;
mod measure;
mod options;

#[doc(inline)]
pub use diagnostics::{Diagnosed, Warning};

#[doc(inline)]
pub use error::{CompactnessError, Result};

#[doc(inline)]
pub use options::CircleOptions;

#[doc(inline)]
pub use geom::{
    angle_at, circumcircle, circumcircle_with, maximum_inscribed_circle, minimum_bounding_circle,
    minimum_bounding_circle_trace, minimum_bounding_circle_with, second_moment_of_area, Circle, MbcStep,
    PointSet, RingTree, SimpleRing,
};

#[doc(inline)]
pub use measure::{evaluate_batch, Index, Shape, ShapeScores};

/// Individual compactness index functions.
pub mod indices {
    pub use crate::measure::{
        boundary_amplitude, contained_circle_quotient, convex_hull_ratio, eig_seitzinger,
        flaherty_crumplin_length_width, flaherty_crumplin_radius, moment_of_area_ratio, moment_of_inertia,
        normalized_moment_of_inertia, polsby_popper, reock, schwartzberg, taylor_reflexive,
    };
}
