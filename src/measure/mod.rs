mod batch;
mod index;
mod measures;
mod shape;

pub use batch::{evaluate_batch, ShapeScores};
pub use index::Index;
pub use measures::{
    boundary_amplitude, contained_circle_quotient, convex_hull_ratio, eig_seitzinger,
    flaherty_crumplin_length_width, flaherty_crumplin_radius, moment_of_area_ratio, moment_of_inertia,
    normalized_moment_of_inertia, polsby_popper, reock, schwartzberg, taylor_reflexive,
};
pub use shape::Shape;
