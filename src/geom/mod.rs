mod algorithm;
mod circle;
mod points;
mod segment;

pub use algorithm::{
    angle_at, circumcircle, circumcircle_with,
    maximum_inscribed_circle, minimum_bounding_circle, minimum_bounding_circle_trace,
    minimum_bounding_circle_with, second_moment_of_area, MbcStep, RingTree, SimpleRing,
};
pub use circle::Circle;
pub(crate) use circle::distance;
pub(crate) use points::{cross, open_ring};
pub use points::PointSet;
