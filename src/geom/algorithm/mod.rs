mod angle;
mod hull;
mod mbc;
mod mic;
mod moment;
mod voronoi;

pub use angle::{angle_at, circumcircle, circumcircle_with};
pub use mbc::{minimum_bounding_circle, minimum_bounding_circle_trace, minimum_bounding_circle_with, MbcStep};
pub use mic::{maximum_inscribed_circle, SimpleRing};
pub use moment::{second_moment_of_area, RingTree};
