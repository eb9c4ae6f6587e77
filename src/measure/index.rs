use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnosed;
use crate::error::{CompactnessError, Result};
use crate::measure::measures;
use crate::measure::shape::Shape;
use crate::options::CircleOptions;

/// A compactness index that can be evaluated against any [`Shape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Index {
    // Area and perimeter indices:
    Ipq,
    Iaq,
    ConvexHull,
    BoundaryAmplitude,

    // Circle indices:
    Reock,
    ContainedCircle,
    FlahertyCrumplinRadius,

    // Moment indices:
    Nmi,
    MoaRatio,
    MomentOfInertia,

    // Extent and angle indices:
    FlahertyCrumplinLw,
    EigSeitzinger,
    TaylorReflexive,
}

impl Index {
    /// Every index, in display order.
    pub const ALL: [Index; 13] = [
        Index::Ipq,
        Index::Iaq,
        Index::ConvexHull,
        Index::BoundaryAmplitude,
        Index::Reock,
        Index::ContainedCircle,
        Index::FlahertyCrumplinRadius,
        Index::Nmi,
        Index::MoaRatio,
        Index::MomentOfInertia,
        Index::FlahertyCrumplinLw,
        Index::EigSeitzinger,
        Index::TaylorReflexive,
    ];

    /// Get a short name for this index (for display and lookup).
    pub fn short_name(&self) -> &'static str {
        match self {
            Index::Ipq => "ipq",
            Index::Iaq => "iaq",
            Index::ConvexHull => "convex_hull",
            Index::BoundaryAmplitude => "boundary_amplitude",
            Index::Reock => "reock",
            Index::ContainedCircle => "contained_circle",
            Index::FlahertyCrumplinRadius => "flaherty_crumplin_radius",
            Index::Nmi => "nmi",
            Index::MoaRatio => "moa_ratio",
            Index::MomentOfInertia => "moment_of_inertia",
            Index::FlahertyCrumplinLw => "flaherty_crumplin_lw",
            Index::EigSeitzinger => "eig_seitzinger",
            Index::TaylorReflexive => "taylor_reflexive",
        }
    }

    /// Look an index up by short name; the common author names are accepted too.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match name.as_str() {
            "polsby_popper" => Some(Index::Ipq),
            "schwartzberg" => Some(Index::Iaq),
            other => Index::ALL.into_iter().find(|index| index.short_name() == other),
        }
    }

    /// Evaluate this index for a shape.
    pub fn evaluate<S: Shape + ?Sized>(&self, shape: &S, options: &CircleOptions) -> Result<Diagnosed<f64>> {
        match self {
            Index::Ipq => measures::polsby_popper(shape).map(Diagnosed::clean),
            Index::Iaq => measures::schwartzberg(shape).map(Diagnosed::clean),
            Index::ConvexHull => measures::convex_hull_ratio(shape).map(Diagnosed::clean),
            Index::BoundaryAmplitude => measures::boundary_amplitude(shape).map(Diagnosed::clean),
            Index::Reock => measures::reock(shape, options),
            Index::ContainedCircle => measures::contained_circle_quotient(shape),
            Index::FlahertyCrumplinRadius => measures::flaherty_crumplin_radius(shape, options),
            Index::Nmi => measures::normalized_moment_of_inertia(shape).map(Diagnosed::clean),
            Index::MoaRatio => measures::moment_of_area_ratio(shape).map(Diagnosed::clean),
            Index::MomentOfInertia => measures::moment_of_inertia(shape).map(Diagnosed::clean),
            Index::FlahertyCrumplinLw => measures::flaherty_crumplin_length_width(shape).map(Diagnosed::clean),
            Index::EigSeitzinger => measures::eig_seitzinger(shape).map(Diagnosed::clean),
            Index::TaylorReflexive => measures::taylor_reflexive(shape).map(Diagnosed::clean),
        }
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Index {
    type Err = CompactnessError;

    fn from_str(s: &str) -> Result<Self> {
        Index::from_name(s)
            .ok_or_else(|| CompactnessError::DegenerateInput(format!("unknown compactness index '{s}'")))
    }
}
