use std::fmt;
use std::str::FromStr;

use crate::error::{OperationError, SilhouetteError};
use crate::math::{Point2, Point3};

/// One of the three axis-aligned projection planes.
///
/// Projection drops the axis normal to the plane: `XY` keeps `(x, y)`,
/// `XZ` keeps `(x, z)`, `YZ` keeps `(y, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProjectionPlane {
    XY,
    XZ,
    YZ,
}

impl ProjectionPlane {
    /// All planes in canonical order.
    pub const ALL: [Self; 3] = [Self::XY, Self::XZ, Self::YZ];

    /// Projects a single 3D point onto this plane.
    ///
    /// Non-finite coordinates pass through unchanged.
    #[must_use]
    pub fn project(self, p: &Point3) -> Point2 {
        match self {
            Self::XY => Point2::new(p.x, p.y),
            Self::XZ => Point2::new(p.x, p.z),
            Self::YZ => Point2::new(p.y, p.z),
        }
    }

    /// Returns the plane label, e.g. `"XZ"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::XY => "XY",
            Self::XZ => "XZ",
            Self::YZ => "YZ",
        }
    }
}

impl fmt::Display for ProjectionPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProjectionPlane {
    type Err = SilhouetteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "XY" => Ok(Self::XY),
            "XZ" => Ok(Self::XZ),
            "YZ" => Ok(Self::YZ),
            other => {
                Err(OperationError::InvalidInput(format!("unknown projection plane {other:?}")).into())
            }
        }
    }
}
