use std::fmt;
use std::str::FromStr;

use crate::dataset::DatasetError;

/// Named slicing plane of a 3D volume.
///
/// The plane name identifies the two axes spanning the slice; the remaining
/// dimension is the free axis the slice index runs along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Plane {
    #[default]
    Yz,
    Xz,
    Xy,
}

impl Plane {
    /// All planes, in free-axis order.
    pub const ALL: [Plane; 3] = [Plane::Yz, Plane::Xz, Plane::Xy];

    /// The volume dimension the slice index runs along.
    pub fn free_axis(self) -> usize {
        match self {
            Plane::Yz => 0,
            Plane::Xz => 1,
            Plane::Xy => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Plane::Yz => "yz",
            Plane::Xz => "xz",
            Plane::Xy => "xy",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Plane {
    type Err = DatasetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "yz" => Ok(Plane::Yz),
            "xz" => Ok(Plane::Xz),
            "xy" => Ok(Plane::Xy),
            _ => Err(DatasetError::UnknownPlane(name.to_owned())),
        }
    }
}
