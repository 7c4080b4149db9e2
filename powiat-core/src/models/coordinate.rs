#[cfg(test)]
#[path = "../../tests/unit/models/coordinate_test.rs"]
mod coordinate_test;

use colony::prelude::Float;
use geo::Point;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents a geographic coordinate in decimal degrees.
///
/// A coordinate is an identity of a road network node: two coordinates are the same node only
/// when both components are numerically equal. No proximity based deduplication is done.
#[derive(Clone, Copy, Debug)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lon: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }

    fn transmute(&self) -> (u64, u64) {
        // NOTE zero is normalized so that 0. and -0. are the same node
        let bits = |value: Float| if value == 0. { 0 } else { value.to_bits() };

        (bits(self.lat), bits(self.lon))
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (lat, lon) = self.transmute();
        lat.hash(state);
        lon.hash(state);
    }
}

impl Eq for Coordinate {}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.transmute() == other.transmute()
    }
}

impl From<(Float, Float)> for Coordinate {
    fn from((lat, lon): (Float, Float)) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for Point<Float> {
    fn from(coordinate: Coordinate) -> Self {
        Point::new(coordinate.lon, coordinate.lat)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
