#[cfg(test)]
#[path = "../../tests/unit/models/metric_test.rs"]
mod metric_test;

use crate::models::Coordinate;
use colony::prelude::Float;
use geo::{Distance, Geodesic, Haversine, Point};

/// Provides the way to measure a distance in meters between two raw coordinates.
pub trait DistanceMetric: Send + Sync {
    /// Returns distance in meters.
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Float;
}

/// A geodesic distance on the WGS84 ellipsoid.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeodesicDistance;

impl DistanceMetric for GeodesicDistance {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Float {
        Geodesic.distance(Point::from(*from), Point::from(*to))
    }
}

/// A great-circle distance on a sphere with the mean Earth radius.
#[derive(Clone, Copy, Debug, Default)]
pub struct HaversineDistance;

impl DistanceMetric for HaversineDistance {
    fn distance(&self, from: &Coordinate, to: &Coordinate) -> Float {
        Haversine.distance(Point::from(*from), Point::from(*to))
    }
}
