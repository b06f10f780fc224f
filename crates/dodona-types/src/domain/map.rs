use serde::Serialize;

use super::RegionId;

/// A point in the map's drawing space (x grows right, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stylized outline of one tétrada. Illustrative only, not a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapDistrict {
    pub id: RegionId,
    pub label: &'static str,
    pub english_name: &'static str,
    pub city: &'static str,
    pub outline: Vec<Point>,
    pub label_at: Point,
    pub city_at: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLandmark {
    pub name: &'static str,
    pub at: Point,
}
