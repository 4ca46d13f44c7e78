use serde::{Deserialize, Serialize};

use super::coerce::PixelValue;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// A pixel offset inside an icon image (`google.maps.Point`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: impl PixelValue, y: impl PixelValue) -> Self {
        Self {
            x: x.to_px(),
            y: y.to_px(),
        }
    }
}

/// Rendered pixel size of an icon (`google.maps.Size`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: impl PixelValue, height: impl PixelValue) -> Self {
        Self {
            width: width.to_px(),
            height: height.to_px(),
        }
    }

    /// Bottom-centre of a box of this size, the default marker hot-spot.
    pub fn bottom_center(&self) -> Point {
        Point {
            x: self.width.div_euclid(2),
            y: self.height,
        }
    }
}
