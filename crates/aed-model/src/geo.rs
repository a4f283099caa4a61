//! Coordinates and bounding boxes.
//!
//! GeoJSON orders positions as `[longitude, latitude]`; every type here
//! follows that order.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// GeoJSON position array.
    pub fn to_position(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Inside the absolute longitude/latitude ranges.
    pub fn is_valid(self) -> bool {
        BoundingBox::WORLD.contains(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lon, self.lat)
    }
}

/// An axis-aligned box in longitude/latitude space, inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Rough bounds of the island of Ireland, used as the default region.
    pub const IRELAND: BoundingBox = BoundingBox {
        min_lon: -11.0,
        min_lat: 51.0,
        max_lon: -5.0,
        max_lat: 56.0,
    };

    /// Every valid WGS84 position.
    pub const WORLD: BoundingBox = BoundingBox {
        min_lon: -180.0,
        min_lat: -90.0,
        max_lon: 180.0,
        max_lat: 90.0,
    };

    /// Build a box, rejecting inverted ranges.
    pub fn new(
        min_lon: f64,
        min_lat: f64,
        max_lon: f64,
        max_lat: f64,
    ) -> Result<Self, ModelError> {
        if min_lon > max_lon {
            return Err(ModelError::BoundingBoxInverted {
                axis: "longitude",
                min: min_lon,
                max: max_lon,
            });
        }
        if min_lat > max_lat {
            return Err(ModelError::BoundingBoxInverted {
                axis: "latitude",
                min: min_lat,
                max: max_lat,
            });
        }
        Ok(Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        })
    }

    /// NaN never lies inside a box.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (self.min_lon..=self.max_lon).contains(&coordinate.lon)
            && (self.min_lat..=self.max_lat).contains(&coordinate.lat)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::IRELAND
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.min_lon, self.min_lat, self.max_lon, self.max_lat
        )
    }
}

impl FromStr for BoundingBox {
    type Err = ModelError;

    /// Parse `min_lon,min_lat,max_lon,max_lat`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ModelError::BoundingBoxArity { count: parts.len() });
        }
        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ModelError::BoundingBoxValue {
                    value: (*part).to_string(),
                })?;
        }
        let [min_lon, min_lat, max_lon, max_lat] = values;
        Self::new(min_lon, min_lat, max_lon, max_lat)
    }
}
