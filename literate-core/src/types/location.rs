//! Geographic coordinates and map viewports

use crate::error::{LiterateError, Result};
use serde::{Deserialize, Serialize};

/// A point on the globe in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Degrees north, in [-90, 90]
    pub latitude: f64,

    /// Degrees east, in [-180, 180]
    pub longitude: f64,
}

impl Location {
    /// Create a location without range checks
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a location, rejecting coordinates outside the valid ranges
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self::new(latitude, longitude))
        } else {
            Err(LiterateError::InvalidLocation {
                latitude,
                longitude,
            })
        }
    }
}

/// Angular extent of a viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A map viewport: a center coordinate and the span around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Location,
    pub span: Span,
}

impl Region {
    pub fn new(center: Location, span: Span) -> Self {
        Self { center, span }
    }

    /// Southern and northern edges
    pub fn latitude_bounds(&self) -> (f64, f64) {
        let half = self.span.latitude_delta / 2.0;
        (self.center.latitude - half, self.center.latitude + half)
    }

    /// Western and eastern edges
    pub fn longitude_bounds(&self) -> (f64, f64) {
        let half = self.span.longitude_delta / 2.0;
        (self.center.longitude - half, self.center.longitude + half)
    }

    /// Whether the location lies inside the viewport (edges included)
    pub fn contains(&self, location: &Location) -> bool {
        let (south, north) = self.latitude_bounds();
        let (west, east) = self.longitude_bounds();
        (south..=north).contains(&location.latitude) && (west..=east).contains(&location.longitude)
    }
}
