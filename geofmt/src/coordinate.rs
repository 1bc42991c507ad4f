// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The geofmt Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A geographic position as latitude and longitude in degrees.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Positive north of the equator, within ±90°.
    pub latitude: f64,

    /// Positive east of the prime meridian, within ±180°.
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Tests that latitude and longitude are finite and within range.
    ///
    /// Parsers never return an invalid coordinate; they fail with
    /// [`crate::ParseError::InvalidCoordinate`] instead.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Returns the coordinate with a canonical longitude.
    ///
    /// Follows the URI comparison rules of RFC 5870: a longitude of -180°
    /// becomes 180° since both name the dateline, and the longitude of a
    /// polar position collapses to 0° since all meridians meet at the poles.
    pub fn normalized(&self) -> Self {
        let mut longitude = if self.longitude == -180.0 {
            180.0
        } else {
            self.longitude
        };

        if self.latitude == -90.0 || self.latitude == 90.0 {
            longitude = 0.0;
        }

        Self::new(self.latitude, longitude)
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.latitude.to_bits());
        state.write_u64(self.longitude.to_bits());
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

/// A coordinate with optional altitude and measurement accuracies.
///
/// The accuracies are magnitudes in meters. A value of zero or less means
/// the accuracy is unknown, which matters when deriving the `geo:` URI
/// uncertainty parameter.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub coordinate: Coordinate,

    /// Altitude in meters, when known.
    pub altitude: Option<f64>,

    /// Radius of horizontal uncertainty in meters.
    pub horizontal_accuracy: f64,

    /// Vertical uncertainty in meters.
    pub vertical_accuracy: f64,
}

impl Location {
    /// A location with no altitude and unknown accuracies.
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            altitude: None,
            horizontal_accuracy: 0.0,
            vertical_accuracy: 0.0,
        }
    }

    /// The single uncertainty value in meters as defined by RFC 5870
    /// section 3.4.3, or `None` when it is unknown.
    ///
    /// The horizontal accuracy is preferred. The vertical accuracy only
    /// counts when an altitude other than zero is present, and when both
    /// accuracies are known the larger one wins.
    pub fn uncertainty(&self) -> Option<f64> {
        match (self.horizontal_uncertainty(), self.vertical_uncertainty()) {
            (None, None) => None,
            (Some(h), None) => Some(h),
            (None, Some(v)) => Some(v),
            (Some(h), Some(v)) => Some(h.max(v)),
        }
    }

    fn horizontal_uncertainty(&self) -> Option<f64> {
        (self.horizontal_accuracy > 0.0).then_some(self.horizontal_accuracy)
    }

    fn vertical_uncertainty(&self) -> Option<f64> {
        (self.vertical_accuracy > 0.0 && self.altitude.unwrap_or(0.0) != 0.0)
            .then_some(self.vertical_accuracy)
    }
}

impl From<Coordinate> for Location {
    fn from(coordinate: Coordinate) -> Self {
        Self::new(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINT_NEMO: Coordinate = Coordinate::new(-48.876667, -123.393333);

    #[test]
    fn validity() {
        assert!(Coordinate::new(90.0, -122.77527).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(90.0000000001, -122.77527).is_valid());
        assert!(!Coordinate::new(48.11638, -180.00000000001).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn dateline_normalization() {
        assert_eq!(POINT_NEMO.normalized(), POINT_NEMO);
        assert_eq!(
            Coordinate::new(-48.876667, 180.0).normalized().longitude,
            180.0
        );
        assert_eq!(
            Coordinate::new(-48.876667, -180.0).normalized().longitude,
            180.0
        );
    }

    #[test]
    fn polar_longitude_normalization() {
        assert_eq!(Coordinate::new(90.0, -123.393333).normalized().longitude, 0.0);
        assert_eq!(Coordinate::new(-90.0, -123.393333).normalized().longitude, 0.0);
    }

    #[test]
    fn uncertainty_prefers_horizontal() {
        let mut location = Location::new(POINT_NEMO);
        assert_eq!(location.uncertainty(), None);

        location.horizontal_accuracy = 1.23;
        assert_eq!(location.uncertainty(), Some(1.23));

        // vertical accuracy counts only alongside a non-zero altitude
        location.horizontal_accuracy = 0.0;
        location.vertical_accuracy = 4.56;
        assert_eq!(location.uncertainty(), None);

        location.altitude = Some(999.0);
        assert_eq!(location.uncertainty(), Some(4.56));

        location.horizontal_accuracy = 1.23;
        assert_eq!(location.uncertainty(), Some(4.56));

        location.horizontal_accuracy = 9.99;
        assert_eq!(location.uncertainty(), Some(9.99));
    }
}
