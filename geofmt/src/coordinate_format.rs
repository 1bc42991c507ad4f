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

//! Formatting and parsing of full coordinate pairs.

use crate::coordinate::Coordinate;
use crate::degrees::{DegreesFormat, DegreesFormatter};
use crate::error::ParseError;
use crate::orientation::Orientation;
use crate::utm::UtmFormatter;

/// The notation used to represent a coordinate as a string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordinateFormat {
    /// `48.11638° N, 122.77527° W`
    DecimalDegrees,

    /// `48° 06.983' N, 122° 46.516' W`
    DegreesDecimalMinutes,

    /// `48° 6' 59" N, 122° 46' 31" W`
    DegreesMinutesSeconds,

    /// `10U 516726m E 5329260m N`
    Utm,
}

impl CoordinateFormat {
    pub const ALL: [Self; 4] = [
        Self::DecimalDegrees,
        Self::DegreesDecimalMinutes,
        Self::DegreesMinutesSeconds,
        Self::Utm,
    ];
}

/// Converts between [`Coordinate`] values and their textual
/// representations in a [`CoordinateFormat`].
///
/// The embedded [`DegreesFormatter`] and [`UtmFormatter`] are public so
/// that symbol style, display and parsing options can be configured
/// directly.
///
/// ```
/// use geofmt::{Coordinate, CoordinateFormat, CoordinateFormatter};
///
/// let formatter = CoordinateFormatter::new(CoordinateFormat::DecimalDegrees);
/// let port_townsend = Coordinate::new(48.11638, -122.77527);
///
/// assert_eq!(
///     formatter.format(&port_townsend),
///     Some("48.11638° N, 122.77527° W".to_string())
/// );
/// assert_eq!(formatter.parse("48.11638° N, 122.77527° W"), Ok(port_townsend));
/// ```
#[derive(Clone, Debug)]
pub struct CoordinateFormatter {
    /// The notation produced and recognized.
    pub format: CoordinateFormat,

    /// Formats and parses the halves of a degree pair.
    pub degrees: DegreesFormatter,

    /// Handles the [`CoordinateFormat::Utm`] notation.
    pub utm: UtmFormatter,
}

impl CoordinateFormatter {
    pub fn new(format: CoordinateFormat) -> Self {
        let degrees_format = match format {
            CoordinateFormat::DecimalDegrees | CoordinateFormat::Utm => {
                DegreesFormat::DecimalDegrees
            }
            CoordinateFormat::DegreesDecimalMinutes => DegreesFormat::DegreesDecimalMinutes,
            CoordinateFormat::DegreesMinutesSeconds => DegreesFormat::DegreesMinutesSeconds,
        };

        Self {
            format,
            degrees: DegreesFormatter::new(degrees_format),
            utm: UtmFormatter::new(),
        }
    }

    /// Renders a coordinate in the configured format, or `None` when it is
    /// invalid.
    pub fn format(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }

        if self.format == CoordinateFormat::Utm {
            return self.utm.format(coordinate);
        }

        let latitude = self.latitude_string(coordinate.latitude)?;
        let longitude = self.longitude_string(coordinate.longitude)?;
        Some(format!("{latitude}, {longitude}"))
    }

    /// Renders the latitude half of a degree pair.
    pub fn latitude_string(&self, latitude: f64) -> Option<String> {
        self.degrees.format_oriented(latitude, Orientation::Latitude)
    }

    /// Renders the longitude half of a degree pair.
    pub fn longitude_string(&self, longitude: f64) -> Option<String> {
        self.degrees
            .format_oriented(longitude, Orientation::Longitude)
    }

    /// Parses a coordinate in the configured format.
    ///
    /// Degree pairs split on a comma when one is present and on a space
    /// otherwise, so `-55.97917 -67.275` works but suffixed halves need the
    /// comma.
    pub fn parse(&self, input: &str) -> Result<Coordinate, ParseError> {
        if self.format == CoordinateFormat::Utm {
            return self.utm.parse(input);
        }

        let input = if self.degrees.parsing_options.trimmed {
            input.trim()
        } else {
            input
        };

        let delimiter = if input.contains(',') { ',' } else { ' ' };
        let halves: Vec<&str> = input
            .split(delimiter)
            .map(str::trim)
            .filter(|half| !half.is_empty())
            .collect();
        let [latitude, longitude] = halves[..] else {
            return Err(ParseError::NoMatch);
        };

        let coordinate = Coordinate::new(
            self.degrees.parse_oriented(latitude, Orientation::Latitude)?,
            self.degrees
                .parse_oriented(longitude, Orientation::Longitude)?,
        );
        if !coordinate.is_valid() {
            return Err(ParseError::InvalidCoordinate);
        }

        Ok(coordinate)
    }
}

impl Default for CoordinateFormatter {
    fn default() -> Self {
        Self::new(CoordinateFormat::DecimalDegrees)
    }
}

/// Parses a coordinate in whichever notation matches, trying decimal
/// degrees, degrees and decimal minutes, degrees minutes seconds and UTM in
/// that order.
pub fn parse_any(input: &str) -> Option<Coordinate> {
    CoordinateFormat::ALL
        .into_iter()
        .find_map(|format| CoordinateFormatter::new(format).parse(input).ok())
}
