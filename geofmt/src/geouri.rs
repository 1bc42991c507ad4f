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

//! The `geo:` URI scheme of RFC 5870.

use log::trace;

use crate::coordinate::{Coordinate, Location};
use crate::error::ParseError;
use crate::options::ParsingOptions;

const SCHEME: &str = "geo:";
const WGS84: &str = "wgs84";

/// Options for rendering `geo:` URIs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoUriFormatOptions {
    /// Canonicalize the coordinate per the RFC 5870 comparison rules before
    /// rendering: the dateline becomes 180° and polar longitudes collapse
    /// to 0°. Applies to parsing as well. On by default.
    pub normalize_longitude: bool,

    /// Emit the `crs=wgs84` parameter explicitly. WGS-84 is the default
    /// reference system, so this is off by default.
    pub include_crs: bool,
}

impl Default for GeoUriFormatOptions {
    fn default() -> Self {
        Self {
            normalize_longitude: true,
            include_crs: false,
        }
    }
}

/// Converts between [`Location`] values and `geo:` URIs such as
/// `geo:27.988056,86.925278,8848.86;u=0.21`.
///
/// ```
/// use geofmt::{Coordinate, GeoUriFormatter, Location};
///
/// let formatter = GeoUriFormatter::new();
/// let point_nemo = Location::new(Coordinate::new(-48.876667, -123.393333));
///
/// assert_eq!(
///     formatter.format(&point_nemo),
///     Some("geo:-48.876667,-123.393333".to_string())
/// );
/// assert_eq!(formatter.parse("geo:-48.876667,-123.393333"), Ok(point_nemo));
/// ```
#[derive(Clone, Debug)]
pub struct GeoUriFormatter {
    pub options: GeoUriFormatOptions,
    pub parsing_options: ParsingOptions,
}

impl GeoUriFormatter {
    pub fn new() -> Self {
        Self {
            options: GeoUriFormatOptions::default(),
            parsing_options: ParsingOptions::CASE_INSENSITIVE,
        }
    }

    /// Renders a location as a `geo:` URI.
    ///
    /// The altitude is emitted only when the vertical accuracy marks it
    /// valid. Returns `None` for an invalid coordinate or a negative
    /// horizontal accuracy.
    pub fn format(&self, location: &Location) -> Option<String> {
        if !location.coordinate.is_valid() {
            return None;
        }
        if location.horizontal_accuracy.is_nan() || location.horizontal_accuracy < 0.0 {
            return None;
        }

        let coordinate = if self.options.normalize_longitude {
            location.coordinate.normalized()
        } else {
            location.coordinate
        };

        let mut fields = vec![
            decimal_string(coordinate.latitude),
            decimal_string(coordinate.longitude),
        ];
        if location.vertical_accuracy > 0.0 {
            fields.push(decimal_string(location.altitude.unwrap_or(0.0)));
        }

        let mut uri = format!("{SCHEME}{}", fields.join(","));
        if self.options.include_crs {
            uri.push_str(";crs=");
            uri.push_str(WGS84);
        }
        if let Some(uncertainty) = location.uncertainty() {
            uri.push_str(";u=");
            uri.push_str(&decimal_string(uncertainty));
        }

        Some(uri)
    }

    /// Parses a `geo:` URI into a location.
    ///
    /// Recognizes the optional altitude field and the `crs` and `u`
    /// parameters. Unknown parameters and malformed parameter segments are
    /// ignored; for repeated parameters the first occurrence wins.
    pub fn parse(&self, input: &str) -> Result<Location, ParseError> {
        let input = if self.parsing_options.trimmed {
            input.trim()
        } else {
            input
        };
        let lowered;
        let input = if self.parsing_options.case_insensitive {
            lowered = input.to_lowercase();
            &lowered
        } else {
            input
        };
        trace!("parsing {input:?} as a geo URI");

        let mut segments = input.split(';');
        let base = segments.next().unwrap_or_default();
        let path = base.strip_prefix(SCHEME).ok_or(ParseError::NoMatch)?;

        let fields: Vec<f64> = path
            .split(',')
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ParseError::NoMatch)?;
        let (coordinate, altitude) = match fields[..] {
            [latitude, longitude] => (Coordinate::new(latitude, longitude), None),
            [latitude, longitude, altitude] => {
                (Coordinate::new(latitude, longitude), Some(altitude))
            }
            _ => return Err(ParseError::NoMatch),
        };

        let coordinate = if self.options.normalize_longitude {
            coordinate.normalized()
        } else {
            coordinate
        };
        if !coordinate.is_valid() {
            return Err(ParseError::InvalidCoordinate);
        }

        let parameters: Vec<(String, String)> = segments
            .filter_map(|segment| {
                let segment = segment.to_lowercase();
                let parts: Vec<&str> = segment.split('=').collect();
                let [key, value] = parts[..] else {
                    return None;
                };
                Some((key.to_string(), value.to_string()))
            })
            .collect();

        if let Some(crs) = first_parameter(&parameters, "crs") {
            if !crs.eq_ignore_ascii_case(WGS84) {
                return Err(ParseError::UnsupportedCoordinateReferenceSystem(
                    crs.to_string(),
                ));
            }
        }

        let mut location = Location::new(coordinate);
        location.altitude = altitude;
        if let Some(uncertainty) = first_parameter(&parameters, "u") {
            if let Ok(uncertainty) = uncertainty.parse::<f64>() {
                location.horizontal_accuracy = uncertainty;
                if altitude.is_some() {
                    location.vertical_accuracy = uncertainty;
                }
            }
        }

        Ok(location)
    }
}

impl Default for GeoUriFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn first_parameter<'a>(parameters: &'a [(String, String)], key: &str) -> Option<&'a str> {
    parameters
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, value)| value.as_str())
}

/// Renders a number with up to 11 decimal places and no trailing zeros.
fn decimal_string(value: f64) -> String {
    let mut rendered = format!("{value:.11}");
    if rendered.contains('.') {
        while rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }
    rendered
}
