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

use std::error;
use std::fmt;

/// Errors returned when parsing a coordinate string fails.
///
/// Parsing is a single deterministic attempt. The first error encountered is
/// returned and no partial result is kept. Formatting never returns an error;
/// an unformattable value yields no string instead.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParseError {
    /// The input does not conform to the expected grammar.
    NoMatch,

    /// A hemisphere prefix and suffix disagree, e.g. `S 55.97917° N`.
    Conflict,

    /// The resolved hemisphere contradicts the requested orientation, e.g. a
    /// `W` suffix on a latitude.
    InvalidDirection,

    /// The final latitude/longitude pair fails range validation.
    InvalidCoordinate,

    /// The degrees component is out of range for its orientation.
    InvalidRangeDegrees,

    /// The minutes component is outside `0..60`.
    InvalidRangeMinutes,

    /// The seconds component is outside `0..60`.
    InvalidRangeSeconds,

    /// The UTM grid zone is outside `1..=60`.
    InvalidZone,

    /// The UTM latitude band letter is unknown or inconsistent with the
    /// latitude derived from easting and northing.
    InvalidLatitudeBand,

    /// A `geo:` URI names a coordinate reference system other than WGS 84.
    UnsupportedCoordinateReferenceSystem(String),

    /// An expected named capture is absent from the match.
    NotFound(&'static str),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "input does not match the expected format"),
            Self::Conflict => write!(f, "direction prefix and suffix disagree"),
            Self::InvalidDirection => {
                write!(f, "direction does not match the expected orientation")
            }
            Self::InvalidCoordinate => write!(f, "latitude or longitude is out of range"),
            Self::InvalidRangeDegrees => write!(f, "degrees are out of range"),
            Self::InvalidRangeMinutes => write!(f, "minutes should be within 0 to 60"),
            Self::InvalidRangeSeconds => write!(f, "seconds should be within 0 to 60"),
            Self::InvalidZone => write!(f, "UTM grid zone should be within 1 to 60"),
            Self::InvalidLatitudeBand => {
                write!(f, "latitude band does not match the parsed coordinate")
            }
            Self::UnsupportedCoordinateReferenceSystem(crs) => {
                write!(f, "unsupported coordinate reference system \"{crs}\"")
            }
            Self::NotFound(name) => write!(f, "expected capture {name} is missing"),
        }
    }
}

impl error::Error for ParseError {}
