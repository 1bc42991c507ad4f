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

//! Formatting and parsing of geographic coordinate strings.
//!
//! Supports the common textual notations for positions on Earth:
//!
//! - Decimal Degrees (DD): `48.11638° N, 122.77527° W`
//! - Degrees and Decimal Minutes (DDM): `48° 06.983' N, 122° 46.516' W`
//! - Degrees, Minutes, Seconds (DMS): `48° 6' 59" N, 122° 46' 31" W`
//! - Universal Transverse Mercator (UTM): `10U 516726m E 5329260m N`
//! - The `geo:` URI scheme of RFC 5870: `geo:48.11638,-122.77527`
//!
//! Each notation has a formatter that converts in both directions.
//! Formatting is configurable through symbol styles and display options;
//! parsing tolerates interchangeable annotation glyphs, flexible
//! whitespace and cardinal direction letters on either side of the value.
//!
//! ```
//! use geofmt::{Coordinate, CoordinateFormat, CoordinateFormatter};
//!
//! let formatter = CoordinateFormatter::new(CoordinateFormat::DegreesDecimalMinutes);
//! let coordinate = formatter.parse("48° 06.983' N, 122° 46.516' W")?;
//!
//! assert_eq!(coordinate, Coordinate::new(48.11638, -122.77527));
//! # Ok::<(), geofmt::ParseError>(())
//! ```
//!
//! When the notation of the input is unknown, [`parse_any`] tries them all:
//!
//! ```
//! use geofmt::parse_any;
//!
//! let coordinate = parse_any("10U 516726m E 5329260m N");
//! assert!(coordinate.is_some());
//! ```
//!
//! The UTM projection itself lives in the [`utmconv`] crate and defaults to
//! the WGS-84 [`Datum`].

mod coordinate;
mod coordinate_format;
mod degrees;
mod error;
mod geouri;
mod options;
mod orientation;
mod symbol;
mod utm;

pub use coordinate::{Coordinate, Location};
pub use coordinate_format::{parse_any, CoordinateFormat, CoordinateFormatter};
pub use degrees::{DegreesFormat, DegreesFormatter};
pub use error::ParseError;
pub use geouri::{GeoUriFormatOptions, GeoUriFormatter};
pub use options::{DisplayOptions, ParsingOptions, SymbolStyle};
pub use orientation::{Hemisphere, Orientation};
pub use symbol::Symbol;
pub use utm::{UtmFormatter, UtmLatitudeBand};

pub use utmconv::Datum;
