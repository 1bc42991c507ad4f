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

//! Universal Transverse Mercator (UTM) projection.
//!
//! This crate projects geodetic coordinates (latitude/longitude on a
//! reference ellipsoid) onto the UTM grid and back. The projection is
//! computed with Karney's 6th-order Krüger series which is accurate to
//! well below a millimeter anywhere within a zone.
//!
//! # Examples
//!
//! Project Port Townsend onto the UTM grid and back:
//!
//! ```
//! use utmconv::{to_lat_lon, to_utm, Datum};
//!
//! let utm = to_utm(48.11638, -122.77527, &Datum::WGS84);
//! assert_eq!(utm.zone, 10);
//! assert_eq!(utm.easting.round(), 516726.0);
//! assert_eq!(utm.northing.round(), 5329260.0);
//!
//! let (lat, lon) = to_lat_lon(&utm, &Datum::WGS84);
//! assert!((lat - 48.11638).abs() < 1e-9);
//! assert!((lon - -122.77527).abs() < 1e-9);
//! ```

mod coordinate;
mod datum;
mod projection;

pub use coordinate::{zone_for, Hemisphere, UtmCoordinate};
pub use datum::Datum;
pub use projection::{to_lat_lon, to_utm};
