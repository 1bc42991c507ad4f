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

/// Reference ellipsoid the projection is computed on.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Datum {
    /// Equatorial radius (semi-major axis) in meters.
    pub equatorial_radius: f64,

    /// Flattening of the ellipsoid.
    pub flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984, the GPS reference ellipsoid.
    pub const WGS84: Self = Self {
        equatorial_radius: 6_378_137.0,
        flattening: 1.0 / 298.257_223_563,
    };

    /// Geodetic Reference System 1980.
    pub const GRS80: Self = Self {
        equatorial_radius: 6_378_137.0,
        flattening: 1.0 / 298.257_222_101,
    };

    /// Bessel 1841.
    pub const BESSEL_1841: Self = Self {
        equatorial_radius: 6_377_397.155,
        flattening: 1.0 / 299.152_812_8,
    };

    /// Clarke 1866, the NAD27 reference ellipsoid.
    pub const CLARKE_1866: Self = Self {
        equatorial_radius: 6_378_206.4,
        flattening: 1.0 / 294.978_698_214,
    };
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}
