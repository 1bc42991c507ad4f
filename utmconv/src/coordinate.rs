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

/// Hemisphere of a UTM coordinate.
///
/// UTM eastings and northings do not encode the hemisphere; a northing of
/// `0` is either the equator (northern) or 10,000 km south of it
/// (southern), so the hemisphere must be carried alongside.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Hemisphere {
    Northern,
    Southern,
}

/// A position on the UTM grid.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct UtmCoordinate {
    /// Grid zone number in the range 1 to 60.
    pub zone: u8,

    /// Hemisphere the northing is referenced to.
    pub hemisphere: Hemisphere,

    /// Distance in meters east of the zone's central meridian plus the
    /// 500 km false easting.
    pub easting: f64,

    /// Distance in meters north of the equator, offset by 10,000 km in the
    /// southern hemisphere.
    pub northing: f64,
}

/// Returns the UTM grid zone containing the `longitude`.
///
/// Zones are 6° wide starting at 180°W. A longitude of exactly 180° wraps
/// around into zone 1.
pub fn zone_for(longitude: f64) -> u8 {
    let zone = (((longitude + 180.0) / 6.0).floor() as i32).rem_euclid(60) + 1;
    zone as u8
}

/// Returns the central meridian of a `zone` in degrees.
pub(crate) fn central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zones_span_the_globe() {
        assert_eq!(zone_for(-180.0), 1);
        assert_eq!(zone_for(-122.77527), 10);
        assert_eq!(zone_for(0.0), 31);
        assert_eq!(zone_for(179.41535), 60);
        // 180°E is the same meridian as 180°W
        assert_eq!(zone_for(180.0), 1);
    }

    #[test]
    fn central_meridian_is_zone_center() {
        assert_eq!(central_meridian(1), -177.0);
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(60), 177.0);
    }
}
