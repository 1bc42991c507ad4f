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

use approx::assert_abs_diff_eq;
use geofmt::{
    parse_any, Coordinate, CoordinateFormat, CoordinateFormatter, GeoUriFormatter, Location,
    SymbolStyle,
};

// Places spanning all four hemisphere combinations, the equator and the
// dateline neighborhood.
const PLACES: [Coordinate; 6] = [
    Coordinate::new(48.11638, -122.77527),  // Port Townsend
    Coordinate::new(-55.97917, -67.275),    // Cape Horn
    Coordinate::new(-4.67785, 55.46718),    // Seychelles
    Coordinate::new(62.06323, -6.87355),    // Faroe Islands
    Coordinate::new(51.37363, 179.41535),   // Amchitka Island
    Coordinate::new(0.0, 0.0),              // Null Island
];

#[test]
fn degree_notations_round_trip() {
    for format in [
        CoordinateFormat::DecimalDegrees,
        CoordinateFormat::DegreesDecimalMinutes,
    ] {
        let mut formatter = CoordinateFormatter::new(format);
        formatter.degrees.symbol_style = SymbolStyle::Traditional;

        for place in PLACES {
            let rendered = formatter.format(&place).expect("place should format");
            let parsed = formatter.parse(&rendered).expect("rendering should parse");
            assert_abs_diff_eq!(parsed.latitude, place.latitude, epsilon = 1e-5);
            assert_abs_diff_eq!(parsed.longitude, place.longitude, epsilon = 1e-5);
        }
    }
}

#[test]
fn seconds_notation_round_trips_within_a_second() {
    let formatter = CoordinateFormatter::new(CoordinateFormat::DegreesMinutesSeconds);

    // whole seconds resolve to about 31 meters
    for place in PLACES {
        let rendered = formatter.format(&place).expect("place should format");
        let parsed = formatter.parse(&rendered).expect("rendering should parse");
        assert_abs_diff_eq!(parsed.latitude, place.latitude, epsilon = 1.0 / 3600.0);
        assert_abs_diff_eq!(parsed.longitude, place.longitude, epsilon = 1.0 / 3600.0);
    }
}

#[test]
fn utm_round_trips_within_a_meter() {
    let formatter = CoordinateFormatter::new(CoordinateFormat::Utm);

    for place in PLACES {
        let rendered = formatter.format(&place).expect("place should format");
        let parsed = formatter.parse(&rendered).expect("rendering should parse");
        assert_abs_diff_eq!(parsed.latitude, place.latitude, epsilon = 1e-4);
        assert_abs_diff_eq!(parsed.longitude, place.longitude, epsilon = 1e-4);
    }
}

#[test]
fn every_notation_is_recognized() {
    for format in CoordinateFormat::ALL {
        let formatter = CoordinateFormatter::new(format);

        for place in PLACES {
            let rendered = formatter.format(&place).expect("place should format");
            let parsed = parse_any(&rendered).expect("rendering should be recognized");
            assert_abs_diff_eq!(parsed.latitude, place.latitude, epsilon = 1e-3);
            assert_abs_diff_eq!(parsed.longitude, place.longitude, epsilon = 1e-3);
        }
    }
}

#[test]
fn geo_uris_round_trip() {
    let formatter = GeoUriFormatter::new();

    for place in PLACES {
        let location = Location::new(place);
        let rendered = formatter.format(&location).expect("place should format");
        assert_eq!(formatter.parse(&rendered), Ok(location));
    }

    let mut everest = Location::new(Coordinate::new(27.988056, 86.925278));
    everest.altitude = Some(8848.86);
    everest.vertical_accuracy = 0.21;

    let rendered = formatter.format(&everest).expect("location should format");
    assert_eq!(rendered, "geo:27.988056,86.925278,8848.86;u=0.21");

    let parsed = formatter.parse(&rendered).expect("rendering should parse");
    assert_eq!(parsed.coordinate, everest.coordinate);
    assert_eq!(parsed.altitude, everest.altitude);
    assert_eq!(parsed.vertical_accuracy, everest.vertical_accuracy);
}
