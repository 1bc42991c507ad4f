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

//! Universal Transverse Mercator coordinate strings.

use log::{trace, warn};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use utmconv::{to_lat_lon, to_utm, Datum, Hemisphere, UtmCoordinate};

use crate::coordinate::Coordinate;
use crate::error::ParseError;
use crate::options::{DisplayOptions, ParsingOptions};

/// A band of latitude in the military grid reference scheme.
///
/// Bands cover 8° of latitude each, from 80° S to 84° N; the northernmost
/// band X spans 12°. The letters I and O are never used since they resemble
/// digits. Positions outside 80° S to 84° N carry no band.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UtmLatitudeBand {
    C,
    D,
    E,
    F,
    G,
    H,
    J,
    K,
    L,
    M,
    N,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
}

impl UtmLatitudeBand {
    const ALL: [Self; 20] = [
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
    ];

    /// The band containing `latitude`, or `None` outside 80° S to 84° N.
    pub fn from_latitude(latitude: f64) -> Option<Self> {
        if !(-80.0..=84.0).contains(&latitude) {
            return None;
        }

        // band X absorbs the extra 72..=84 slice
        let index = (((latitude + 80.0) / 8.0) as usize).min(19);
        Some(Self::ALL[index])
    }

    /// Maps a band letter to its band, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        Self::ALL.into_iter().find(|band| band.letter() == letter)
    }

    pub fn letter(self) -> char {
        match self {
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::J => 'J',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
        }
    }

    /// Bands C through M lie south of the equator.
    pub fn hemisphere(self) -> Hemisphere {
        if self < Self::N {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}

const UTM_PATTERN: &str = r"(?x)
    ^
    # grid zone 1 through 60, a leading zero is tolerated
    (?P<ZONE>0?[1-9]|[1-5][0-9]|60)
    # latitude band letter, I and O are never used
    (?P<BAND>[CDEFGHJKLMNPQRSTUVWX])
    [\x20\t]+
    # easting in meters, the unit suffix is optional
    (?P<EASTING>\d{6,})m[\x20\t]?E?
    [\x20\t]+
    # northing in meters, the unit suffix is optional
    (?P<NORTHING>\d{6,})m[\x20\t]?N?
    \b
";

fn compile(case_insensitive: bool) -> Regex {
    RegexBuilder::new(UTM_PATTERN)
        .case_insensitive(case_insensitive)
        .build()
        .expect("hard-coded pattern compiles")
}

fn regex(case_insensitive: bool) -> &'static Regex {
    static UTM: [Lazy<Regex>; 2] = [Lazy::new(|| compile(false)), Lazy::new(|| compile(true))];
    &UTM[usize::from(case_insensitive)]
}

/// Converts between geographic coordinates and UTM grid strings such as
/// `10U 516726m E 5329260m N`.
///
/// ```
/// use geofmt::{Coordinate, UtmFormatter};
///
/// let formatter = UtmFormatter::new();
/// let port_townsend = Coordinate::new(48.11638, -122.77527);
///
/// assert_eq!(
///     formatter.format(&port_townsend),
///     Some("10U 516726m E 5329260m N".to_string())
/// );
/// ```
#[derive(Clone, Debug)]
pub struct UtmFormatter {
    /// The reference ellipsoid of the projection.
    pub datum: Datum,

    pub display_options: DisplayOptions,
    pub parsing_options: ParsingOptions,
}

impl UtmFormatter {
    pub fn new() -> Self {
        Self {
            datum: Datum::WGS84,
            display_options: DisplayOptions::SUFFIX,
            parsing_options: ParsingOptions::CASE_INSENSITIVE,
        }
    }

    /// Renders a coordinate as a UTM grid string, or `None` when the
    /// coordinate is invalid.
    ///
    /// The grid zone omits the band letter for positions outside the banded
    /// latitudes of 80° S to 84° N.
    pub fn format(&self, coordinate: &Coordinate) -> Option<String> {
        if !coordinate.is_valid() {
            return None;
        }

        let utm = to_utm(coordinate.latitude, coordinate.longitude, &self.datum);
        let band = UtmLatitudeBand::from_latitude(coordinate.latitude);

        let mut grid_zone = utm.zone.to_string();
        if let Some(band) = band {
            grid_zone.push(band.letter());
        }

        let (easting_suffix, northing_suffix) = if self.display_options.suffix {
            if self.display_options.compact {
                ("E", "N")
            } else {
                (" E", " N")
            }
        } else {
            ("", "")
        };

        Some(format!(
            "{grid_zone} {easting:06}m{easting_suffix} {northing:06}m{northing_suffix}",
            easting = utm.easting.round() as i64,
            northing = utm.northing.round() as i64,
        ))
    }

    /// Parses a UTM grid string into a geographic coordinate.
    ///
    /// The band letter must agree with the latitude the easting and northing
    /// resolve to; a mismatch fails with
    /// [`ParseError::InvalidLatitudeBand`].
    pub fn parse(&self, input: &str) -> Result<Coordinate, ParseError> {
        let input = if self.parsing_options.trimmed {
            input.trim()
        } else {
            input
        };
        trace!("matching {input:?} against the UTM pattern");

        let captures = regex(self.parsing_options.case_insensitive)
            .captures(input)
            .ok_or(ParseError::NoMatch)?;

        let zone: u8 = captures
            .name("ZONE")
            .ok_or(ParseError::NotFound("ZONE"))?
            .as_str()
            .parse()
            .map_err(|_| ParseError::InvalidZone)?;
        if !(1..=60).contains(&zone) {
            return Err(ParseError::InvalidZone);
        }

        let band = captures
            .name("BAND")
            .ok_or(ParseError::NotFound("BAND"))?
            .as_str()
            .chars()
            .next()
            .and_then(UtmLatitudeBand::from_letter)
            .ok_or(ParseError::InvalidLatitudeBand)?;

        let easting = number(&captures, "EASTING")?;
        let northing = number(&captures, "NORTHING")?;

        let utm = UtmCoordinate {
            zone,
            hemisphere: band.hemisphere(),
            easting,
            northing,
        };
        let (latitude, longitude) = to_lat_lon(&utm, &self.datum);

        // the band letter must name the band the position falls in
        if UtmLatitudeBand::from_latitude(latitude) != Some(band) {
            warn!("band {} does not contain latitude {latitude}", band.letter());
            return Err(ParseError::InvalidLatitudeBand);
        }

        let coordinate = Coordinate::new(latitude, longitude);
        if !coordinate.is_valid() {
            return Err(ParseError::InvalidCoordinate);
        }

        Ok(coordinate)
    }
}

impl Default for UtmFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn number(captures: &regex::Captures, name: &'static str) -> Result<f64, ParseError> {
    captures
        .name(name)
        .ok_or(ParseError::NotFound(name))?
        .as_str()
        .parse()
        .map_err(|_| ParseError::NotFound(name))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const PORT_TOWNSEND: Coordinate = Coordinate::new(48.11638, -122.77527);
    const CAPE_HORN: Coordinate = Coordinate::new(-55.97917, -67.275);
    const SEYCHELLES: Coordinate = Coordinate::new(-4.67785, 55.46718);
    const FAROE_ISLANDS: Coordinate = Coordinate::new(62.06323, -6.87355);
    const AMCHITKA_ISLAND: Coordinate = Coordinate::new(51.37363, 179.41535);
    const NULL_ISLAND: Coordinate = Coordinate::new(0.0, 0.0);

    #[test]
    fn bands_cover_the_grid() {
        assert_eq!(UtmLatitudeBand::from_latitude(-80.0), Some(UtmLatitudeBand::C));
        assert_eq!(UtmLatitudeBand::from_latitude(-55.97917), Some(UtmLatitudeBand::F));
        assert_eq!(UtmLatitudeBand::from_latitude(-4.67785), Some(UtmLatitudeBand::M));
        assert_eq!(UtmLatitudeBand::from_latitude(0.0), Some(UtmLatitudeBand::N));
        assert_eq!(UtmLatitudeBand::from_latitude(48.11638), Some(UtmLatitudeBand::U));
        assert_eq!(UtmLatitudeBand::from_latitude(62.06323), Some(UtmLatitudeBand::V));

        // band X runs all the way to 84° N
        assert_eq!(UtmLatitudeBand::from_latitude(72.0), Some(UtmLatitudeBand::X));
        assert_eq!(UtmLatitudeBand::from_latitude(84.0), Some(UtmLatitudeBand::X));

        assert_eq!(UtmLatitudeBand::from_latitude(84.1), None);
        assert_eq!(UtmLatitudeBand::from_latitude(-80.1), None);
    }

    #[test]
    fn band_hemispheres() {
        assert_eq!(UtmLatitudeBand::C.hemisphere(), Hemisphere::Southern);
        assert_eq!(UtmLatitudeBand::M.hemisphere(), Hemisphere::Southern);
        assert_eq!(UtmLatitudeBand::N.hemisphere(), Hemisphere::Northern);
        assert_eq!(UtmLatitudeBand::X.hemisphere(), Hemisphere::Northern);
    }

    #[test]
    fn band_letters() {
        assert_eq!(UtmLatitudeBand::from_letter('F'), Some(UtmLatitudeBand::F));
        assert_eq!(UtmLatitudeBand::from_letter('u'), Some(UtmLatitudeBand::U));
        assert_eq!(UtmLatitudeBand::from_letter('I'), None);
        assert_eq!(UtmLatitudeBand::from_letter('O'), None);
        assert_eq!(UtmLatitudeBand::from_letter('Z'), None);
    }

    #[test]
    fn formats_utm() {
        let formatter = UtmFormatter::new();

        assert_eq!(
            formatter.format(&PORT_TOWNSEND),
            Some("10U 516726m E 5329260m N".to_string())
        );
        assert_eq!(
            formatter.format(&CAPE_HORN),
            Some("19F 607636m E 3794896m N".to_string())
        );
        assert_eq!(
            formatter.format(&SEYCHELLES),
            Some("40M 329980m E 9482760m N".to_string())
        );
        assert_eq!(
            formatter.format(&FAROE_ISLANDS),
            Some("29V 611132m E 6883046m N".to_string())
        );
        assert_eq!(
            formatter.format(&AMCHITKA_ISLAND),
            Some("60U 668108m E 5694144m N".to_string())
        );
        assert_eq!(
            formatter.format(&NULL_ISLAND),
            Some("31N 166021m E 000000m N".to_string())
        );

        assert_eq!(formatter.format(&Coordinate::new(91.0, 0.0)), None);
    }

    #[test]
    fn format_display_options() {
        let mut formatter = UtmFormatter::new();

        formatter.display_options = DisplayOptions::default();
        assert_eq!(
            formatter.format(&PORT_TOWNSEND),
            Some("10U 516726m 5329260m".to_string())
        );

        formatter.display_options = DisplayOptions {
            suffix: true,
            compact: true,
        };
        assert_eq!(
            formatter.format(&PORT_TOWNSEND),
            Some("10U 516726mE 5329260mN".to_string())
        );
    }

    #[test]
    fn parses_utm() {
        let formatter = UtmFormatter::new();

        for (input, expected) in [
            ("10U 516726m E 5329260m N", PORT_TOWNSEND),
            ("10U 516726mE 5329260mN", PORT_TOWNSEND),
            ("10U 516726m 5329260m", PORT_TOWNSEND),
            ("10u 516726m e 5329260m n", PORT_TOWNSEND),
            ("19F 607636m E 3794896m N", CAPE_HORN),
            ("40M 329980m E 9482760m N", SEYCHELLES),
            ("60U 668108m E 5694144m N", AMCHITKA_ISLAND),
            ("31N 166021m E 000000m N", NULL_ISLAND),
        ] {
            let parsed = formatter.parse(input).expect("grid string should parse");
            assert_abs_diff_eq!(parsed.latitude, expected.latitude, epsilon = 1e-4);
            assert_abs_diff_eq!(parsed.longitude, expected.longitude, epsilon = 1e-4);
        }
    }

    #[test]
    fn rejects_malformed_grid_strings() {
        let formatter = UtmFormatter::new();

        assert_eq!(
            formatter.parse("10 516726m E 5329260m N"),
            Err(ParseError::NoMatch),
            "a grid zone without a band letter should not match"
        );
        assert_eq!(formatter.parse("0U 516726m E 5329260m N"), Err(ParseError::NoMatch));
        assert_eq!(formatter.parse("61U 516726m E 5329260m N"), Err(ParseError::NoMatch));
        assert_eq!(formatter.parse("-10U 516726m E 5329260m N"), Err(ParseError::NoMatch));
        assert_eq!(formatter.parse("10.1U 516726m E 5329260m N"), Err(ParseError::NoMatch));
        assert_eq!(formatter.parse("10I 516726m E 5329260m N"), Err(ParseError::NoMatch));
        assert_eq!(formatter.parse("48.11638° N, 122.77527° W"), Err(ParseError::NoMatch));
    }

    #[test]
    fn rejects_off_grid_eastings() {
        let formatter = UtmFormatter::new();

        // grammar-valid but far beyond any zone; the unprojection
        // degenerates and the band cross-check must catch it
        assert_eq!(
            formatter.parse("10U 1000000000000000000000000000000m E 000000m N"),
            Err(ParseError::InvalidLatitudeBand)
        );
    }

    #[test]
    fn rejects_wrong_band() {
        let formatter = UtmFormatter::new();

        // the position is in band U, not C or F
        assert_eq!(
            formatter.parse("10C 516726m E 5329260m N"),
            Err(ParseError::InvalidLatitudeBand)
        );
        assert_eq!(
            formatter.parse("10F 516726m E 5329260m N"),
            Err(ParseError::InvalidLatitudeBand)
        );
    }

    #[test]
    fn case_sensitive_parsing() {
        let mut formatter = UtmFormatter::new();
        formatter.parsing_options = ParsingOptions::default();

        assert!(formatter.parse("10U 516726m E 5329260m N").is_ok());
        assert_eq!(
            formatter.parse("10u 516726m E 5329260m N"),
            Err(ParseError::NoMatch)
        );
    }

    #[test]
    fn trimmed_parsing() {
        let mut formatter = UtmFormatter::new();

        assert_eq!(
            formatter.parse("  10U 516726m E 5329260m N"),
            Err(ParseError::NoMatch)
        );

        formatter.parsing_options.trimmed = true;
        assert!(formatter.parse("  10U 516726m E 5329260m N  ").is_ok());
    }
}
