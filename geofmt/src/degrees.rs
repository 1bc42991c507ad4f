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

//! Formatting and parsing of a single angular value.

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use crate::error::ParseError;
use crate::options::{DisplayOptions, ParsingOptions, SymbolStyle};
use crate::orientation::{Hemisphere, Orientation};
use crate::symbol::desymbolize;

/// The notation used to represent an angular value as a string.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DegreesFormat {
    /// Decimal Degrees (DD), e.g. `122.77527° W`.
    ///
    /// Commonly used on the web and computer systems.
    DecimalDegrees,

    /// Degrees and Decimal Minutes (DDM), e.g. `122° 46.516' W`.
    ///
    /// Commonly used by electronic navigation equipment.
    DegreesDecimalMinutes,

    /// Degrees, Minutes, Seconds (DMS), e.g. `122° 46' 31" W`.
    ///
    /// Commonly seen on printed charts and maps.
    DegreesMinutesSeconds,
}

// The patterns anchor at the start of the input and stop at a word
// boundary; trailing unconsumed text is the caller's concern. They match
// desymbolized input, so a single space stands for any annotation glyph.
const DECIMAL_DEGREES_PATTERN: &str = r"(?x)
    ^
    # one of N, S, E, or W, optional
    (?P<PREFIX>[NSEW]?)
    [\x20\t]?
    # 1 to 3 digits, and 1 or more decimal places
    (?P<DEGREES>-?\d{1,3}\.\d+)
    [\x20\t]?
    # one of N, S, E, or W, optional
    (?P<SUFFIX>[NSEW]?)
    \b
";

const DEGREES_DECIMAL_MINUTES_PATTERN: &str = r"(?x)
    ^
    # one of N, S, E, or W, optional
    (?P<PREFIX>[NSEW]?)
    [\x20\t]?
    # optional negative sign, then 1 to 3 digits
    (?P<DEGREES>-?\d{1,3})
    [\x20\t]
    # 1 to 2 digits, and 1 or more decimal places
    (?P<MINUTES>\d{1,2}\.\d+)
    [\x20\t]?
    # one of N, S, E, or W, optional
    (?P<SUFFIX>[NSEW]?)
    \b
";

const DEGREES_MINUTES_SECONDS_PATTERN: &str = r"(?x)
    ^
    # one of N, S, E, or W, optional
    (?P<PREFIX>[NSEW]?)
    [\x20\t]?
    # optional negative sign, then 1 to 3 digits
    (?P<DEGREES>-?\d{1,3})
    [\x20\t]
    # 1 to 2 digits
    (?P<MINUTES>\d{1,2})
    [\x20\t]
    # 1 to 2 digits, with optional decimal places
    (?P<SECONDS>\d{1,2}\.?\d*)
    [\x20\t]?
    # one of N, S, E, or W, optional
    (?P<SUFFIX>[NSEW]?)
    \b
";

fn compile(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .expect("hard-coded pattern compiles")
}

impl DegreesFormat {
    /// The anchored pattern recognizing this notation.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::DecimalDegrees => DECIMAL_DEGREES_PATTERN,
            Self::DegreesDecimalMinutes => DEGREES_DECIMAL_MINUTES_PATTERN,
            Self::DegreesMinutesSeconds => DEGREES_MINUTES_SECONDS_PATTERN,
        }
    }

    fn regex(self, case_insensitive: bool) -> &'static Regex {
        static DECIMAL_DEGREES: [Lazy<Regex>; 2] = [
            Lazy::new(|| compile(DECIMAL_DEGREES_PATTERN, false)),
            Lazy::new(|| compile(DECIMAL_DEGREES_PATTERN, true)),
        ];
        static DEGREES_DECIMAL_MINUTES: [Lazy<Regex>; 2] = [
            Lazy::new(|| compile(DEGREES_DECIMAL_MINUTES_PATTERN, false)),
            Lazy::new(|| compile(DEGREES_DECIMAL_MINUTES_PATTERN, true)),
        ];
        static DEGREES_MINUTES_SECONDS: [Lazy<Regex>; 2] = [
            Lazy::new(|| compile(DEGREES_MINUTES_SECONDS_PATTERN, false)),
            Lazy::new(|| compile(DEGREES_MINUTES_SECONDS_PATTERN, true)),
        ];

        let cache = match self {
            Self::DecimalDegrees => &DECIMAL_DEGREES,
            Self::DegreesDecimalMinutes => &DEGREES_DECIMAL_MINUTES,
            Self::DegreesMinutesSeconds => &DEGREES_MINUTES_SECONDS,
        };

        &cache[usize::from(case_insensitive)]
    }
}

/// Converts between angular values in degrees and their textual
/// representations.
///
/// Formatting renders a latitude or longitude in the configured
/// [`DegreesFormat`]; parsing recognizes that format with flexible
/// delimiters, optional direction prefixes or suffixes and any symbol
/// style.
///
/// ```
/// use geofmt::{DegreesFormat, DegreesFormatter, Orientation};
///
/// let mut formatter = DegreesFormatter::new(DegreesFormat::DecimalDegrees);
/// formatter.orientation = Orientation::Latitude;
///
/// assert_eq!(formatter.format(48.11638), Some("48.11638° N".to_string()));
/// assert_eq!(formatter.parse("48.11638° N"), Ok(48.11638));
/// ```
#[derive(Clone, Debug)]
pub struct DegreesFormatter {
    /// The notation produced and recognized.
    pub format: DegreesFormat,

    /// Whether values represent a latitude or a longitude.
    pub orientation: Orientation,

    /// The characters annotating degrees, minutes and seconds.
    pub symbol_style: SymbolStyle,

    pub display_options: DisplayOptions,
    pub parsing_options: ParsingOptions,

    /// The minimum number of decimal places for degrees.
    pub min_fraction_digits: usize,

    /// The maximum number of decimal places for degrees. The default of 5
    /// is accurate to about 1.1 meters.
    pub max_fraction_digits: usize,
}

impl DegreesFormatter {
    pub fn new(format: DegreesFormat) -> Self {
        Self {
            format,
            orientation: Orientation::None,
            symbol_style: SymbolStyle::Simple,
            display_options: DisplayOptions::SUFFIX,
            parsing_options: ParsingOptions::CASE_INSENSITIVE,
            min_fraction_digits: 1,
            max_fraction_digits: 5,
        }
    }

    /// Renders `degrees` in the configured format, or `None` when the value
    /// is outside the orientation's range.
    pub fn format(&self, degrees: f64) -> Option<String> {
        self.format_oriented(degrees, self.orientation)
    }

    /// Renders `degrees` for an explicit orientation.
    pub fn format_oriented(&self, degrees: f64, orientation: Orientation) -> Option<String> {
        if !orientation.range().contains(&degrees) {
            return None;
        }

        let hemisphere = orientation.hemisphere(degrees);

        // With a suffix the direction letter carries the sign.
        let value = if self.display_options.suffix && hemisphere.is_some() {
            degrees.abs()
        } else {
            degrees
        };

        let minutes = (value.abs() * 60.0) % 60.0;
        let seconds = (value.abs() * 3600.0) % 60.0;

        let style = self.symbol_style;
        let mut components = match self.format {
            DegreesFormat::DecimalDegrees => {
                vec![format!("{}{}", self.decimal_string(value), style.degrees())]
            }
            DegreesFormat::DegreesDecimalMinutes => vec![
                format!("{}{}", value.trunc() as i64, style.degrees()),
                format!("{minutes:06.3}{}", style.minutes()),
            ],
            DegreesFormat::DegreesMinutesSeconds => vec![
                format!("{}{}", value.trunc() as i64, style.degrees()),
                format!("{}{}", minutes.floor() as i64, style.minutes()),
                format!("{}{}", seconds.round() as i64, style.seconds()),
            ],
        };

        if self.display_options.suffix {
            if let Some(hemisphere) = hemisphere {
                components.push(hemisphere.letter().to_string());
            }
        }

        let separator = if self.is_compact() { "" } else { " " };
        Some(components.join(separator))
    }

    /// Parses an angular value using the configured orientation.
    pub fn parse(&self, input: &str) -> Result<f64, ParseError> {
        self.parse_oriented(input, self.orientation)
    }

    /// Parses an angular value expected to be oriented as `orientation`.
    ///
    /// A direction letter always wins over the sign of the numeral: `S` or
    /// `W` negate a positive value and `N` or `E` negate a negative one.
    /// When both a prefix and a suffix letter are present they must agree.
    pub fn parse_oriented(
        &self,
        input: &str,
        orientation: Orientation,
    ) -> Result<f64, ParseError> {
        let input = if self.parsing_options.trimmed {
            input.trim()
        } else {
            input
        };
        let text = desymbolize(input);
        trace!("matching {text:?} against the {:?} pattern", self.format);

        let captures = self
            .format
            .regex(self.parsing_options.case_insensitive)
            .captures(&text)
            .ok_or(ParseError::NoMatch)?;

        let mut degrees = number(&captures, "DEGREES")?;
        if !orientation.range().contains(&degrees) {
            return Err(ParseError::InvalidRangeDegrees);
        }

        let mut resolved = orientation;
        if let Some(direction) = resolve_direction(&captures)? {
            // the letter wins over the sign of the numeral
            if !direction.range().contains(&degrees) {
                degrees = -degrees;
            }

            if orientation != Orientation::None && orientation != direction.orientation() {
                return Err(ParseError::InvalidDirection);
            }

            resolved = direction.orientation();
        }

        if matches!(
            self.format,
            DegreesFormat::DegreesDecimalMinutes | DegreesFormat::DegreesMinutesSeconds
        ) {
            let minutes = number(&captures, "MINUTES")?;
            if !(0.0..60.0).contains(&minutes) {
                return Err(ParseError::InvalidRangeMinutes);
            }
            degrees = accumulate(degrees, minutes / 60.0);
        }

        if self.format == DegreesFormat::DegreesMinutesSeconds {
            let seconds = number(&captures, "SECONDS")?;
            if !(0.0..60.0).contains(&seconds) {
                return Err(ParseError::InvalidRangeSeconds);
            }
            degrees = accumulate(degrees, seconds / 3600.0);
        }

        if !resolved.range().contains(&degrees) {
            return Err(ParseError::InvalidRangeDegrees);
        }

        Ok(round_to(degrees, self.max_fraction_digits))
    }

    fn is_compact(&self) -> bool {
        // cant be compact without symbols
        self.display_options.compact && self.symbol_style != SymbolStyle::None
    }

    fn decimal_string(&self, degrees: f64) -> String {
        let mut rendered = format!("{degrees:.prec$}", prec = self.max_fraction_digits);

        if let Some(dot) = rendered.find('.') {
            let keep = dot + 1 + self.min_fraction_digits;
            while rendered.len() > keep && rendered.ends_with('0') {
                rendered.pop();
            }
            if rendered.ends_with('.') {
                rendered.pop();
            }
        }

        rendered
    }
}

impl Default for DegreesFormatter {
    fn default() -> Self {
        Self::new(DegreesFormat::DecimalDegrees)
    }
}

fn number(captures: &Captures, name: &'static str) -> Result<f64, ParseError> {
    captures
        .name(name)
        .ok_or(ParseError::NotFound(name))?
        .as_str()
        .parse()
        .map_err(|_| ParseError::NotFound(name))
}

fn hemisphere(captures: &Captures, name: &str) -> Option<Hemisphere> {
    captures
        .name(name)?
        .as_str()
        .chars()
        .next()
        .and_then(Hemisphere::from_letter)
}

fn resolve_direction(captures: &Captures) -> Result<Option<Hemisphere>, ParseError> {
    match (hemisphere(captures, "PREFIX"), hemisphere(captures, "SUFFIX")) {
        (Some(prefix), Some(suffix)) if prefix != suffix => Err(ParseError::Conflict),
        (Some(_), Some(suffix)) => Ok(Some(suffix)),
        (Some(prefix), None) => Ok(Some(prefix)),
        (None, suffix) => Ok(suffix),
    }
}

/// Adds a minute or second fraction with the sign of the degrees.
fn accumulate(degrees: f64, fraction: f64) -> f64 {
    if degrees < 0.0 {
        degrees - fraction
    } else {
        degrees + fraction
    }
}

fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
