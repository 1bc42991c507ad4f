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

use std::ops::RangeInclusive;

/// Whether an angular value represents a latitude or a longitude.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Unspecified. Carries the longitude range and no hemisphere mapping.
    #[default]
    None,
    Latitude,
    Longitude,
}

impl Orientation {
    /// The range of valid degrees for this orientation.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Latitude => -90.0..=90.0,
            Self::Longitude | Self::None => -180.0..=180.0,
        }
    }

    /// Returns the hemisphere of `degrees`, or `None` when the value is out
    /// of range or the orientation is unspecified.
    pub fn hemisphere(self, degrees: f64) -> Option<Hemisphere> {
        match self {
            Self::Latitude => {
                if !self.range().contains(&degrees) {
                    return None;
                }
                Some(if degrees >= 0.0 {
                    Hemisphere::North
                } else {
                    Hemisphere::South
                })
            }
            Self::Longitude => {
                if !self.range().contains(&degrees) {
                    return None;
                }
                Some(if degrees >= 0.0 {
                    Hemisphere::East
                } else {
                    Hemisphere::West
                })
            }
            Self::None => None,
        }
    }
}

/// The hemisphere of either a latitude or a longitude.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// The cardinal direction letter used in coordinate strings.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Maps a cardinal direction letter to its hemisphere, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// The orientation a hemisphere legalizes.
    pub fn orientation(self) -> Orientation {
        match self {
            Self::North | Self::South => Orientation::Latitude,
            Self::East | Self::West => Orientation::Longitude,
        }
    }

    /// The half-range of degrees covered by this hemisphere.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::North => 0.0..=90.0,
            Self::South => -90.0..=0.0,
            Self::East => 0.0..=180.0,
            Self::West => -180.0..=0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hemisphere_follows_sign() {
        assert_eq!(
            Orientation::Latitude.hemisphere(48.11638),
            Some(Hemisphere::North)
        );
        assert_eq!(
            Orientation::Latitude.hemisphere(-55.97917),
            Some(Hemisphere::South)
        );
        assert_eq!(
            Orientation::Longitude.hemisphere(179.41535),
            Some(Hemisphere::East)
        );
        assert_eq!(
            Orientation::Longitude.hemisphere(-122.77527),
            Some(Hemisphere::West)
        );

        // zero is treated as positive
        assert_eq!(Orientation::Latitude.hemisphere(0.0), Some(Hemisphere::North));
        assert_eq!(Orientation::Longitude.hemisphere(0.0), Some(Hemisphere::East));
    }

    #[test]
    fn out_of_range_has_no_hemisphere() {
        assert_eq!(Orientation::Latitude.hemisphere(90.1), None);
        assert_eq!(Orientation::Longitude.hemisphere(-180.1), None);
        assert_eq!(Orientation::None.hemisphere(10.0), None);
    }

    #[test]
    fn half_ranges_split_the_orientation() {
        assert!(Hemisphere::North.range().contains(&48.11638));
        assert!(!Hemisphere::North.range().contains(&-55.97917));
        assert!(Hemisphere::South.range().contains(&-55.97917));
        assert!(Hemisphere::West.range().contains(&-122.77527));
        assert!(!Hemisphere::West.range().contains(&179.41535));
        assert!(Hemisphere::East.range().contains(&179.41535));

        // zero belongs to every half-range
        for hemisphere in [
            Hemisphere::North,
            Hemisphere::South,
            Hemisphere::East,
            Hemisphere::West,
        ] {
            assert!(hemisphere.range().contains(&0.0));
        }
    }

    #[test]
    fn letters_round_trip() {
        for hemisphere in [
            Hemisphere::North,
            Hemisphere::South,
            Hemisphere::East,
            Hemisphere::West,
        ] {
            assert_eq!(Hemisphere::from_letter(hemisphere.letter()), Some(hemisphere));
            assert_eq!(
                Hemisphere::from_letter(hemisphere.letter().to_ascii_lowercase()),
                Some(hemisphere)
            );
        }

        assert_eq!(Hemisphere::from_letter('X'), None);
    }
}
