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

/// The characters used to annotate coordinate components when formatting.
///
/// Parsing accepts the glyphs of every style interchangeably; see
/// [`crate::Symbol`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SymbolStyle {
    /// No symbols, components are space delimited: `48 6 59 N`.
    None,

    /// Web and computer convention: `48° 6' 59" N`.
    #[default]
    Simple,

    /// Typographically correct chart convention: `48° 6′ 59″ N`.
    Traditional,
}

impl SymbolStyle {
    /// The annotation for degrees.
    pub fn degrees(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Simple | Self::Traditional => "\u{00B0}",
        }
    }

    /// The annotation for minutes.
    pub fn minutes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Simple => "'",
            Self::Traditional => "\u{2032}",
        }
    }

    /// The annotation for seconds.
    pub fn seconds(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Simple => "\"",
            Self::Traditional => "\u{2033}",
        }
    }
}

/// Options for the string representation of a coordinate.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayOptions {
    /// Append the cardinal direction letter and render the magnitude instead
    /// of relying on the sign.
    pub suffix: bool,

    /// Omit separator spaces. Ignored when the symbol style is
    /// [`SymbolStyle::None`], since the components would run together.
    pub compact: bool,
}

impl DisplayOptions {
    /// Suffix enabled, not compact. The default of every formatter.
    pub const SUFFIX: Self = Self {
        suffix: true,
        compact: false,
    };
}

/// Options that control how coordinate strings are matched.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsingOptions {
    /// Match direction and band letters regardless of case.
    pub case_insensitive: bool,

    /// Strip leading and trailing whitespace before matching.
    pub trimmed: bool,
}

impl ParsingOptions {
    /// Case insensitive, untrimmed. The default of every formatter.
    pub const CASE_INSENSITIVE: Self = Self {
        case_insensitive: true,
        trimmed: false,
    };
}
