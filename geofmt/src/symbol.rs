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

use once_cell::sync::Lazy;
use regex::Regex;

/// Glyphs used to annotate coordinate components.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Symbol {
    /// Degree symbol `°`.
    Degree,

    /// Apostrophe `'`, annotates minutes on the web and in computer
    /// applications.
    Apostrophe,

    /// Quote `"`, annotates seconds on the web and in computer applications.
    Quote,

    /// Prime `′`, annotates minutes on printed charts and maps.
    Prime,

    /// Double prime `″`, annotates seconds on printed charts and maps.
    DoublePrime,
}

impl Symbol {
    pub const ALL: [Self; 5] = [
        Self::Degree,
        Self::Apostrophe,
        Self::Quote,
        Self::Prime,
        Self::DoublePrime,
    ];

    pub const fn glyph(self) -> char {
        match self {
            Self::Degree => '\u{00B0}',
            Self::Apostrophe => '\u{0027}',
            Self::Quote => '\u{0022}',
            Self::Prime => '\u{2032}',
            Self::DoublePrime => '\u{2033}',
        }
    }
}

static GLYPHS: Lazy<Regex> = Lazy::new(|| {
    let class: String = Symbol::ALL.iter().map(|symbol| symbol.glyph()).collect();
    Regex::new(&format!("[{class}]")).expect("glyph class compiles")
});

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern compiles"));

/// Replaces every annotation glyph with a space and collapses whitespace
/// runs to a single space.
///
/// Applied before matching degree patterns so that the symbol style of the
/// input does not matter. The `geo:` URI grammar has no glyphs and never
/// uses this.
pub(crate) fn desymbolize(input: &str) -> String {
    let replaced = GLYPHS.replace_all(input, " ");
    WHITESPACE_RUNS.replace_all(&replaced, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_become_spaces() {
        assert_eq!(desymbolize("48° 6' 59\" N"), "48 6 59 N");
        assert_eq!(desymbolize("48° 6′ 59″ N"), "48 6 59 N");
        assert_eq!(desymbolize("122°46.516'W"), "122 46.516 W");
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(desymbolize("48°   6′  59″"), "48 6 59 ");
        assert_eq!(desymbolize("plain text"), "plain text");
    }
}
