// Major and natural-minor keys and their diatonic triads.
//
// The chord player lays out its grid by key: each column is one scale
// degree, and the quality native to that degree is highlighted. This module
// provides the data behind that layout for all 24 keys (12 tonics, major and
// minor).
//
// Degree labels use roman numerals with case marking quality (upper =
// major, lower = minor) and a trailing `°` for diminished.

use crate::error::ChordError;
use crate::note::NoteName;
use crate::quality::ChordQuality;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleKind {
    Major,
    /// Natural (aeolian) minor.
    Minor,
}

impl ScaleKind {
    pub const ALL: [ScaleKind; 2] = [ScaleKind::Major, ScaleKind::Minor];

    /// Semitone steps from the tonic to each of the seven degrees.
    pub fn steps(self) -> [u8; 7] {
        match self {
            ScaleKind::Major => [0, 2, 4, 5, 7, 9, 11],
            ScaleKind::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad quality built on each degree.
    pub fn triads(self) -> [ChordQuality; 7] {
        use ChordQuality::{Diminished as Dim, Major as Maj, Minor as Min};
        match self {
            ScaleKind::Major => [Maj, Min, Min, Maj, Maj, Min, Dim],
            ScaleKind::Minor => [Min, Dim, Maj, Min, Min, Maj, Maj],
        }
    }

    pub fn degree_labels(self) -> [&'static str; 7] {
        match self {
            ScaleKind::Major => ["I", "ii", "iii", "IV", "V", "vi", "vii°"],
            ScaleKind::Minor => ["i", "ii°", "III", "iv", "v", "VI", "VII"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "Major",
            ScaleKind::Minor => "Minor",
        }
    }
}

/// A chord that belongs to a key, tagged with its scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiatonicChord {
    pub root: NoteName,
    pub quality: ChordQuality,
    pub degree: &'static str,
}

/// A key: tonic plus major/minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scale {
    pub tonic: NoteName,
    pub kind: ScaleKind,
}

impl Scale {
    pub fn new(tonic: NoteName, kind: ScaleKind) -> Self {
        Scale { tonic, kind }
    }

    /// All 24 keys: each tonic in chromatic order, major before minor.
    pub fn all() -> impl Iterator<Item = Scale> {
        NoteName::ALL.into_iter().flat_map(|tonic| {
            ScaleKind::ALL
                .into_iter()
                .map(move |kind| Scale::new(tonic, kind))
        })
    }

    /// Display name, e.g. "C Major" or "F# Minor".
    pub fn name(&self) -> String {
        self.to_string()
    }

    /// The seven diatonic triads, in degree order.
    pub fn diatonic_chords(&self) -> [DiatonicChord; 7] {
        let steps = self.kind.steps();
        let triads = self.kind.triads();
        let labels = self.kind.degree_labels();
        std::array::from_fn(|i| DiatonicChord {
            root: self.tonic.transpose(steps[i]),
            quality: triads[i],
            degree: labels[i],
        })
    }

    /// Whether `quality` on `root` is this key's native triad for that
    /// degree. Non-triad qualities are never diatonic here.
    pub fn is_diatonic(&self, root: NoteName, quality: ChordQuality) -> bool {
        self.diatonic_chords()
            .iter()
            .any(|chord| chord.root == root && chord.quality == quality)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.kind.name())
    }
}

impl FromStr for Scale {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ChordError::UnknownScale(s.to_string());
        let (tonic, kind) = s.split_once(' ').ok_or_else(unknown)?;
        let tonic: NoteName = tonic.parse().map_err(|_| unknown())?;
        let kind = ScaleKind::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(unknown)?;
        Ok(Scale::new(tonic, kind))
    }
}
