// Chord qualities and their interval formulas.
//
// Each quality is a fixed list of semitone offsets above the chord root. The
// formulas are trusted constants and are not validated. Two orderings
// matter:
// - `ChordQuality::ALL` is the declared order, used for the nested keys of
//   chords.json.
// - `ChordQuality::GRID_ORDER` is the row order of the chord grid in the
//   player UI, which groups triads, sixths, sevenths, and extensions.

use crate::error::ChordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest semitone offset in any formula (the ninth).
pub const MAX_FORMULA_OFFSET: u8 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    #[serde(rename = "maj")]
    Major,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    Sus4,
    /// Power chord: root and fifth only.
    #[serde(rename = "5")]
    Power,
    #[serde(rename = "maj7")]
    Major7,
    #[serde(rename = "m7")]
    Minor7,
    #[serde(rename = "7")]
    Dominant7,
    #[serde(rename = "dim7")]
    Diminished7,
    /// Half-diminished.
    #[serde(rename = "m7b5")]
    Minor7Flat5,
    #[serde(rename = "6")]
    Major6,
    #[serde(rename = "m6")]
    Minor6,
    #[serde(rename = "9")]
    Dominant9,
    #[serde(rename = "maj9")]
    Major9,
    #[serde(rename = "m9")]
    Minor9,
    /// Major triad with a lowered fifth.
    #[serde(rename = "flat5")]
    Flat5,
}

impl ChordQuality {
    /// Declared order.
    pub const ALL: [ChordQuality; 18] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Power,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::Dominant7,
        ChordQuality::Diminished7,
        ChordQuality::Minor7Flat5,
        ChordQuality::Major6,
        ChordQuality::Minor6,
        ChordQuality::Dominant9,
        ChordQuality::Major9,
        ChordQuality::Minor9,
        ChordQuality::Flat5,
    ];

    /// Row order of the chord grid.
    pub const GRID_ORDER: [ChordQuality; 18] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Power,
        ChordQuality::Sus2,
        ChordQuality::Sus4,
        ChordQuality::Major6,
        ChordQuality::Minor6,
        ChordQuality::Dominant7,
        ChordQuality::Minor7,
        ChordQuality::Major7,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
        ChordQuality::Dominant9,
        ChordQuality::Minor9,
        ChordQuality::Major9,
        ChordQuality::Flat5,
        ChordQuality::Minor7Flat5,
        ChordQuality::Diminished7,
    ];

    /// Key used in chords.json.
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "maj",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
            ChordQuality::Sus2 => "sus2",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::Power => "5",
            ChordQuality::Major7 => "maj7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Diminished7 => "dim7",
            ChordQuality::Minor7Flat5 => "m7b5",
            ChordQuality::Major6 => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::Dominant9 => "9",
            ChordQuality::Major9 => "maj9",
            ChordQuality::Minor9 => "m9",
            ChordQuality::Flat5 => "flat5",
        }
    }

    /// Semitone offsets above the root, in formula order.
    pub fn formula(self) -> &'static [u8] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
            ChordQuality::Diminished => &[0, 3, 6],
            ChordQuality::Augmented => &[0, 4, 8],
            ChordQuality::Sus2 => &[0, 2, 7],
            ChordQuality::Sus4 => &[0, 5, 7],
            ChordQuality::Power => &[0, 7],
            ChordQuality::Major7 => &[0, 4, 7, 11],
            ChordQuality::Minor7 => &[0, 3, 7, 10],
            ChordQuality::Dominant7 => &[0, 4, 7, 10],
            ChordQuality::Diminished7 => &[0, 3, 6, 9],
            ChordQuality::Minor7Flat5 => &[0, 3, 6, 10],
            ChordQuality::Major6 => &[0, 4, 7, 9],
            ChordQuality::Minor6 => &[0, 3, 7, 9],
            ChordQuality::Dominant9 => &[0, 4, 7, 10, 14],
            ChordQuality::Major9 => &[0, 4, 7, 11, 14],
            ChordQuality::Minor9 => &[0, 3, 7, 10, 14],
            ChordQuality::Flat5 => &[0, 4, 6],
        }
    }

    /// Suffix appended to the root name in chord labels ("C", "Cm7", "Cb5").
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Flat5 => "b5",
            other => other.name(),
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordQuality::ALL
            .iter()
            .copied()
            .find(|quality| quality.name() == s)
            .ok_or_else(|| ChordError::UnknownQuality(s.to_string()))
    }
}
