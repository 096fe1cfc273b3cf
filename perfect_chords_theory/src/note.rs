// Chromatic note names and the pitch table.
//
// The twelve note names are spelled with sharps only ("C", "C#", ..., "B"),
// in ascending chromatic order. Their declared order is significant: it is
// the order of the top-level keys in chords.json and it defines each note's
// semitone index (C = 0, B = 11).
//
// `PitchTable` anchors those indices to MIDI note numbers at a base octave.
// MIDI numbering puts C0 at 12, so octave 3 puts C at 12 + 3 * 12 = 48 and
// every other note at `48 + index`. A table only exists for octaves where
// every chord built on it, raised an octave for its last inversion, stays
// within MIDI 127.

use crate::error::ChordError;
use crate::quality::MAX_FORMULA_OFFSET;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MIDI note number of C in octave 0.
pub const C0_MIDI: u8 = 12;

/// Semitones per octave.
pub const OCTAVE: u8 = 12;

/// The one base octave the chord table is generated at.
pub const BASE_OCTAVE: u8 = 3;

/// Highest valid MIDI note number.
pub const MIDI_MAX: u8 = 127;

/// Highest octave whose B, plus the widest formula offset, plus one octave of
/// inversion, is still a MIDI note.
pub const MAX_OCTAVE: u8 = (MIDI_MAX - C0_MIDI - 11 - MAX_FORMULA_OFFSET - OCTAVE) / OCTAVE;

/// One of the twelve chromatic pitch names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    #[serde(rename = "C")]
    C = 0,
    #[serde(rename = "C#")]
    CSharp = 1,
    #[serde(rename = "D")]
    D = 2,
    #[serde(rename = "D#")]
    DSharp = 3,
    #[serde(rename = "E")]
    E = 4,
    #[serde(rename = "F")]
    F = 5,
    #[serde(rename = "F#")]
    FSharp = 6,
    #[serde(rename = "G")]
    G = 7,
    #[serde(rename = "G#")]
    GSharp = 8,
    #[serde(rename = "A")]
    A = 9,
    #[serde(rename = "A#")]
    ASharp = 10,
    #[serde(rename = "B")]
    B = 11,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Position in the chromatic ordering (0-11).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            NoteName::C => "C",
            NoteName::CSharp => "C#",
            NoteName::D => "D",
            NoteName::DSharp => "D#",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::FSharp => "F#",
            NoteName::G => "G",
            NoteName::GSharp => "G#",
            NoteName::A => "A",
            NoteName::ASharp => "A#",
            NoteName::B => "B",
        }
    }

    /// The note `semitones` above this one, wrapping around the octave.
    pub fn transpose(self, semitones: u8) -> NoteName {
        NoteName::ALL[(self.index() + semitones as usize) % 12]
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoteName {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::ALL
            .iter()
            .copied()
            .find(|note| note.name() == s)
            .ok_or_else(|| ChordError::UnknownNote(s.to_string()))
    }
}

/// Note name to MIDI pitch mapping at a fixed octave. Built once and never
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchTable {
    octave: u8,
    pitches: [u8; 12],
}

impl PitchTable {
    /// Pitch table at `octave`, or `OctaveOutOfRange` above [`MAX_OCTAVE`].
    pub fn new(octave: u8) -> Result<Self, ChordError> {
        if octave > MAX_OCTAVE {
            return Err(ChordError::OctaveOutOfRange {
                octave,
                max: MAX_OCTAVE,
            });
        }
        Ok(PitchTable::at_octave(octave))
    }

    /// Caller guarantees `octave <= MAX_OCTAVE`.
    fn at_octave(octave: u8) -> Self {
        let base = C0_MIDI + octave * OCTAVE;
        let mut pitches = [0u8; 12];
        for note in NoteName::ALL {
            pitches[note.index()] = base + note.index() as u8;
        }
        PitchTable { octave, pitches }
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// MIDI pitch of `note` in this table's octave.
    pub fn pitch(&self, note: NoteName) -> u8 {
        self.pitches[note.index()]
    }

    /// String form of [`PitchTable::pitch`]. Only the twelve sharp spellings
    /// are recognized.
    pub fn pitch_of(&self, name: &str) -> Result<u8, ChordError> {
        name.parse::<NoteName>().map(|note| self.pitch(note))
    }

    /// `(note, pitch)` pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (NoteName, u8)> + '_ {
        NoteName::ALL
            .into_iter()
            .map(move |note| (note, self.pitch(note)))
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        PitchTable::at_octave(BASE_OCTAVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_octave_pitches() {
        let table = PitchTable::default();
        assert_eq!(table.pitch_of("C"), Ok(48));
        assert_eq!(table.pitch_of("C#"), Ok(49));
        assert_eq!(table.pitch_of("A"), Ok(57));
        assert_eq!(table.pitch_of("B"), Ok(59));
    }

    #[test]
    fn test_pitch_is_base_plus_index() {
        let table = PitchTable::default();
        for (i, (note, pitch)) in table.iter().enumerate() {
            assert_eq!(note.index(), i);
            assert_eq!(pitch as usize, 48 + i);
        }
    }

    #[test]
    fn test_other_octaves() {
        assert_eq!(PitchTable::new(4).unwrap().pitch(NoteName::C), 60);
        assert_eq!(PitchTable::new(0).unwrap().pitch(NoteName::A), 21);
        assert_eq!(PitchTable::new(BASE_OCTAVE).unwrap(), PitchTable::default());
    }

    #[test]
    fn test_octave_limit() {
        assert_eq!(MAX_OCTAVE, 6);
        let top = PitchTable::new(MAX_OCTAVE).unwrap();
        assert_eq!(top.pitch(NoteName::B), 95);
        assert!(top.pitch(NoteName::B) + MAX_FORMULA_OFFSET + OCTAVE <= MIDI_MAX);

        assert_eq!(
            PitchTable::new(MAX_OCTAVE + 1),
            Err(ChordError::OctaveOutOfRange { octave: 7, max: 6 })
        );
        assert!(PitchTable::new(19).is_err());
        assert!(PitchTable::new(u8::MAX).is_err());
    }

    #[test]
    fn test_unknown_names_rejected() {
        let table = PitchTable::default();
        assert_eq!(table.pitch_of("Db"), Err(ChordError::UnknownNote("Db".into())));
        assert!(table.pitch_of("c").is_err());
        assert!(table.pitch_of("").is_err());
    }

    #[test]
    fn test_names_roundtrip_through_from_str() {
        for note in NoteName::ALL {
            assert_eq!(note.name().parse::<NoteName>(), Ok(note));
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(NoteName::A.transpose(3), NoteName::C);
        assert_eq!(NoteName::B.transpose(1), NoteName::C);
        assert_eq!(NoteName::E.transpose(12), NoteName::E);
    }
}
