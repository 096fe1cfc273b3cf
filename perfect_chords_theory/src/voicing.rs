// Picking the notes to play for a chord.
//
// The table stores every chord at one base octave. A player chooses an
// inversion index (wrapping modulo the number of inversions) and an octave,
// and the chosen inversion is shifted by whole octaves relative to the
// table's base octave.

use crate::error::ChordError;
use crate::note::{MIDI_MAX, NoteName, OCTAVE};
use crate::quality::ChordQuality;
use crate::table::{ChordEntry, ChordTable};

impl ChordEntry {
    /// Notes for `inversion` (taken modulo the inversion count) played at
    /// `octave`, given that the entry was built at `base_octave`. An entry
    /// with no inversions yields no notes.
    pub fn voicing(
        &self,
        inversion: u8,
        octave: i8,
        base_octave: u8,
    ) -> Result<Vec<u8>, ChordError> {
        if self.inversions.is_empty() {
            return Ok(Vec::new());
        }
        let notes = &self.inversions[inversion as usize % self.inversions.len()];
        let shift = (octave as i16 - base_octave as i16) * OCTAVE as i16;

        notes
            .iter()
            .map(|&note| {
                let shifted = note as i16 + shift;
                if (0..=MIDI_MAX as i16).contains(&shifted) {
                    Ok(shifted as u8)
                } else {
                    Err(ChordError::NoteOutOfRange { note: shifted })
                }
            })
            .collect()
    }
}

impl ChordTable {
    /// Notes to play for `quality` on `root`. `None` if the table has no such
    /// chord.
    pub fn voicing(
        &self,
        root: NoteName,
        quality: ChordQuality,
        inversion: u8,
        octave: i8,
    ) -> Option<Result<Vec<u8>, ChordError>> {
        self.get(root, quality)
            .map(|entry| entry.voicing(inversion, octave, self.base_octave()))
    }
}

/// Chord symbol as shown on the grid: "C", "F#m7", "A#b5".
pub fn chord_label(root: NoteName, quality: ChordQuality) -> String {
    format!("{}{}", root, quality.suffix())
}
