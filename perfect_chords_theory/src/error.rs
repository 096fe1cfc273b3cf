// Error type for name lookups and voicing transposition.
//
// The core tables are fixed constants, so once a base octave is accepted,
// building the chord table cannot fail. Errors arise when choosing an
// octave whose chords would not fit in MIDI, at the string boundary
// (parsing a note, quality, or scale name from a file or a caller), and
// when a voicing leaves the MIDI note range.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChordError {
    #[error("unknown note name '{0}'")]
    UnknownNote(String),
    #[error("unknown chord quality '{0}'")]
    UnknownQuality(String),
    #[error("unknown scale '{0}' (expected e.g. \"C Major\" or \"A Minor\")")]
    UnknownScale(String),
    #[error("octave {octave} puts chord notes above MIDI 127 (highest usable octave is {max})")]
    OctaveOutOfRange { octave: u8, max: u8 },
    #[error("note {note} is outside the MIDI range 0-127")]
    NoteOutOfRange { note: i16 },
}
