// Perfect Chords theory: the data behind the chord player.
//
// Computes, for every chromatic root and every supported chord quality, the
// root-position MIDI pitches and all rotational inversions. The result is a
// static lookup table that the builder serializes to chords.json and the
// player loads back at startup.
//
// Architecture:
// - note.rs: The twelve sharp-spelled note names and the note -> MIDI pitch
//   table at a base octave (C3 = 48)
// - quality.rs: The eighteen chord qualities with their semitone formulas,
//   declared order, and grid display order
// - inversion.rs: Rotate-then-sort inversion generation
// - table.rs: `ChordTable` construction plus its order-preserving JSON form
// - scale.rs: Major/minor keys and their diatonic triads (grid columns)
// - voicing.rs: Selecting an inversion at an octave, and chord labels
// - error.rs: `ChordError` for name parsing and MIDI range failures
//
// Everything here is pure and deterministic; the only I/O is
// `ChordTable::load`, for consumers reading a previously written file.

pub mod error;
pub mod inversion;
pub mod note;
pub mod quality;
pub mod scale;
pub mod table;
pub mod voicing;

pub use error::ChordError;
pub use inversion::inversions;
pub use note::{BASE_OCTAVE, MAX_OCTAVE, NoteName, PitchTable};
pub use quality::ChordQuality;
pub use scale::{DiatonicChord, Scale, ScaleKind};
pub use table::{ChordEntry, ChordTable, RootChords};
pub use voicing::chord_label;
