// Errors from building, serializing, and writing the chord table.
//
// A base octave too high for MIDI is rejected before anything is written.
// Any of these aborts the run: a partially written table is worthless, so
// nothing is retried.

use perfect_chords_theory::ChordError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid chord table settings: {0}")]
    Chord(#[from] ChordError),
    #[error("failed to serialize chord table: {0}")]
    Json(#[from] serde_json::Error),
}
