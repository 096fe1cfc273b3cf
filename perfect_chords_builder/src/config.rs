// Builder configuration.
//
// The builder takes no flags and reads no environment or config file: the
// defaults below are the whole configuration. The struct exists so tests can
// redirect output to a scratch directory and so the settings are spelled out
// in one place.
//
// `output_path` defaults to chords.json in this crate's directory, which is
// where the chord player embeds the table from.

use perfect_chords_theory::BASE_OCTAVE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the generated table.
pub const OUTPUT_FILE_NAME: &str = "chords.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Octave whose C is the lowest root in the table.
    pub base_octave: u8,
    pub output_path: PathBuf,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            base_octave: BASE_OCTAVE,
            output_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(OUTPUT_FILE_NAME),
        }
    }
}
