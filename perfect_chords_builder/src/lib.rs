// Perfect Chords builder: writes chords.json.
//
// Builds the full chord table from perfect_chords_theory and persists it as
// indented JSON beside this crate, where the chord player picks it up.
//
// Module overview:
// - `config.rs`: `BuilderConfig` (base octave, output path) with defaults.
// - `output.rs`: JSON rendering, the single file write, and `run`, which
//                chains build -> write and returns a `BuildReport`.
// - `error.rs`:  `BuildError` for serialization and I/O failures.

pub mod config;
pub mod error;
pub mod output;

pub use config::{BuilderConfig, OUTPUT_FILE_NAME};
pub use error::BuildError;
pub use output::{BuildReport, run, to_json, write_table};
