// Serializing and writing chords.json.
//
// The table is built completely in memory, rendered as 2-space indented
// JSON, and written with a single blocking call. The file has no trailing
// newline.

use crate::config::BuilderConfig;
use crate::error::BuildError;
use perfect_chords_theory::{ChordTable, PitchTable};
use std::path::{Path, PathBuf};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Root notes written.
    pub root_count: usize,
    /// Absolute path of the written file.
    pub output_path: PathBuf,
}

/// Render `table` as indented JSON, keys in declared order.
pub fn to_json(table: &ChordTable) -> Result<String, BuildError> {
    Ok(serde_json::to_string_pretty(table)?)
}

/// Write `table` to `path` and return the file's absolute path.
pub fn write_table(table: &ChordTable, path: &Path) -> Result<PathBuf, BuildError> {
    let json = to_json(table)?;
    std::fs::write(path, json).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), roots = table.len(), "wrote chord table");
    Ok(absolute(path))
}

/// Build the table described by `config` and write it out. An octave above
/// `MAX_OCTAVE` fails before the output file is touched.
pub fn run(config: &BuilderConfig) -> Result<BuildReport, BuildError> {
    let table = ChordTable::build(&PitchTable::new(config.base_octave)?);
    let output_path = write_table(&table, &config.output_path)?;
    Ok(BuildReport {
        root_count: table.len(),
        output_path,
    })
}

fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = std::fs::canonicalize(path) {
        return canonical;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
