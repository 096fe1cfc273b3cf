// End-to-end test for the builder: run it against a scratch directory, then
// read chords.json back both as raw JSON and through the player-side loader.

use perfect_chords_builder::{BuildError, BuilderConfig, OUTPUT_FILE_NAME, run};
use perfect_chords_theory::{ChordError, ChordQuality, ChordTable, NoteName, PitchTable};
use pretty_assertions::assert_eq;

fn run_in(dir: &tempfile::TempDir) -> perfect_chords_builder::BuildReport {
    let config = BuilderConfig {
        output_path: dir.path().join(OUTPUT_FILE_NAME),
        ..Default::default()
    };
    run(&config).unwrap()
}

#[test]
fn writes_full_table() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_in(&dir);

    assert_eq!(report.root_count, 12);
    assert!(report.output_path.is_absolute());
    assert!(report.output_path.ends_with(OUTPUT_FILE_NAME));

    let text = std::fs::read_to_string(&report.output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let roots = value.as_object().unwrap();
    assert_eq!(roots.len(), 12);
    for (note, qualities) in roots {
        assert_eq!(qualities.as_object().unwrap().len(), 18, "{note}");
    }

    assert_eq!(value["C"]["maj"]["root"], serde_json::json!([48, 52, 55]));
    assert_eq!(
        value["C"]["maj"]["inversions"],
        serde_json::json!([[48, 52, 55], [52, 55, 60], [55, 60, 64]])
    );
    assert_eq!(value["A"]["m7"]["root"], serde_json::json!([57, 60, 64, 67]));
    assert_eq!(value["G"]["5"]["inversions"].as_array().unwrap().len(), 2);
}

#[test]
fn reloads_identically_in_declared_order() {
    let dir = tempfile::tempdir().unwrap();
    let report = run_in(&dir);

    let loaded = ChordTable::load(&report.output_path).unwrap();
    assert_eq!(loaded, ChordTable::build(&PitchTable::default()));

    let notes: Vec<NoteName> = loaded.roots().iter().map(|r| r.note).collect();
    assert_eq!(notes, NoteName::ALL.to_vec());
    let qualities: Vec<ChordQuality> = loaded.roots()[5]
        .chords
        .iter()
        .map(|c| c.quality)
        .collect();
    assert_eq!(qualities, ChordQuality::ALL.to_vec());
}

#[test]
fn rerun_overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    std::fs::write(&path, "stale").unwrap();

    let report = run_in(&dir);
    let text = std::fs::read_to_string(&report.output_path).unwrap();
    assert!(text.starts_with('{'));
    assert!(ChordTable::from_json(&text).is_ok());
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuilderConfig {
        output_path: dir.path().join("missing").join(OUTPUT_FILE_NAME),
        ..Default::default()
    };
    let err = run(&config).unwrap_err();
    assert!(matches!(err, BuildError::Io { .. }));
    assert!(err.to_string().contains("failed to write"));
}

#[test]
fn out_of_range_octave_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    let json = serde_json::json!({ "base_octave": 19, "output_path": path });
    let config: BuilderConfig = serde_json::from_value(json).unwrap();

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Chord(ChordError::OctaveOutOfRange { octave: 19, max: 6 })
    ));
    assert!(err.to_string().contains("octave 19"));
    assert!(!path.exists());
}

#[test]
fn highest_octave_still_builds() {
    let dir = tempfile::tempdir().unwrap();
    let config = BuilderConfig {
        base_octave: 6,
        output_path: dir.path().join(OUTPUT_FILE_NAME),
    };
    let report = run(&config).unwrap();
    let loaded = ChordTable::load(&report.output_path).unwrap();
    assert_eq!(loaded.base_octave(), 6);
    assert_eq!(loaded.get(NoteName::C, ChordQuality::Major).unwrap().root, vec![84, 88, 91]);
}
