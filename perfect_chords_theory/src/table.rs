// The chord table: every root note crossed with every chord quality.
//
// `ChordTable::build` walks `NoteName::ALL` and, for each root, every
// quality in `ChordQuality::ALL`, computing the root-position voicing
// (`root pitch + offset` per formula offset) and its inversions
// (inversion.rs). The table is fully materialized before anything reads it
// and is never mutated afterwards.
//
// Serialized shape (chords.json):
//
//   { "C": { "maj": { "root": [48, 52, 55],
//                     "inversions": [[48, 52, 55], [52, 55, 60], ...] },
//            "m": { ... }, ... },
//     "C#": { ... }, ... }
//
// Keys are written in declared order, so `Serialize` is implemented by hand
// over the ordered vectors instead of going through a map type. The
// `Deserialize` impl keeps file order as well and rejects names outside the
// fixed note and quality sets.

use crate::error::ChordError;
use crate::inversion::inversions;
use crate::note::{MIDI_MAX, NoteName, OCTAVE, PitchTable};
use crate::quality::ChordQuality;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// One quality's voicings under one root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordEntry {
    pub quality: ChordQuality,
    /// Root-position pitches in formula order.
    pub root: Vec<u8>,
    /// Ascending-sorted inversions; index 0 is the root position.
    pub inversions: Vec<Vec<u8>>,
}

impl ChordEntry {
    /// Compute the voicing of `quality` on the MIDI pitch `root_pitch`.
    /// Fails with `NoteOutOfRange` if the widest note raised an octave would
    /// be above MIDI 127, which bounds every note any inversion can reach.
    pub fn new(quality: ChordQuality, root_pitch: u8) -> Result<Self, ChordError> {
        let widest = quality.formula().iter().copied().max().unwrap_or(0);
        let highest = root_pitch as i16 + widest as i16 + OCTAVE as i16;
        if highest > MIDI_MAX as i16 {
            return Err(ChordError::NoteOutOfRange { note: highest });
        }
        Ok(ChordEntry::voiced(quality, root_pitch))
    }

    /// Caller guarantees the voicing fits in MIDI (see [`ChordEntry::new`]).
    fn voiced(quality: ChordQuality, root_pitch: u8) -> Self {
        let root: Vec<u8> = quality
            .formula()
            .iter()
            .map(|&offset| root_pitch + offset)
            .collect();
        let inversions = inversions(&root);
        ChordEntry {
            quality,
            root,
            inversions,
        }
    }
}

/// All chord entries for a single root note, in quality order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootChords {
    pub note: NoteName,
    pub chords: Vec<ChordEntry>,
}

impl RootChords {
    pub fn get(&self, quality: ChordQuality) -> Option<&ChordEntry> {
        self.chords.iter().find(|entry| entry.quality == quality)
    }
}

/// Note name -> chord quality -> voicings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordTable {
    roots: Vec<RootChords>,
    base_octave: u8,
}

impl ChordTable {
    /// Build the full table from `pitches`. Cannot fail: a `PitchTable`
    /// only exists for octaves whose chords all fit in MIDI.
    pub fn build(pitches: &PitchTable) -> Self {
        let mut roots = Vec::with_capacity(NoteName::ALL.len());
        for (note, root_pitch) in pitches.iter() {
            let chords: Vec<ChordEntry> = ChordQuality::ALL
                .iter()
                .map(|&quality| ChordEntry::voiced(quality, root_pitch))
                .collect();
            tracing::debug!(
                root = %note,
                pitch = root_pitch,
                chords = chords.len(),
                "built root"
            );
            roots.push(RootChords { note, chords });
        }
        ChordTable {
            roots,
            base_octave: pitches.octave(),
        }
    }

    /// Parse a table previously written as chords.json. The base octave is
    /// not stored in the file; it is recovered from the first root's pitch.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a chords.json file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let data = std::fs::read_to_string(path)?;
        Ok(ChordTable::from_json(&data)?)
    }

    /// Octave whose C the table's lowest root sits on.
    pub fn base_octave(&self) -> u8 {
        self.base_octave
    }

    pub fn roots(&self) -> &[RootChords] {
        &self.roots
    }

    /// Number of root notes in the table.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn root(&self, note: NoteName) -> Option<&RootChords> {
        self.roots.iter().find(|root| root.note == note)
    }

    pub fn get(&self, note: NoteName, quality: ChordQuality) -> Option<&ChordEntry> {
        self.root(note).and_then(|root| root.get(quality))
    }

    /// String form of [`ChordTable::get`], for names coming from outside the
    /// crate. A valid name with no entry in this table is reported the same
    /// way as an unrecognized one.
    pub fn lookup(&self, note: &str, quality: &str) -> Result<&ChordEntry, ChordError> {
        let note_name: NoteName = note.parse()?;
        let quality_name: ChordQuality = quality.parse()?;
        let root = self
            .root(note_name)
            .ok_or_else(|| ChordError::UnknownNote(note.to_string()))?;
        root.get(quality_name)
            .ok_or_else(|| ChordError::UnknownQuality(quality.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct EntryBody<'a> {
    root: &'a [u8],
    inversions: &'a [Vec<u8>],
}

struct QualityMap<'a>(&'a [ChordEntry]);

impl Serialize for QualityMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(
                entry.quality.name(),
                &EntryBody {
                    root: &entry.root,
                    inversions: &entry.inversions,
                },
            )?;
        }
        map.end()
    }
}

impl Serialize for ChordTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roots.len()))?;
        for root in &self.roots {
            map.serialize_entry(root.note.name(), &QualityMap(&root.chords))?;
        }
        map.end()
    }
}

#[derive(Deserialize)]
struct OwnedEntryBody {
    root: Vec<u8>,
    inversions: Vec<Vec<u8>>,
}

struct QualityMapVisitor;

impl<'de> Visitor<'de> for QualityMapVisitor {
    type Value = Vec<ChordEntry>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of chord quality names to voicings")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut chords = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((quality, body)) = access.next_entry::<ChordQuality, OwnedEntryBody>()? {
            chords.push(ChordEntry {
                quality,
                root: body.root,
                inversions: body.inversions,
            });
        }
        Ok(chords)
    }
}

struct QualityEntries(Vec<ChordEntry>);

impl<'de> Deserialize<'de> for QualityEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(QualityMapVisitor).map(QualityEntries)
    }
}

struct ChordTableVisitor;

impl<'de> Visitor<'de> for ChordTableVisitor {
    type Value = ChordTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of note names to chord quality maps")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut roots = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((note, chords)) = access.next_entry::<NoteName, QualityEntries>()? {
            roots.push(RootChords {
                note,
                chords: chords.0,
            });
        }

        let base_octave = match roots.first() {
            Some(first) => octave_of_root(first).map_err(de::Error::custom)?,
            None => crate::note::BASE_OCTAVE,
        };

        Ok(ChordTable { roots, base_octave })
    }
}

/// Recover the base octave from a root whose chords carry the root pitch.
fn octave_of_root(root: &RootChords) -> Result<u8, String> {
    let Some(pitch) = root.chords.iter().find_map(|entry| entry.root.first().copied()) else {
        return Ok(crate::note::BASE_OCTAVE);
    };
    let c_pitch = pitch
        .checked_sub(root.note.index() as u8 + crate::note::C0_MIDI)
        .ok_or_else(|| format!("root pitch {pitch} for {} is below octave 0", root.note))?;
    Ok(c_pitch / crate::note::OCTAVE)
}

impl<'de> Deserialize<'de> for ChordTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ChordTableVisitor)
    }
}
