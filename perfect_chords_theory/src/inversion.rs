// Inversion generation by rotating a voicing.
//
// Each step snapshots the working list sorted ascending, then moves the
// working list's *first* element (in its unsorted order) to the back, one
// octave higher. The rotation runs on the unsorted working order, not on the
// sorted snapshot, so the results follow the formula's note order. A voicing
// of N notes yields exactly N inversions, index 0 being the sorted root
// position.

use crate::note::OCTAVE;
use std::collections::VecDeque;

/// All inversions of `voicing`, root position first. Pitches are MIDI note
/// numbers.
///
/// # Panics
///
/// Raising a pitch by an octave must not overflow `u8` (a debug build
/// panics). Voicings built by [`crate::ChordEntry::new`] or on a
/// [`crate::PitchTable`] stay within MIDI 127.
pub fn inversions(voicing: &[u8]) -> Vec<Vec<u8>> {
    let mut working: VecDeque<u8> = voicing.iter().copied().collect();
    let mut result = Vec::with_capacity(voicing.len());

    for _ in 0..voicing.len() {
        let mut snapshot: Vec<u8> = working.iter().copied().collect();
        snapshot.sort_unstable();
        result.push(snapshot);

        if let Some(lowest) = working.pop_front() {
            working.push_back(lowest + OCTAVE);
        }
    }

    result
}
