//! Shuffle with the current track pinned to the front
//!
//! Enabling shuffle must never change what is audibly playing, so the
//! current track is lifted out, the remainder is permuted (Fisher-Yates via
//! `rand`), and the current track is reinserted at position 0.

use drift_core::types::Track;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `tracks` in place, keeping the track at `current_index` first
///
/// After the call the previously-current track is at index 0. Out-of-range
/// `current_index` (possible only on an empty slice) is a no-op.
pub fn shuffle_current_first<R: Rng>(tracks: &mut Vec<Track>, current_index: usize, rng: &mut R) {
    if current_index >= tracks.len() {
        return;
    }

    let current = tracks.remove(current_index);
    tracks.shuffle(rng);
    tracks.insert(0, current);
}
