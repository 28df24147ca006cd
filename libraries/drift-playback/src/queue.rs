//! Playlist queue with a current-track pointer
//!
//! An ordered list of tracks, a 0-based current index (valid in
//! `[0, len)` whenever the queue is non-empty), and a snapshot of the
//! pre-shuffle order for restoring when shuffle is turned off.

use crate::shuffle::shuffle_current_first;
use drift_core::types::Track;
use rand::Rng;

/// Playback queue
#[derive(Debug, Clone, Default)]
pub struct Queue {
    /// Tracks in play order
    tracks: Vec<Track>,

    /// Current position; meaningful only when `tracks` is non-empty
    current_index: usize,

    /// Original order before shuffle (for restoring)
    original: Vec<Track>,

    /// Whether the queue is currently shuffled
    is_shuffled: bool,
}

impl Queue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue contents
    ///
    /// Resets the current index to 0 and clears any shuffle state.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.original.clone_from(&tracks);
        self.tracks = tracks;
        self.current_index = 0;
        self.is_shuffled = false;
    }

    /// Track at the current index, if any
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current_index)
    }

    /// Current index (0 when empty)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Whether a subsequent track exists
    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.tracks.len()
    }

    /// Whether a prior track exists
    pub fn has_previous(&self) -> bool {
        self.current_index > 0 && !self.tracks.is_empty()
    }

    /// Check if the queue is shuffled
    pub fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    /// All tracks in current play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Move the pointer to `index`
    ///
    /// Returns the track at the new position, or `None` when out of range
    /// (pointer untouched).
    pub fn jump_to(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            return None;
        }
        self.current_index = index;
        self.tracks.get(index)
    }

    /// Advance to the next track, if one exists
    pub fn advance(&mut self) -> Option<&Track> {
        if self.has_next() {
            self.current_index += 1;
            self.tracks.get(self.current_index)
        } else {
            None
        }
    }

    /// Advance with wrap-around (repeat-all semantics)
    pub fn advance_wrapping(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current_index = (self.current_index + 1) % self.tracks.len();
        self.tracks.get(self.current_index)
    }

    /// Step back to the prior track, if one exists
    pub fn retreat(&mut self) -> Option<&Track> {
        if self.has_previous() {
            self.current_index -= 1;
            self.tracks.get(self.current_index)
        } else {
            None
        }
    }

    /// Shuffle the queue, pinning the current track to position 0
    ///
    /// The pre-shuffle order is kept so [`Queue::unshuffle`] can restore it.
    /// No-op on an empty queue or when already shuffled.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        if self.tracks.is_empty() || self.is_shuffled {
            return;
        }

        self.original.clone_from(&self.tracks);
        shuffle_current_first(&mut self.tracks, self.current_index, rng);
        self.current_index = 0;
        self.is_shuffled = true;
    }

    /// Restore the original pre-shuffle order
    ///
    /// The pointer follows the current track to its position in the restored
    /// order. If the current track is no longer present there (queue mutated
    /// while shuffled), the pointer resets to 0.
    pub fn unshuffle(&mut self) {
        if !self.is_shuffled {
            return;
        }

        let current_id = self.current().map(|t| t.id.clone());
        self.tracks.clone_from(&self.original);
        self.is_shuffled = false;

        self.current_index = match current_id {
            Some(id) => self
                .tracks
                .iter()
                .position(|t| t.id == id)
                .unwrap_or(0),
            None => 0,
        };
    }
}
