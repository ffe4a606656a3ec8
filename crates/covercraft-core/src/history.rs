//! Undo/redo history: linear snapshots with branch discard.

use crate::scene::{Scene, SceneSnapshot};
use std::time::{Duration, Instant};

/// Maximum number of history snapshots to keep.
pub const MAX_HISTORY: usize = 50;

/// Delay used to coalesce an object-added commit with an immediately
/// following mutation (e.g. restyling right after creation) into a single
/// snapshot of the latest state.
pub const SNAPSHOT_DEBOUNCE: Duration = Duration::from_millis(100);

/// Snapshot history with a cursor.
///
/// Invariant: `0 <= step < entries.len()` whenever the history is non-empty.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<SceneSnapshot>,
    step: usize,
    pending_since: Option<Instant>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the live scene as a new snapshot.
    ///
    /// Truncates any redo branch beyond the cursor, appends, advances the
    /// cursor, and evicts the oldest entry past [`MAX_HISTORY`]. A pending
    /// debounced commit is absorbed: this snapshot already captures the
    /// latest state.
    pub fn record(&mut self, scene: &Scene) -> &SceneSnapshot {
        self.pending_since = None;
        if !self.entries.is_empty() {
            self.entries.truncate(self.step + 1);
        }
        self.entries.push(scene.serialize());
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
        self.step = self.entries.len() - 1;
        log::debug!("history: recorded snapshot {}/{}", self.step, self.entries.len());
        &self.entries[self.step]
    }

    /// Schedule a debounced snapshot. A second call before the delay elapses
    /// replaces the first, so only one snapshot (of the latest state) results.
    pub fn record_debounced(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// Settle a pending debounced snapshot if its delay has elapsed.
    pub fn poll(&mut self, scene: &Scene, now: Instant) -> Option<&SceneSnapshot> {
        match self.pending_since {
            Some(since) if now.duration_since(since) >= SNAPSHOT_DEBOUNCE => {
                Some(self.record(scene))
            }
            _ => None,
        }
    }

    /// Settle a pending debounced snapshot immediately, if any.
    pub fn flush_pending(&mut self, scene: &Scene) -> Option<&SceneSnapshot> {
        if self.pending_since.is_some() {
            Some(self.record(scene))
        } else {
            None
        }
    }

    /// Step back one snapshot, restoring it into the scene (background
    /// included). Returns false (and leaves everything untouched) at the
    /// start of history.
    pub fn undo(&mut self, scene: &mut Scene) -> bool {
        self.flush_pending(scene);
        if !self.can_undo() {
            return false;
        }
        self.step -= 1;
        scene.restore(&self.entries[self.step]);
        log::debug!("history: undo to {}/{}", self.step, self.entries.len());
        true
    }

    /// Step forward one snapshot. Returns false at the end of history.
    pub fn redo(&mut self, scene: &mut Scene) -> bool {
        self.flush_pending(scene);
        if !self.can_redo() {
            return false;
        }
        self.step += 1;
        scene.restore(&self.entries[self.step]);
        log::debug!("history: redo to {}/{}", self.step, self.entries.len());
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.step + 1 < self.entries.len()
    }

    /// Drop all history (new-scene / reset-scene).
    pub fn reset(&mut self) {
        self.entries.clear();
        self.step = 0;
        self.pending_since = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn step(&self) -> usize {
        self.step
    }
}
