//! The choice timeline: recorded draws, a read cursor, and checkpoints.
//!
//! Choices before the cursor have been consumed. Choices at or after the
//! cursor are replayed before any fresh entropy is drawn.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::GenError;

/// Source of epochs, shared by every timeline in the process so that a
/// checkpoint never matches a timeline it was not taken on.
static NEXT_EPOCH: AtomicU64 = AtomicU64::new(1);

fn fresh_epoch() -> u64 {
    NEXT_EPOCH.fetch_add(1, Ordering::Relaxed)
}

/// One recorded raw draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Choice {
    value: u64,
    /// Epoch in which the choice was appended.
    epoch: u64,
}

/// A position in the timeline, valid until a `replace` or reseed discards
/// the choice it follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checkpoint {
    position: usize,
    stamp: u64,
}

impl Checkpoint {
    /// Number of choices that precede this checkpoint.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The ordered choices up to a checkpoint, in a portable form.
///
/// `Display` renders lowercase hexadecimal values separated by commas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayTrace {
    /// Raw choices in draw order.
    pub choices: Vec<u64>,
}

impl fmt::Display for ReplayTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, choice) in self.choices.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{choice:x}")?;
        }
        Ok(())
    }
}

/// Append/rewind record of choices.
///
/// A clone shares the recorded prefix, and the checkpoints into it, with
/// the original. Choices either copy appends afterwards are stamped with
/// an epoch of their own.
#[derive(Debug)]
pub(crate) struct Timeline {
    choices: Vec<Choice>,
    cursor: usize,
    /// Epoch stamped onto appended choices.
    epoch: u64,
    /// Stamp of the empty prefix.
    root_epoch: u64,
}

impl Clone for Timeline {
    fn clone(&self) -> Self {
        Self {
            choices: self.choices.clone(),
            cursor: self.cursor,
            epoch: fresh_epoch(),
            root_epoch: self.root_epoch,
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Creates an empty timeline.
    #[must_use]
    pub fn new() -> Self {
        let epoch = fresh_epoch();
        Self {
            choices: Vec::new(),
            cursor: 0,
            epoch,
            root_epoch: epoch,
        }
    }

    /// Number of recorded choices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Position of the next choice to read or generate.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` while historical choices remain ahead of the cursor.
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.cursor < self.choices.len()
    }

    /// Discards everything and invalidates all outstanding checkpoints.
    pub fn reset(&mut self) {
        self.choices.clear();
        self.cursor = 0;
        self.epoch = fresh_epoch();
        self.root_epoch = self.epoch;
    }

    /// Returns the historical choice at the cursor and advances past it.
    pub fn replay_next(&mut self) -> Option<u64> {
        let choice = self.choices.get(self.cursor)?;
        self.cursor += 1;
        Some(choice.value)
    }

    /// Appends a freshly drawn choice at the live end.
    ///
    /// Only meaningful in live mode, i.e. when the cursor is at the end.
    pub fn record(&mut self, value: u64) {
        debug_assert!(!self.is_replaying(), "record called while replaying");
        self.choices.push(Choice {
            value,
            epoch: self.epoch,
        });
        self.cursor = self.choices.len();
    }

    /// Returns a checkpoint at the current cursor.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            position: self.cursor,
            stamp: self.stamp_at(self.cursor),
        }
    }

    /// Moves the cursor to `checkpoint`, keeping everything after it for
    /// replay.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded.
    pub fn seek(&mut self, checkpoint: Checkpoint) -> Result<(), GenError> {
        self.validate(checkpoint)?;
        self.cursor = checkpoint.position;
        Ok(())
    }

    /// Moves the cursor to `checkpoint` and discards every choice after it.
    /// Returns the number of discarded choices.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded.
    pub fn truncate(&mut self, checkpoint: Checkpoint) -> Result<usize, GenError> {
        self.validate(checkpoint)?;
        let discarded = self.choices.len() - checkpoint.position;
        self.choices.truncate(checkpoint.position);
        self.cursor = checkpoint.position;
        self.epoch = fresh_epoch();
        Ok(discarded)
    }

    /// Returns the choices that precede `checkpoint`.
    ///
    /// # Errors
    ///
    /// Returns `GenError::InvalidCheckpoint` if the checkpoint was discarded.
    pub fn trace(&self, checkpoint: Checkpoint) -> Result<ReplayTrace, GenError> {
        self.validate(checkpoint)?;
        Ok(ReplayTrace {
            choices: self.choices[..checkpoint.position]
                .iter()
                .map(|choice| choice.value)
                .collect(),
        })
    }

    fn stamp_at(&self, position: usize) -> u64 {
        match position.checked_sub(1) {
            Some(prev) => self.choices[prev].epoch,
            None => self.root_epoch,
        }
    }

    fn validate(&self, checkpoint: Checkpoint) -> Result<(), GenError> {
        if checkpoint.position > self.choices.len()
            || self.stamp_at(checkpoint.position) != checkpoint.stamp
        {
            return Err(GenError::InvalidCheckpoint {
                position: checkpoint.position,
                len: self.choices.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline_with(values: &[u64]) -> Timeline {
        let mut timeline = Timeline::new();
        for &value in values {
            timeline.record(value);
        }
        timeline
    }

    #[test]
    fn test_record_advances_cursor() {
        let timeline = timeline_with(&[1, 2, 3]);
        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 3);
        assert!(!timeline.is_replaying());
    }

    #[test]
    fn test_seek_replays_recorded_choices() {
        let mut timeline = timeline_with(&[10]);
        let checkpoint = timeline.checkpoint();
        timeline.record(20);
        timeline.record(30);

        timeline.seek(checkpoint).unwrap();

        assert!(timeline.is_replaying());
        assert_eq!(timeline.replay_next(), Some(20));
        assert_eq!(timeline.replay_next(), Some(30));
        assert_eq!(timeline.replay_next(), None);
        assert_eq!(timeline.len(), 3);
    }

    #[test]
    fn test_truncate_discards_tail() {
        let mut timeline = timeline_with(&[1, 2]);
        let checkpoint = timeline.checkpoint();
        timeline.record(3);
        timeline.record(4);

        let discarded = timeline.truncate(checkpoint).unwrap();

        assert_eq!(discarded, 2);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.cursor(), 2);
        assert!(!timeline.is_replaying());
    }

    #[test]
    fn test_checkpoint_at_truncation_point_stays_valid() {
        let mut timeline = timeline_with(&[1]);
        let checkpoint = timeline.checkpoint();
        timeline.record(2);

        timeline.truncate(checkpoint).unwrap();
        timeline.record(5);
        timeline.truncate(checkpoint).unwrap();

        assert!(timeline.seek(checkpoint).is_ok());
    }

    #[test]
    fn test_checkpoint_after_truncation_point_is_invalidated() {
        let mut timeline = timeline_with(&[1]);
        let early = timeline.checkpoint();
        timeline.record(2);
        timeline.record(3);
        let late = timeline.checkpoint();

        timeline.truncate(early).unwrap();
        // Regrow past the stale checkpoint's position.
        timeline.record(7);
        timeline.record(8);
        timeline.record(9);

        let result = timeline.seek(late);
        assert_eq!(
            result,
            Err(GenError::InvalidCheckpoint {
                position: 3,
                len: 4
            })
        );
        assert!(timeline.trace(late).is_err());
        assert!(timeline.truncate(late).is_err());
    }

    #[test]
    fn test_checkpoint_before_truncation_point_stays_valid() {
        let mut timeline = timeline_with(&[1]);
        let early = timeline.checkpoint();
        timeline.record(2);
        timeline.record(3);
        let late = timeline.checkpoint();

        timeline.truncate(late).unwrap();

        assert!(timeline.seek(early).is_ok());
    }

    #[test]
    fn test_reset_invalidates_root_checkpoint() {
        let mut timeline = Timeline::new();
        let root = timeline.checkpoint();

        timeline.reset();

        assert!(matches!(
            timeline.seek(root),
            Err(GenError::InvalidCheckpoint { position: 0, .. })
        ));
        assert!(timeline.seek(timeline.checkpoint()).is_ok());
    }

    #[test]
    fn test_checkpoint_from_other_timeline_is_rejected() {
        let mut first = timeline_with(&[1, 2, 3]);
        let second = timeline_with(&[4, 5, 6]);

        let foreign = second.checkpoint();

        assert!(first.seek(foreign).is_err());
        assert!(first.trace(foreign).is_err());
        assert!(first.seek(Timeline::new().checkpoint()).is_err());
    }

    #[test]
    fn test_clone_shares_prefix_but_not_new_choices() {
        let mut original = timeline_with(&[1, 2]);
        let shared = original.checkpoint();
        let mut copy = original.clone();

        original.record(3);
        copy.record(9);
        let after_original = original.checkpoint();

        assert!(copy.seek(shared).is_ok());
        assert!(copy.trace(after_original).is_err());
        assert!(original.seek(copy.checkpoint()).is_err());
    }

    #[test]
    fn test_trace_excludes_checkpoint_position() {
        let mut timeline = timeline_with(&[0x2a, 0]);
        let checkpoint = timeline.checkpoint();
        timeline.record(u64::MAX);

        let trace = timeline.trace(checkpoint).unwrap();

        assert_eq!(trace.choices, vec![0x2a, 0]);
        assert_eq!(trace.to_string(), "2a,0");
    }

    #[test]
    fn test_trace_display_formats() {
        let empty = ReplayTrace { choices: vec![] };
        assert_eq!(empty.to_string(), "");

        let full = ReplayTrace {
            choices: vec![42, 0, u64::MAX],
        };
        assert_eq!(full.to_string(), "2a,0,ffffffffffffffff");
    }
}
