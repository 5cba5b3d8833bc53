//! Save scheduling policy for field-level edits.
//!
//! # Responsibility
//! - Coalesce repeated edits within a quiet period into one save trigger per
//!   check-in section.
//! - Stay decoupled from persistence: the scheduler only says *when* a
//!   section is due; the caller performs the load-modify-save round trip.
//!
//! # Invariants
//! - Time is passed in by the caller, never read internally, so tests advance
//!   a simulated instant instead of sleeping.
//! - Sections debounce independently; a due section never delays another.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Quiet period an edited section must stay untouched before its save fires.
pub const SAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// The editable sections of a day record, each with its own save trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Control,
    Relationships,
    Family,
    MinimalAction,
}

/// Per-section quiet-period debounce.
///
/// Every edit re-arms that section's timer; a section becomes due once the
/// window elapses with no further edits. There is no atomicity across
/// sections: each due section triggers its own save round trip, so within one
/// section the last write wins.
#[derive(Debug)]
pub struct SaveScheduler {
    window: Duration,
    pending: BTreeMap<Section, Instant>,
}

impl Default for SaveScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveScheduler {
    pub fn new() -> Self {
        Self::with_window(SAVE_DEBOUNCE)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            pending: BTreeMap::new(),
        }
    }

    /// Records an edit at `now`, resetting the section's quiet-period timer.
    pub fn note_edit(&mut self, section: Section, now: Instant) {
        self.pending.insert(section, now);
    }

    /// Drains and returns the sections whose window has elapsed by `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<Section> {
        let window = self.window;
        let due: Vec<Section> = self
            .pending
            .iter()
            .filter(|(_, edited_at)| now.saturating_duration_since(**edited_at) >= window)
            .map(|(section, _)| *section)
            .collect();
        for section in &due {
            self.pending.remove(section);
        }
        due
    }

    /// Returns whether any section is still waiting out its window.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest instant at which a pending section becomes due, if any.
    ///
    /// Lets an embedding sleep until the next poll instead of busy-waiting.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending
            .values()
            .map(|&edited_at| edited_at + self.window)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::{SaveScheduler, Section, SAVE_DEBOUNCE};
    use std::time::{Duration, Instant};

    #[test]
    fn edit_is_not_due_before_the_window() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.note_edit(Section::Control, start);
        assert!(scheduler.take_due(start + Duration::from_millis(499)).is_empty());
        assert!(scheduler.has_pending());
    }

    #[test]
    fn edit_fires_once_after_the_window() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.note_edit(Section::Control, start);
        let due = scheduler.take_due(start + SAVE_DEBOUNCE);
        assert_eq!(due, vec![Section::Control]);

        assert!(scheduler.take_due(start + SAVE_DEBOUNCE * 2).is_empty());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn repeated_edits_reset_the_timer() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.note_edit(Section::Family, start);
        scheduler.note_edit(Section::Family, start + Duration::from_millis(400));

        assert!(scheduler.take_due(start + Duration::from_millis(600)).is_empty());
        let due = scheduler.take_due(start + Duration::from_millis(900));
        assert_eq!(due, vec![Section::Family]);
    }

    #[test]
    fn sections_debounce_independently() {
        let mut scheduler = SaveScheduler::new();
        let start = Instant::now();

        scheduler.note_edit(Section::Control, start);
        scheduler.note_edit(Section::MinimalAction, start + Duration::from_millis(300));

        let due = scheduler.take_due(start + Duration::from_millis(500));
        assert_eq!(due, vec![Section::Control]);
        assert!(scheduler.has_pending());

        let due = scheduler.take_due(start + Duration::from_millis(800));
        assert_eq!(due, vec![Section::MinimalAction]);
    }

    #[test]
    fn next_deadline_tracks_the_earliest_pending_edit() {
        let mut scheduler = SaveScheduler::with_window(Duration::from_millis(100));
        let start = Instant::now();
        assert!(scheduler.next_deadline().is_none());

        scheduler.note_edit(Section::Relationships, start + Duration::from_millis(50));
        scheduler.note_edit(Section::Control, start);
        assert_eq!(
            scheduler.next_deadline(),
            Some(start + Duration::from_millis(100))
        );
    }
}
