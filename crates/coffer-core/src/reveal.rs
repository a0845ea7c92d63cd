//! Staged reveal of the unlock screen.
//!
//! The screen opens on the brand mark alone, then slides the title aside,
//! then fades the credential form in. The sequencer only tracks the
//! presentational phase; the form underneath is live the whole time, so
//! removing the sequence cannot change unlock behavior.

/// Presentation phase, strictly monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    /// Brand mark and title centered; form at zero alpha.
    Initial,
    /// Title moving to its resting position.
    TitleRevealed,
    /// Form fully visible; the credential input receives focus.
    FormRevealed,
}

/// Advances [`RevealPhase`] from epoch-stamped timer ticks.
///
/// Every scheduled tick carries the epoch current at scheduling time; a
/// tick whose epoch no longer matches belongs to a torn-down flow and is
/// dropped. [`cancel`](RevealSequencer::cancel) bumps the epoch, which is
/// all cancellation needs.
#[derive(Debug)]
pub struct RevealSequencer {
    phase: RevealPhase,
    epoch: u64,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self {
            phase: RevealPhase::Initial,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Epoch to stamp onto the next scheduled tick.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Apply a timer tick.
    ///
    /// Returns the phase entered, or `None` when the tick was stale or the
    /// sequence already completed. Phases never regress, so each phase is
    /// returned at most once per epoch and "entered `FormRevealed`" is a
    /// safe one-shot trigger for focusing the input.
    pub fn advance(&mut self, epoch: u64) -> Option<RevealPhase> {
        if epoch != self.epoch {
            return None;
        }
        let next = match self.phase {
            RevealPhase::Initial => RevealPhase::TitleRevealed,
            RevealPhase::TitleRevealed => RevealPhase::FormRevealed,
            RevealPhase::FormRevealed => return None,
        };
        self.phase = next;
        Some(next)
    }

    /// Invalidate every tick scheduled so far.
    pub fn cancel(&mut self) {
        self.epoch += 1;
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new()
    }
}
