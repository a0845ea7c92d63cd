//! Typed-confirmation model for the irreversible app reset.
//!
//! The destructive action arms only while the dialog's input spells the
//! confirmation token, and at most one reset call is ever in flight. A
//! result that lands after the user dismissed the dialog is bookkept but
//! never surfaced.

/// Token the user must type to arm the reset.
pub const RESET_TOKEN: &str = "RESET";

/// Whether the typed text arms the destructive action. Case-insensitive,
/// surrounding whitespace tolerated, nothing else.
pub fn arms_reset(input: &str) -> bool {
    input.trim().to_uppercase() == RESET_TOKEN
}

/// State of the reset-confirmation dialog. Lives as long as the unlock
/// screen; the typed text only as long as the dialog is open.
#[derive(Debug, Default)]
pub struct ResetConfirmation {
    typed: String,
    visible: bool,
    in_flight: bool,
    attempt: u64,
}

impl ResetConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn is_armed(&self) -> bool {
        arms_reset(&self.typed)
    }

    /// Whether the destructive control is pressable right now.
    pub fn confirm_enabled(&self) -> bool {
        self.visible && self.is_armed() && !self.in_flight
    }

    /// Show the dialog with a blank input. Arming never survives from a
    /// previous opening.
    pub fn open(&mut self) {
        self.visible = true;
        self.typed.clear();
    }

    /// Dismiss the dialog and discard the typed text. A reset call still
    /// in flight keeps running; its result will no longer be surfaced.
    pub fn close(&mut self) {
        self.visible = false;
        self.typed.clear();
        self.attempt += 1;
    }

    /// Record a keystroke in the confirmation input.
    pub fn set_typed(&mut self, text: String) {
        if self.visible {
            self.typed = text;
        }
    }

    /// Begin the reset call, if armed and nothing is already in flight.
    /// Returns the attempt id to stamp onto the async result.
    pub fn begin(&mut self) -> Option<u64> {
        if !self.confirm_enabled() {
            return None;
        }
        self.in_flight = true;
        self.attempt += 1;
        Some(self.attempt)
    }

    /// Accept the reset call's completion.
    ///
    /// Always clears the in-flight guard (only one call can be out).
    /// Returns `true` when the result belongs to the live flow and should
    /// be surfaced; a result from a dismissed dialog returns `false`.
    /// Dismissing on success is the caller's move, so that a failure can
    /// keep the dialog open for a retry.
    pub fn acknowledge(&mut self, attempt: u64) -> bool {
        self.in_flight = false;
        attempt == self.attempt
    }
}
