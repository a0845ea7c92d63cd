//! Unlock gate state machine.
//!
//! The gate decides when the credential verifier runs and is the only
//! writer of the process-wide [`LockStore`]. The UI drives it with
//! [`UnlockGate::submit`] / [`UnlockGate::resolve`] and renders whatever
//! phase and field error it reports.

use crate::lock::{LockState, LockStore};

/// Phase of the unlock flow.
///
/// Failure is not a resting phase: a denied attempt annotates the field
/// error and returns to `Locked`, ready for the next submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePhase {
    Locked,
    Verifying,
    Unlocked,
}

/// Error shown on the credential input, identified by message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyCredential,
    WrongPassword,
}

impl FieldError {
    /// Key resolved through [`crate::locale::message`].
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::EmptyCredential => "form__field_is_required",
            FieldError::WrongPassword => "msg__wrong_password",
        }
    }
}

/// Result of an async credential verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyOutcome {
    Granted,
    Denied,
    /// The verifier itself failed (missing record, I/O). Presented to the
    /// user exactly like `Denied`; the reason only reaches the log.
    Unavailable(String),
}

/// What a call to [`UnlockGate::submit`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Spawn exactly one verification task for this attempt.
    Start,
    /// Rejected locally; the verifier must not be called.
    Rejected(FieldError),
    /// A verification is already in flight, or the gate is already
    /// unlocked. The input is dropped.
    Ignored,
}

#[derive(Debug)]
pub struct UnlockGate {
    phase: GatePhase,
    error: Option<FieldError>,
    store: LockStore,
}

impl UnlockGate {
    /// Build a gate owning the given store. Ownership is what enforces
    /// the single-writer rule: nothing else can reach `unlock()`.
    pub fn new(store: LockStore) -> Self {
        Self {
            phase: GatePhase::Locked,
            error: None,
            store,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    pub fn lock_state(&self) -> LockState {
        self.store.state()
    }

    /// Subscribe a reader to lock-state transitions. The store itself is
    /// never handed out, so no subscriber can write it.
    pub fn subscribe(&self) -> tokio::sync::watch::Receiver<LockState> {
        self.store.subscribe()
    }

    /// Handle a submission of the credential input.
    ///
    /// Empty or whitespace-only input is rejected here and never reaches
    /// the verifier. While `Verifying`, further submissions are ignored so
    /// at most one verification is ever in flight.
    pub fn submit(&mut self, input: &str) -> Submit {
        match self.phase {
            GatePhase::Verifying | GatePhase::Unlocked => Submit::Ignored,
            GatePhase::Locked => {
                if input.trim().is_empty() {
                    self.error = Some(FieldError::EmptyCredential);
                    Submit::Rejected(FieldError::EmptyCredential)
                } else {
                    self.phase = GatePhase::Verifying;
                    self.error = None;
                    Submit::Start
                }
            }
        }
    }

    /// Resolve the in-flight verification.
    ///
    /// Outcomes arriving in any other phase (e.g. after a biometric unlock
    /// already won) are dropped.
    pub fn resolve(&mut self, outcome: VerifyOutcome) {
        if self.phase != GatePhase::Verifying {
            return;
        }
        match outcome {
            VerifyOutcome::Granted => self.grant(),
            VerifyOutcome::Denied => {
                self.phase = GatePhase::Locked;
                self.error = Some(FieldError::WrongPassword);
            }
            VerifyOutcome::Unavailable(reason) => {
                tracing::warn!("credential verification unavailable: {reason}");
                self.phase = GatePhase::Locked;
                self.error = Some(FieldError::WrongPassword);
            }
        }
    }

    /// Unlock through the local-authentication path.
    ///
    /// Valid from `Locked` and from `Verifying` (a biometric success wins
    /// over a pending password check); a no-op once unlocked.
    pub fn biometric_unlocked(&mut self) {
        if self.phase != GatePhase::Unlocked {
            self.grant();
        }
    }

    fn grant(&mut self) {
        self.phase = GatePhase::Unlocked;
        self.error = None;
        if self.store.unlock() {
            tracing::info!("unlock gate opened");
        }
    }
}
