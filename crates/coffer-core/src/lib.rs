//! Core domain state for Coffer: the process-wide lock state, the unlock
//! gate state machine, reset confirmation, reveal sequencing, message keys,
//! configuration, and tracing lifecycle.

pub mod config;
pub mod gate;
pub mod lifecycle;
pub mod locale;
pub mod lock;
pub mod reset;
pub mod reveal;

pub use config::AppConfig;
pub use gate::{FieldError, GatePhase, Submit, UnlockGate, VerifyOutcome};
pub use lock::{LockState, LockStore};
