//! Iced shell for Coffer: the unlock screen, its staged reveal, and the
//! typed-confirmation reset dialog.

pub mod app;
pub mod reset_dialog;
pub mod theme;
pub mod unlock;

pub use app::{run, CofferApp, Message, UiServices};
