//! Centralized user-facing text for studentdb.
//!
//! Every status line, prompt and console notice is a [`Message`] variant, so
//! the wording lives in one place (`display.rs`) and call sites stay typed.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
