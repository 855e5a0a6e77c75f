//! Core domain logic – clinic dataset, gallery filtering, carousel state
//! machine, and the appointment form.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Timing-sensitive widgets take `Instant` values from the caller so every
//! transition is testable without real timers.

pub mod booking;
pub mod carousel;
pub mod clinic;
pub mod gallery;
