//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer turns the clinic dataset and widget states into rows of text.
//! No I/O happens here; section builders are pure functions over state.

pub mod about;
pub mod booking;
pub mod contact;
pub mod gallery;
pub mod hero;
pub mod layout;
pub mod lightbox;
pub mod page;
pub mod popup;
pub mod scroll;
pub mod services;
pub mod spinner;
pub mod testimonials;
pub mod text;
pub mod theme;
