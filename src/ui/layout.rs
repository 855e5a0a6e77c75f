//! Layout helpers — split the terminal area into regions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Primary screen layout: nav bar, scrollable page body, status bar.
pub struct AppLayout {
    pub nav_area: Rect,
    pub body_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nav bar
                Constraint::Min(3),    // page body (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            nav_area: chunks[0],
            body_area: chunks[1],
            status_area: chunks[2],
        }
    }
}
