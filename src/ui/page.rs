//! Page assembly — stitches the section builders into one tall column of
//! rows and records where each section starts (the jump targets).

use ratatui::text::{Line, Span};

use crate::app::state::{ActiveView, AppState, Section};
use crate::ui::theme::Theme;
use crate::ui::{about, booking, contact, gallery, hero, services, testimonials};

/// The rendered page: every row plus per-section start offsets.
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub offsets: [usize; Section::COUNT],
}

impl Page {
    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Build the whole page for the given content width.
pub fn build(state: &AppState, width: usize) -> Page {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut offsets = [0usize; Section::COUNT];

    let focused = |section: Section| state.focus == Some(section);

    for &section in Section::ALL {
        offsets[section as usize] = lines.len();
        let mut section_lines = match section {
            Section::Home => hero::lines(&state.clinic, width),
            Section::About => about::lines(&state.clinic, width),
            Section::Services => services::lines(&state.clinic, width),
            Section::Gallery => gallery::lines(
                &state.clinic.gallery,
                &state.gallery,
                focused(Section::Gallery),
                width,
            ),
            Section::Testimonials => testimonials::lines(
                &state.clinic.testimonials,
                &state.carousel,
                focused(Section::Testimonials),
                state.tick,
                width,
            ),
            Section::Booking => booking::lines(
                &state.booking,
                focused(Section::Booking),
                state.tick,
                width,
            ),
            Section::Contact => contact::lines(&state.clinic, focused(Section::Contact), width),
        };
        lines.append(&mut section_lines);
        lines.push(Line::raw(""));
        lines.push(Line::raw(""));
    }

    Page { lines, offsets }
}

/// The one-row nav bar: section labels with hotkeys, current one highlighted.
pub fn nav_line(state: &AppState) -> Line<'static> {
    let current = state.current_section();
    let mut spans: Vec<Span<'static>> = vec![Span::styled(" ✦ ", Theme::title_style())];

    for &section in Section::ALL {
        let label = format!(" {} [{}] ", section.label(), section.hotkey());
        let style = if section == current {
            Theme::nav_current_style()
        } else if state.focus == Some(section) {
            Theme::focus_marker_style()
        } else {
            Theme::nav_style()
        };
        spans.push(Span::styled(label, style));
    }
    spans.push(Span::styled(" ? help ", Theme::dim_style()));

    Line::from(spans)
}

/// Bottom-bar text: a pending status message, or a contextual key hint.
pub fn status_hint(state: &AppState) -> String {
    if let Some(msg) = &state.status_message {
        return msg.clone();
    }
    match state.active_view {
        ActiveView::Lightbox => "←/→: navigate | 1-5: filter | Esc: close".to_string(),
        ActiveView::Help => String::new(),
        ActiveView::Page => match state.focus {
            Some(Section::Gallery) => {
                "arrows: select | Enter: view | 1-5: filter | Esc: unfocus".to_string()
            }
            Some(Section::Testimonials) => {
                "←/→: browse reviews | 1-9: jump | Esc: unfocus".to_string()
            }
            Some(Section::Booking) => {
                "↑/↓: fields | Enter: next/submit | Esc: unfocus".to_string()
            }
            Some(Section::Contact) => {
                "p: call | m: email | f/i/w: socials | Esc: unfocus".to_string()
            }
            _ => "Tab: focus widget | h/a/s/g/r/b/c: jump | ?: help | q: quit".to_string(),
        },
    }
}
