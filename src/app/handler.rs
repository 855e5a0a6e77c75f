//! Input handling — maps key/mouse events to state mutations.

use std::time::Instant;

use chrono::Local;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::core::booking::Field;
use crate::core::gallery::CategoryFilter;
use crate::ui::gallery::GRID_COLS;

use super::state::{ActiveView, AppState, Section};

/// Rows moved by one wheel notch or arrow press.
const SCROLL_STEP: isize = 3;

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Page => handle_page_key(state, key),
        ActiveView::Lightbox => handle_lightbox_key(state, key),
        ActiveView::Help => handle_help_key(state, key),
    }
}

// ── Page view ───────────────────────────────────────────────────

fn handle_page_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            cycle_focus(state, 1);
            return;
        }
        KeyCode::BackTab => {
            cycle_focus(state, -1);
            return;
        }
        KeyCode::Esc => {
            state.focus = None;
            state.clear_status();
            return;
        }
        _ => {}
    }

    // The focused section gets first claim on the key.
    let consumed = match state.focus {
        Some(Section::Gallery) => handle_gallery_key(state, key),
        Some(Section::Testimonials) => handle_testimonials_key(state, key),
        Some(Section::Booking) => handle_booking_key(state, key),
        Some(Section::Contact) => handle_contact_key(state, key),
        _ => false,
    };
    if consumed {
        return;
    }

    // Page-level keys.
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char('?') => state.active_view = ActiveView::Help,
        KeyCode::Up => state.scroll.scroll_by(-SCROLL_STEP, state.max_scroll()),
        KeyCode::Down => state.scroll.scroll_by(SCROLL_STEP, state.max_scroll()),
        KeyCode::PageUp => {
            let page = state.viewport_height.saturating_sub(2) as isize;
            state.scroll.scroll_by(-page, state.max_scroll());
        }
        KeyCode::PageDown => {
            let page = state.viewport_height.saturating_sub(2) as isize;
            state.scroll.scroll_by(page, state.max_scroll());
        }
        KeyCode::Home => state.scroll.scroll_by(isize::MIN / 2, state.max_scroll()),
        KeyCode::End => state.scroll.scroll_by(isize::MAX / 2, state.max_scroll()),
        KeyCode::Char(ch) => {
            if let Some(&section) = Section::ALL.iter().find(|s| s.hotkey() == ch) {
                jump_to(state, section);
            }
        }
        _ => {}
    }
}

/// Scroll to a section; focusable sections also take focus.
fn jump_to(state: &mut AppState, section: Section) {
    state.scroll_to_section(section);
    state.focus = section.is_focusable().then_some(section);
    tracing::debug!("jump_to: {:?}", section);
}

/// Move keyboard focus to the next/previous interactive section and scroll
/// it into view.
fn cycle_focus(state: &mut AppState, dir: isize) {
    let order = Section::FOCUSABLE;
    let next = match state.focus {
        None => {
            if dir > 0 {
                0
            } else {
                order.len() - 1
            }
        }
        Some(current) => {
            let pos = order.iter().position(|&s| s == current).unwrap_or(0);
            (pos as isize + dir).rem_euclid(order.len() as isize) as usize
        }
    };
    let section = order[next];
    state.focus = Some(section);
    state.scroll_to_section(section);
}

// ── Gallery section ─────────────────────────────────────────────

fn handle_gallery_key(state: &mut AppState, key: KeyEvent) -> bool {
    let images = &state.clinic.gallery;
    match key.code {
        KeyCode::Left => {
            state.gallery.move_cursor(images, -1);
            true
        }
        KeyCode::Right => {
            state.gallery.move_cursor(images, 1);
            true
        }
        KeyCode::Up => {
            state.gallery.move_cursor(images, -(GRID_COLS as isize));
            true
        }
        KeyCode::Down => {
            state.gallery.move_cursor(images, GRID_COLS as isize);
            true
        }
        KeyCode::Enter => {
            state.gallery.open_at_cursor(images);
            if state.gallery.viewer.is_some() {
                state.active_view = ActiveView::Lightbox;
            }
            true
        }
        KeyCode::Char(ch @ '1'..='5') => {
            let idx = ch as usize - '1' as usize;
            state.gallery.select_filter(images, CategoryFilter::ALL[idx]);
            true
        }
        _ => false,
    }
}

// ── Testimonials section ────────────────────────────────────────

fn handle_testimonials_key(state: &mut AppState, key: KeyEvent) -> bool {
    let now = Instant::now();
    match key.code {
        KeyCode::Left => {
            state.carousel.prev(now);
            true
        }
        KeyCode::Right => {
            state.carousel.next(now);
            true
        }
        KeyCode::Char(ch @ '1'..='9') => {
            let target = ch as usize - '1' as usize;
            if target < state.carousel.len() {
                state.carousel.go_to(target, now);
            }
            true
        }
        _ => false,
    }
}

// ── Booking section ─────────────────────────────────────────────

fn handle_booking_key(state: &mut AppState, key: KeyEvent) -> bool {
    let form = &mut state.booking;
    match key.code {
        KeyCode::Up => {
            form.focus_prev();
            true
        }
        KeyCode::Down => {
            form.focus_next();
            true
        }
        KeyCode::Left if !form.focus.is_text() => {
            form.cycle_option(-1);
            true
        }
        KeyCode::Right if !form.focus.is_text() => {
            form.cycle_option(1);
            true
        }
        KeyCode::Enter => {
            if form.focus == Field::Submit {
                let now = Instant::now();
                let today = Local::now().date_naive();
                if let Some(request) = form.submit(now, today) {
                    // No backend — the request is logged and the simulated
                    // call runs off the tick deadlines.
                    tracing::info!(?request, "appointment request submitted");
                    state.clear_status();
                } else {
                    let message = form.error.as_ref().map(|err| err.to_string());
                    if let Some(message) = message {
                        state.flash_status(message, now);
                    }
                }
            } else {
                form.focus_next();
            }
            true
        }
        KeyCode::Backspace => {
            form.backspace();
            true
        }
        KeyCode::Char(ch) if form.focus.is_text() => {
            form.input(ch);
            true
        }
        _ => false,
    }
}

// ── Contact section ─────────────────────────────────────────────

fn handle_contact_key(state: &mut AppState, key: KeyEvent) -> bool {
    let contact = state.clinic.contact;
    match key.code {
        KeyCode::Char('p') => {
            let digits: String = contact
                .phone
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '+')
                .collect();
            open_external(state, &format!("tel:{digits}"), "phone");
            true
        }
        KeyCode::Char('m') => {
            let url = format!("mailto:{}", contact.email);
            open_external(state, &url, "email");
            true
        }
        KeyCode::Char('f') => {
            if let Some(url) = contact.facebook {
                open_external(state, url, "Facebook");
            }
            true
        }
        KeyCode::Char('i') => {
            if let Some(url) = contact.instagram {
                open_external(state, url, "Instagram");
            }
            true
        }
        KeyCode::Char('w') => {
            if let Some(url) = contact.whatsapp {
                open_external(state, url, "WhatsApp");
            }
            true
        }
        _ => false,
    }
}

/// Fire-and-forget launch of an external handler (`tel:`, `mailto:`, https).
fn open_external(state: &mut AppState, url: &str, label: &str) {
    let now = Instant::now();
    match open::that_detached(url) {
        Ok(()) => {
            state.flash_status(format!("Opening {label}…"), now);
            tracing::debug!(url, "opened external link");
        }
        Err(err) => {
            state.flash_status(format!("Could not open {label}"), now);
            tracing::warn!(url, %err, "failed to open external link");
        }
    }
}

// ── Lightbox overlay ────────────────────────────────────────────

fn handle_lightbox_key(state: &mut AppState, key: KeyEvent) {
    let images = &state.clinic.gallery;
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('x') | KeyCode::Enter => {
            close_lightbox(state);
        }
        KeyCode::Left | KeyCode::Char('h') => state.gallery.prev(images),
        KeyCode::Right | KeyCode::Char('l') => state.gallery.next(images),
        KeyCode::Char(ch @ '1'..='5') => {
            // Category switch while the viewer is open: the viewer follows
            // the shown image by id, or closes when it left the subset.
            let idx = ch as usize - '1' as usize;
            state.gallery.select_filter(images, CategoryFilter::ALL[idx]);
            if state.gallery.viewer.is_none() {
                close_lightbox(state);
            }
        }
        _ => {}
    }
}

fn close_lightbox(state: &mut AppState) {
    state.gallery.close();
    state.active_view = ActiveView::Page;
    state.lightbox_hit_zones = None;
}

// ── Help overlay ────────────────────────────────────────────────

fn handle_help_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            state.active_view = ActiveView::Page;
        }
        _ => {}
    }
}

// ── Mouse ───────────────────────────────────────────────────────

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view == ActiveView::Lightbox {
        handle_lightbox_mouse(state, mouse);
        return;
    }
    if state.active_view != ActiveView::Page {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => state.scroll.scroll_by(-SCROLL_STEP, state.max_scroll()),
        MouseEventKind::ScrollDown => state.scroll.scroll_by(SCROLL_STEP, state.max_scroll()),
        _ => {}
    }
}

fn handle_lightbox_mouse(state: &mut AppState, mouse: MouseEvent) {
    let images = &state.clinic.gallery;
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(zones) = state.lightbox_hit_zones {
                if point_in_rect(zones.close_rect, mouse.column, mouse.row) {
                    close_lightbox(state);
                } else if point_in_rect(zones.prev_rect, mouse.column, mouse.row) {
                    state.gallery.prev(images);
                } else if point_in_rect(zones.next_rect, mouse.column, mouse.row) {
                    state.gallery.next(images);
                }
            }
        }
        MouseEventKind::ScrollUp => state.gallery.prev(images),
        MouseEventKind::ScrollDown => state.gallery.next(images),
        _ => {}
    }
}

fn point_in_rect(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
