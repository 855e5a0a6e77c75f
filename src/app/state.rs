//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! Each widget owns its state exclusively; nothing is shared across sections.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::{
    booking::BookingForm,
    carousel::Carousel,
    clinic::ClinicData,
    gallery::GalleryState,
};
use crate::ui::{lightbox::LightboxHitZones, scroll::PageScroll};

/// How long a status-bar message stays before it clears itself.
const STATUS_TTL: Duration = Duration::from_secs(4);

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    Lightbox,
    Help,
}

/// The page sections in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Services,
    Gallery,
    Testimonials,
    Booking,
    Contact,
}

impl Section {
    pub const COUNT: usize = 7;

    pub const ALL: &[Section] = &[
        Section::Home,
        Section::About,
        Section::Services,
        Section::Gallery,
        Section::Testimonials,
        Section::Booking,
        Section::Contact,
    ];

    /// Sections that take keyboard focus via Tab.
    pub const FOCUSABLE: &[Section] = &[
        Section::Gallery,
        Section::Testimonials,
        Section::Booking,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Services => "Services",
            Section::Gallery => "Gallery",
            Section::Testimonials => "Reviews",
            Section::Booking => "Booking",
            Section::Contact => "Contact",
        }
    }

    /// Page-level jump key shown in the nav bar.
    pub fn hotkey(self) -> char {
        match self {
            Section::Home => 'h',
            Section::About => 'a',
            Section::Services => 's',
            Section::Gallery => 'g',
            Section::Testimonials => 'r',
            Section::Booking => 'b',
            Section::Contact => 'c',
        }
    }

    pub fn is_focusable(self) -> bool {
        Section::FOCUSABLE.contains(&self)
    }
}

/// Top-level application state.
pub struct AppState {
    /// The immutable dataset behind every section.
    pub clinic: ClinicData,
    /// Timing / motion settings.
    pub config: AppConfig,
    /// Gallery filter + lightbox viewer state.
    pub gallery: GalleryState,
    /// Testimonial carousel state machine.
    pub carousel: Carousel,
    /// Appointment-request form state.
    pub booking: BookingForm,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// The interactive section currently consuming keys, if any.
    pub focus: Option<Section>,
    /// Vertical page scroll with eased section jumps.
    pub scroll: PageScroll,
    /// Row offset of each section within the rendered page.  Updated on
    /// every draw; jump targets come from here.
    pub section_offsets: [usize; Section::COUNT],
    /// Total page height in rows (from the last draw).
    pub page_height: usize,
    /// Body viewport height in rows (from the last draw).
    pub viewport_height: usize,
    /// Full terminal area (for mouse hit-testing).
    pub terminal_area: Rect,
    /// Lightbox button zones from the last draw, for mouse hit-testing.
    pub lightbox_hit_zones: Option<LightboxHitZones>,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Deadline after which the status message clears itself.
    status_clear_at: Option<Instant>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Monotonic frame counter (drives small text animations).
    pub tick: u64,
    /// Section to jump to once offsets are known (from `--section`).
    pub pending_jump: Option<Section>,
}

impl AppState {
    pub fn new(clinic: ClinicData, config: AppConfig, autoplay: bool, now: Instant) -> Self {
        let carousel = Carousel::new(
            clinic.testimonials.len(),
            config.autoplay(),
            config.cooldown(),
            autoplay,
            now,
        );
        let booking = BookingForm::new(config.submit_delay(), config.success_display());
        let scroll = PageScroll::new(config.smooth_scroll);
        Self {
            clinic,
            config,
            gallery: GalleryState::default(),
            carousel,
            booking,
            active_view: ActiveView::default(),
            focus: None,
            scroll,
            section_offsets: [0; Section::COUNT],
            page_height: 0,
            viewport_height: 0,
            terminal_area: Rect::default(),
            lightbox_hit_zones: None,
            status_message: None,
            status_clear_at: None,
            should_quit: false,
            tick: 0,
            pending_jump: None,
        }
    }

    /// Advance every widget's deadlines by one tick.
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);
        self.carousel.tick(now);
        self.booking.tick(now);
        self.scroll.tick();
        self.scroll.clamp(self.max_scroll());
        if self.status_clear_at.is_some_and(|at| now >= at) {
            self.clear_status();
        }
    }

    /// Show `message` in the status bar; it clears itself after a few
    /// seconds.
    pub fn flash_status(&mut self, message: String, now: Instant) {
        self.status_message = Some(message);
        self.status_clear_at = Some(now + STATUS_TTL);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_clear_at = None;
    }

    /// Largest valid scroll-top row.
    pub fn max_scroll(&self) -> usize {
        self.page_height.saturating_sub(self.viewport_height)
    }

    /// Scroll the page so `section` starts at the top of the viewport.
    pub fn scroll_to_section(&mut self, section: Section) {
        let row = self.section_offsets[section as usize].min(self.max_scroll());
        self.scroll.jump_to(row);
    }

    /// The section under the top of the viewport (for nav-bar highlighting).
    pub fn current_section(&self) -> Section {
        let top = self.scroll.top();
        let mut current = Section::Home;
        for &section in Section::ALL {
            if self.section_offsets[section as usize] <= top {
                current = section;
            }
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(now: Instant) -> AppState {
        AppState::new(ClinicData::sample(), AppConfig::default(), false, now)
    }

    #[test]
    fn status_message_expires_after_ttl() {
        let t0 = Instant::now();
        let mut state = state(t0);

        state.flash_status("Opening phone…".to_string(), t0);
        state.on_tick(t0 + Duration::from_secs(1));
        assert_eq!(state.status_message.as_deref(), Some("Opening phone…"));

        state.on_tick(t0 + STATUS_TTL);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn newer_flash_restarts_the_clock() {
        let t0 = Instant::now();
        let mut state = state(t0);

        state.flash_status("first".to_string(), t0);
        let t1 = t0 + Duration::from_secs(3);
        state.flash_status("second".to_string(), t1);

        state.on_tick(t0 + STATUS_TTL);
        assert_eq!(state.status_message.as_deref(), Some("second"));
        state.on_tick(t1 + STATUS_TTL);
        assert_eq!(state.status_message, None);
    }
}
