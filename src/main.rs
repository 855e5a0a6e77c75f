//! A single-screen terminal brochure for a dental clinic.
//!
//! Run the binary to launch the page.  Everything is driven by one static
//! in-memory dataset; there is no backend and nothing is persisted.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::Paragraph,
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::{ActiveView, AppState, Section},
};
use crate::config::AppConfig;
use crate::core::clinic::{self, ClinicData};
use crate::ui::{
    layout::AppLayout, lightbox::LightboxWidget, page, popup::HelpPopup, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Terminal brochure for Bright Smiles Dental")]
struct Cli {
    /// Section to open at.
    #[arg(long, value_enum)]
    section: Option<SectionArg>,

    /// Disable the testimonial autoplay timer.
    #[arg(long)]
    no_autoplay: bool,

    /// Tick period in milliseconds (drives timers and animation).
    #[arg(long, default_value_t = 100)]
    tick_rate: u64,

    /// Write the current configuration file with defaults and exit.
    #[arg(long)]
    write_config: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SectionArg {
    Home,
    About,
    Services,
    Gallery,
    Reviews,
    Booking,
    Contact,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Home => Section::Home,
            SectionArg::About => Section::About,
            SectionArg::Services => Section::Services,
            SectionArg::Gallery => Section::Gallery,
            SectionArg::Reviews => Section::Testimonials,
            SectionArg::Booking => Section::Booking,
            SectionArg::Contact => Section::Contact,
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Log level comes from RUST_LOG; quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute the UI
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load();

    if cli.write_config {
        config.save().context("writing config file")?;
        println!("wrote config for {}", env!("CARGO_PKG_NAME"));
        return Ok(());
    }

    // ── build and validate the dataset ────────────────────────
    let data = ClinicData::sample();
    clinic::validate(&data).context("clinic dataset failed validation")?;

    let mut state = AppState::new(data, config, !cli.no_autoplay, Instant::now());
    state.pending_jump = cli.section.map(Section::from);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(cli.tick_rate.max(10)));

    // ── event loop ────────────────────────────────────────────
    loop {
        // Draw first so the UI stays responsive; section offsets and hit
        // zones for the handlers fall out of the draw.
        terminal.draw(|frame| {
            let area = frame.area();
            state.terminal_area = area;
            let layout = AppLayout::from_area(area);

            frame.render_widget(Paragraph::new(page::nav_line(&state)), layout.nav_area);

            // Page body with a small horizontal gutter.
            let content = Rect::new(
                layout.body_area.x + 2,
                layout.body_area.y,
                layout.body_area.width.saturating_sub(4),
                layout.body_area.height,
            );
            let built = page::build(&state, content.width.saturating_sub(1) as usize);
            state.section_offsets = built.offsets;
            state.page_height = built.height();
            state.viewport_height = content.height as usize;
            state.scroll.clamp(state.max_scroll());

            let top = state.scroll.rendered_top().min(state.max_scroll()) as u16;
            frame.render_widget(Paragraph::new(built.lines).scroll((top, 0)), content);

            let status = Paragraph::new(page::status_hint(&state)).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);

            match state.active_view {
                ActiveView::Lightbox => {
                    let filtered = state.gallery.filtered(&state.clinic.gallery);
                    let widget = LightboxWidget {
                        image: state.gallery.viewer_image(&state.clinic.gallery),
                        index: state.gallery.viewer.unwrap_or(0),
                        total: filtered.len(),
                    };
                    let zones = widget.render_and_hit(area, frame.buffer_mut());
                    state.lightbox_hit_zones = Some(zones);
                }
                ActiveView::Help => frame.render_widget(HelpPopup, area),
                ActiveView::Page => {}
            }
        })?;

        // `--section` jump, applied once the first draw has produced offsets.
        if let Some(section) = state.pending_jump.take() {
            state.scroll_to_section(section);
            state.focus = section.is_focusable().then_some(section);
        }

        match events.recv().await {
            Some(AppEvent::Key(key)) => handler::handle_key(&mut state, key),
            Some(AppEvent::Mouse(mouse)) => handler::handle_mouse(&mut state, mouse),
            Some(AppEvent::Tick) => state.on_tick(Instant::now()),
            None => break, // event reader ended
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
