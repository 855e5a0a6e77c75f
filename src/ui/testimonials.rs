//! Testimonials section — the carousel card, dot indicators, and autoplay
//! status.

use chrono::NaiveDate;
use ratatui::text::{Line, Span};

use crate::core::carousel::{Carousel, Mode};
use crate::core::clinic::Testimonial;
use crate::ui::spinner;
use crate::ui::text::{truncate, wrap};
use crate::ui::theme::Theme;

pub fn lines(
    testimonials: &[Testimonial],
    carousel: &Carousel,
    focused: bool,
    tick: u64,
    width: usize,
) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "── Patient Reviews ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    if carousel.is_empty() || testimonials.is_empty() {
        out.push(Line::from(Span::styled(
            "No reviews yet.",
            Theme::dim_style(),
        )));
        return out;
    }

    // Aggregate line, derived from the data rather than hard-coded.
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
    let average = f64::from(total) / testimonials.len() as f64;
    out.push(Line::from(vec![
        Span::styled(format!("★ {average:.1} average"), Theme::star_style()),
        Span::styled(
            format!("  ·  {} patient reviews", testimonials.len()),
            Theme::dim_style(),
        ),
    ]));
    out.push(Line::raw(""));

    let current = &testimonials[carousel.index().min(testimonials.len() - 1)];
    out.push(Line::from(Span::styled(
        stars(current.rating),
        Theme::star_style(),
    )));
    for row in wrap(&format!("“{}”", current.review), width.saturating_sub(2)) {
        out.push(Line::from(Span::styled(
            format!("  {row}"),
            Theme::body_style(),
        )));
    }

    let mut byline = vec![Span::styled(
        format!("— {}", current.name),
        Theme::accent_style(),
    )];
    if let Some(treatment) = current.treatment {
        byline.push(Span::styled(format!(", {treatment}"), Theme::dim_style()));
    }
    byline.push(Span::styled(
        format!(" · {}", display_date(current.date)),
        Theme::dim_style(),
    ));
    out.push(Line::from(byline));
    if let Some(image) = current.image {
        out.push(Line::from(Span::styled(
            truncate(image, width),
            Theme::dim_style(),
        )));
    }
    out.push(Line::raw(""));

    // Dot indicators plus the autoplay state.
    let mut dots = String::new();
    for i in 0..carousel.len() {
        dots.push(if i == carousel.index() { '●' } else { '○' });
        dots.push(' ');
    }
    let mode_span = match carousel.mode() {
        Mode::Auto { .. } => Span::styled(
            format!("  {} auto-advancing", spinner::frame(tick)),
            Theme::dim_style(),
        ),
        Mode::Paused { .. } => Span::styled("  ⏸ paused — resuming soon", Theme::dim_style()),
        Mode::Manual => Span::styled("  manual", Theme::dim_style()),
        Mode::Disabled => Span::raw(""),
    };
    out.push(Line::from(vec![
        Span::styled(dots, Theme::accent_style()),
        mode_span,
    ]));

    let hint = if focused {
        "←/→ browse · 1-9 jump (pauses autoplay)"
    } else {
        "press r (or Tab) to browse reviews"
    };
    out.push(Line::from(Span::styled(hint, Theme::dim_style())));

    out
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Display form of an ISO date; falls back to the raw string if unparseable
/// (validation should have caught that at startup).
fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}
