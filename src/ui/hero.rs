//! Hero section — clinic name, tagline, and the two calls to action.

use ratatui::text::{Line, Span};

use crate::core::clinic::ClinicData;
use crate::ui::text::wrap;
use crate::ui::theme::Theme;

pub fn lines(clinic: &ClinicData, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        format!("✦ {}", clinic.name),
        Theme::hero_title_style(),
    )));
    out.push(Line::from(Span::styled(
        clinic.tagline,
        Theme::tagline_style(),
    )));
    out.push(Line::raw(""));

    for row in wrap(clinic.description, width) {
        out.push(Line::from(Span::styled(row, Theme::body_style())));
    }

    out.push(Line::raw(""));
    out.push(Line::from(vec![
        Span::styled("[b]", Theme::accent_style()),
        Span::styled(" Book an appointment    ", Theme::body_style()),
        Span::styled("[s]", Theme::accent_style()),
        Span::styled(" Browse our services", Theme::body_style()),
    ]));

    out
}
