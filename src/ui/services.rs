//! Services section — one card per treatment.

use ratatui::text::{Line, Span};

use crate::core::clinic::ClinicData;
use crate::ui::text::wrap;
use crate::ui::theme::Theme;

pub fn lines(clinic: &ClinicData, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "── Our Services ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    for service in &clinic.services {
        let mut header = vec![Span::styled(
            format!("▪ {}", service.title),
            Theme::accent_style(),
        )];
        if let Some(price) = service.price {
            header.push(Span::styled(format!("  ({price})"), Theme::price_style()));
        }
        out.push(Line::from(header));

        for row in wrap(service.description, width.saturating_sub(2)) {
            out.push(Line::from(Span::styled(
                format!("  {row}"),
                Theme::body_style(),
            )));
        }
        out.push(Line::from(Span::styled(
            format!("  {}", service.features.join(" · ")),
            Theme::dim_style(),
        )));
        out.push(Line::raw(""));
    }

    out
}
