//! About section — the dentist's profile and the supporting team.

use ratatui::text::{Line, Span};

use crate::core::clinic::ClinicData;
use crate::ui::text::{truncate, wrap};
use crate::ui::theme::Theme;

pub fn lines(clinic: &ClinicData, width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let dentist = &clinic.dentist;

    out.push(Line::from(Span::styled(
        "── About Us ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    out.push(Line::from(vec![
        Span::styled(dentist.name, Theme::accent_style()),
        Span::styled(
            format!("  ·  {}  ·  {}", dentist.title, dentist.experience),
            Theme::dim_style(),
        ),
    ]));
    out.push(Line::from(Span::styled(
        truncate(dentist.image, width),
        Theme::dim_style(),
    )));
    out.push(Line::raw(""));
    for row in wrap(dentist.bio, width) {
        out.push(Line::from(Span::styled(row, Theme::body_style())));
    }

    out.push(Line::raw(""));
    out.push(Line::from(Span::styled(
        "Certifications",
        Theme::accent_style(),
    )));
    for cert in dentist.certifications {
        out.push(Line::from(Span::styled(
            format!("  • {cert}"),
            Theme::body_style(),
        )));
    }

    out.push(Line::raw(""));
    out.push(Line::from(vec![
        Span::styled("Specialties  ", Theme::accent_style()),
        Span::styled(dentist.specialties.join(" · "), Theme::body_style()),
    ]));

    out.push(Line::raw(""));
    out.push(Line::from(Span::styled("Our Team", Theme::accent_style())));
    for member in &clinic.team {
        out.push(Line::from(vec![
            Span::styled(format!("  {}", member.name), Theme::body_style()),
            Span::styled(format!(" — {}", member.role), Theme::dim_style()),
        ]));
        out.push(Line::from(Span::styled(
            format!("    {}", truncate(member.image, width.saturating_sub(4))),
            Theme::dim_style(),
        )));
        for row in wrap(member.bio, width.saturating_sub(4)) {
            out.push(Line::from(Span::styled(
                format!("    {row}"),
                Theme::dim_style(),
            )));
        }
    }

    out
}
