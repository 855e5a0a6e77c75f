//! Contact section and footer — address, hours, and external links.

use chrono::{Datelike, Local};
use ratatui::text::{Line, Span};

use crate::core::clinic::ClinicData;
use crate::ui::theme::Theme;

pub fn lines(clinic: &ClinicData, focused: bool, _width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    let contact = &clinic.contact;

    out.push(Line::from(Span::styled(
        "── Visit Us ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    let addr = contact.address;
    out.push(Line::from(Span::styled(
        format!(
            "{}, {}, {} {}, {}",
            addr.street, addr.city, addr.state, addr.zip, addr.country
        ),
        Theme::body_style(),
    )));
    out.push(Line::raw(""));

    out.push(Line::from(vec![
        Span::styled("[p]", Theme::accent_style()),
        Span::styled(format!(" Call {}    ", contact.phone), Theme::body_style()),
        Span::styled("[m]", Theme::accent_style()),
        Span::styled(format!(" Email {}", contact.email), Theme::body_style()),
    ]));

    let mut socials: Vec<Span<'static>> = Vec::new();
    if contact.facebook.is_some() {
        socials.push(Span::styled("[f]", Theme::accent_style()));
        socials.push(Span::styled(" Facebook   ", Theme::body_style()));
    }
    if contact.instagram.is_some() {
        socials.push(Span::styled("[i]", Theme::accent_style()));
        socials.push(Span::styled(" Instagram   ", Theme::body_style()));
    }
    if contact.whatsapp.is_some() {
        socials.push(Span::styled("[w]", Theme::accent_style()));
        socials.push(Span::styled(" WhatsApp", Theme::body_style()));
    }
    if !socials.is_empty() {
        out.push(Line::from(socials));
    }
    out.push(Line::raw(""));

    out.push(Line::from(Span::styled(
        "Opening Hours",
        Theme::accent_style(),
    )));
    for &(day, hours) in contact.hours {
        let style = if hours == "Closed" {
            Theme::dim_style()
        } else {
            Theme::body_style()
        };
        out.push(Line::from(Span::styled(
            format!("  {day:<10} {hours}"),
            style,
        )));
    }
    out.push(Line::raw(""));

    if !focused {
        out.push(Line::from(Span::styled(
            "press c (or Tab) here to use the link keys",
            Theme::dim_style(),
        )));
        out.push(Line::raw(""));
    }

    // Footer.
    out.push(Line::from(Span::styled(
        format!(
            "© {} {} — caring for smiles, one visit at a time.",
            Local::now().year(),
            clinic.name
        ),
        Theme::dim_style(),
    )));

    out
}
