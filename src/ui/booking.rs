//! Booking section — the appointment-request form.

use ratatui::text::{Line, Span};

use crate::core::booking::{BookingForm, Field, Phase, TIME_SLOTS};
use crate::core::clinic::SERVICES_LIST;
use crate::ui::spinner;
use crate::ui::theme::Theme;

pub fn lines(form: &BookingForm, focused: bool, tick: u64, _width: usize) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    out.push(Line::from(Span::styled(
        "── Book an Appointment ──",
        Theme::section_title_style(),
    )));
    out.push(Line::raw(""));

    match form.phase {
        Phase::Submitted { .. } => {
            out.push(Line::from(Span::styled(
                "✓ Appointment request sent!",
                Theme::success_style(),
            )));
            out.push(Line::from(Span::styled(
                "We'll confirm your visit by phone or email shortly.",
                Theme::body_style(),
            )));
            out.push(Line::from(Span::styled(
                "The form will clear in a few seconds.",
                Theme::dim_style(),
            )));
            return out;
        }
        Phase::Submitting { .. } => {
            for field in Field::ALL.iter().filter(|&&f| f != Field::Submit) {
                out.push(field_row(form, *field, false));
            }
            out.push(Line::raw(""));
            out.push(Line::from(Span::styled(
                format!("{} Submitting…", spinner::frame(tick)),
                Theme::accent_style(),
            )));
            return out;
        }
        Phase::Editing => {}
    }

    for field in Field::ALL.iter().filter(|&&f| f != Field::Submit) {
        let active = focused && form.focus == *field;
        out.push(field_row(form, *field, active));
    }

    out.push(Line::raw(""));
    let submit_active = focused && form.focus == Field::Submit;
    let submit_style = if submit_active {
        Theme::selected_style()
    } else {
        Theme::accent_style()
    };
    let marker = if submit_active { "▸ " } else { "  " };
    out.push(Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled("[ Book Appointment ]", submit_style),
    ]));

    if let Some(err) = &form.error {
        out.push(Line::from(Span::styled(
            format!("  ✗ {err}"),
            Theme::error_style(),
        )));
    }

    let hint = if focused {
        "↑/↓ fields · type to edit · ←/→ pick options · Enter on button submits"
    } else {
        "press b (or Tab) to fill in the form"
    };
    out.push(Line::from(Span::styled(hint, Theme::dim_style())));

    out
}

fn field_row(form: &BookingForm, field: Field, active: bool) -> Line<'static> {
    let marker = if active { "▸ " } else { "  " };
    let label = format!("{:<16}", format!("{}:", field.label()));

    let value: String = match field {
        Field::Name => text_value(&form.name, "", active),
        Field::Email => text_value(&form.email, "you@example.com", active),
        Field::Phone => text_value(&form.phone, "+1 …", active),
        Field::Date => text_value(&form.date, "YYYY-MM-DD", active),
        Field::Message => text_value(&form.message, "(optional)", active),
        Field::Service => pick_value(form.service.map(|i| SERVICES_LIST[i]), active),
        Field::Time => pick_value(form.time_slot.map(|i| TIME_SLOTS[i]), active),
        Field::Submit => String::new(),
    };

    let value_style = if active {
        Theme::accent_style()
    } else if value_is_placeholder(form, field) {
        Theme::dim_style()
    } else {
        Theme::body_style()
    };

    Line::from(vec![
        Span::styled(marker.to_string(), Theme::focus_marker_style()),
        Span::styled(label, Theme::body_style()),
        Span::styled(value, value_style),
    ])
}

fn text_value(content: &str, placeholder: &str, active: bool) -> String {
    if content.is_empty() && !active {
        placeholder.to_string()
    } else if active {
        format!("{content}▏")
    } else {
        content.to_string()
    }
}

fn pick_value(selected: Option<&'static str>, active: bool) -> String {
    match (selected, active) {
        (Some(v), true) => format!("◂ {v} ▸"),
        (Some(v), false) => v.to_string(),
        (None, true) => "◂ choose… ▸".to_string(),
        (None, false) => "(not chosen)".to_string(),
    }
}

fn value_is_placeholder(form: &BookingForm, field: Field) -> bool {
    match field {
        Field::Name => form.name.is_empty(),
        Field::Email => form.email.is_empty(),
        Field::Phone => form.phone.is_empty(),
        Field::Date => form.date.is_empty(),
        Field::Message => form.message.is_empty(),
        Field::Service => form.service.is_none(),
        Field::Time => form.time_slot.is_none(),
        Field::Submit => false,
    }
}
