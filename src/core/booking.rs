//! Appointment-request form.
//!
//! Field-by-field editing with a focus cursor, validation on submit, then a
//! fixed-delay simulated call (there is no real backend) followed by a
//! success state that resets the form after a fixed display duration.  Both
//! delays are explicit deadlines driven by [`BookingForm::tick`].

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use thiserror::Error;

use crate::core::clinic::SERVICES_LIST;

/// Selectable appointment slots, matching the clinic's intake sheet.
pub const TIME_SLOTS: &[&str] = &[
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM",
    "12:00 PM", "1:00 PM", "1:30 PM", "2:00 PM", "2:30 PM", "3:00 PM",
    "3:30 PM", "4:00 PM", "4:30 PM", "5:00 PM",
];

/// Form fields in focus order.  `Submit` is the confirm button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Date,
    Time,
    Message,
    Submit,
}

impl Field {
    pub const ALL: &[Field] = &[
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Service,
        Field::Date,
        Field::Time,
        Field::Message,
        Field::Submit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Service => "Service",
            Field::Date => "Preferred Date",
            Field::Time => "Preferred Time",
            Field::Message => "Message",
            Field::Submit => "Book Appointment",
        }
    }

    /// Whether the field takes typed text (as opposed to a pick-list).
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Field::Name | Field::Email | Field::Phone | Field::Date | Field::Message
        )
    }
}

/// Why a submission was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("email address doesn't look valid")]
    InvalidEmail,
    #[error("date must be YYYY-MM-DD")]
    InvalidDate,
    #[error("earliest available date is {0}")]
    DateTooEarly(NaiveDate),
}

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// The simulated call is in flight; completes at `done_at`.
    Submitting { done_at: Instant },
    /// Success banner shown; the form resets at `reset_at`.
    Submitted { reset_at: Instant },
}

/// A validated request, as it would be handed to a real scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: &'static str,
    pub preferred_date: NaiveDate,
    pub preferred_time: &'static str,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Index into [`SERVICES_LIST`]; `None` until picked.
    pub service: Option<usize>,
    /// Raw `YYYY-MM-DD` input, validated on submit.
    pub date: String,
    /// Index into [`TIME_SLOTS`]; `None` until picked.
    pub time_slot: Option<usize>,
    pub message: String,
    pub focus: Field,
    pub phase: Phase,
    /// First validation error from the last refused submit.
    pub error: Option<BookingError>,
    submit_delay: Duration,
    success_display: Duration,
}

impl BookingForm {
    pub fn new(submit_delay: Duration, success_display: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            service: None,
            date: String::new(),
            time_slot: None,
            message: String::new(),
            focus: Field::Name,
            phase: Phase::Editing,
            error: None,
            submit_delay,
            success_display,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.phase == Phase::Editing
    }

    // ── focus ───────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, dir: isize) {
        let pos = Field::ALL.iter().position(|&f| f == self.focus).unwrap_or(0);
        let len = Field::ALL.len() as isize;
        let next = (pos as isize + dir).rem_euclid(len) as usize;
        self.focus = Field::ALL[next];
    }

    // ── editing ─────────────────────────────────────────────────

    /// Type a character into the focused text field.  Ignored while a
    /// submission is in flight or when focus is on a pick-list.
    pub fn input(&mut self, ch: char) {
        if !self.is_editing() {
            return;
        }
        self.error = None;
        match self.focus {
            Field::Name => self.name.push(ch),
            Field::Email => self.email.push(ch),
            Field::Phone => self.phone.push(ch),
            Field::Date => {
                // Date input stays short and shaped like YYYY-MM-DD.
                if self.date.len() < 10 && (ch.is_ascii_digit() || ch == '-') {
                    self.date.push(ch);
                }
            }
            Field::Message => self.message.push(ch),
            Field::Service | Field::Time | Field::Submit => {}
        }
    }

    pub fn backspace(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.error = None;
        match self.focus {
            Field::Name => {
                self.name.pop();
            }
            Field::Email => {
                self.email.pop();
            }
            Field::Phone => {
                self.phone.pop();
            }
            Field::Date => {
                self.date.pop();
            }
            Field::Message => {
                self.message.pop();
            }
            Field::Service | Field::Time | Field::Submit => {}
        }
    }

    /// Cycle the focused pick-list (service / time slot) by `dir`.
    pub fn cycle_option(&mut self, dir: isize) {
        if !self.is_editing() {
            return;
        }
        self.error = None;
        match self.focus {
            Field::Service => {
                self.service = Some(cycle(self.service, SERVICES_LIST.len(), dir));
            }
            Field::Time => {
                self.time_slot = Some(cycle(self.time_slot, TIME_SLOTS.len(), dir));
            }
            _ => {}
        }
    }

    // ── submission ──────────────────────────────────────────────

    /// Validate the current input against `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, BookingError> {
        if self.name.trim().is_empty() {
            return Err(BookingError::Missing("name"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(BookingError::Missing("email"));
        }
        if !email_looks_valid(email) {
            return Err(BookingError::InvalidEmail);
        }
        if self.phone.trim().is_empty() {
            return Err(BookingError::Missing("phone"));
        }
        let Some(service_idx) = self.service else {
            return Err(BookingError::Missing("service"));
        };
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| BookingError::InvalidDate)?;
        let tomorrow = today.succ_opt().unwrap_or(today);
        if date < tomorrow {
            return Err(BookingError::DateTooEarly(tomorrow));
        }
        let Some(time_idx) = self.time_slot else {
            return Err(BookingError::Missing("time"));
        };

        let message = self.message.trim();
        Ok(BookingRequest {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            phone: self.phone.trim().to_string(),
            service: SERVICES_LIST[service_idx],
            preferred_date: date,
            preferred_time: TIME_SLOTS[time_idx],
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }

    /// Attempt to submit.  On success the form enters `Submitting` and the
    /// validated request is returned (logged by the caller — nothing is sent
    /// anywhere).  On failure the first error is stored for display.
    pub fn submit(&mut self, now: Instant, today: NaiveDate) -> Option<BookingRequest> {
        if !self.is_editing() {
            return None;
        }
        match self.validate(today) {
            Ok(request) => {
                self.error = None;
                self.phase = Phase::Submitting { done_at: now + self.submit_delay };
                Some(request)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Drive the submission deadlines.  Call once per app tick.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Editing => {}
            Phase::Submitting { done_at } => {
                if now >= done_at {
                    self.phase = Phase::Submitted { reset_at: now + self.success_display };
                }
            }
            Phase::Submitted { reset_at } => {
                if now >= reset_at {
                    self.reset();
                }
            }
        }
    }

    /// Blank out every field and return to editing.
    pub fn reset(&mut self) {
        let (submit_delay, success_display) = (self.submit_delay, self.success_display);
        *self = BookingForm::new(submit_delay, success_display);
    }
}

fn cycle(current: Option<usize>, len: usize, dir: isize) -> usize {
    debug_assert!(len > 0);
    match current {
        None => 0,
        Some(i) => (i as isize + dir).rem_euclid(len as isize) as usize,
    }
}

/// Cheap shape check: one `@`, non-empty local part, and a dot in the domain.
fn email_looks_valid(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBMIT: Duration = Duration::from_secs(2);
    const SUCCESS: Duration = Duration::from_secs(5);

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        form.name = "Jane Doe".into();
        form.email = "jane@example.com".into();
        form.phone = "+1 555 000 1111".into();
        form.service = Some(1);
        form.date = "2024-03-15".into();
        form.time_slot = Some(0);
        form.message = "Sensitive teeth".into();
        form
    }

    #[test]
    fn valid_form_produces_a_request() {
        let request = filled_form().validate(today()).unwrap();
        assert_eq!(request.service, "Cosmetic Dentistry");
        assert_eq!(request.preferred_time, "9:00 AM");
        assert_eq!(
            request.preferred_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
        assert_eq!(request.message.as_deref(), Some("Sensitive teeth"));
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        assert_eq!(form.validate(today()), Err(BookingError::Missing("name")));
        form.name = "Jane".into();
        assert_eq!(form.validate(today()), Err(BookingError::Missing("email")));
    }

    #[test]
    fn email_shape_is_checked() {
        let mut form = filled_form();
        form.email = "not-an-email".into();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidEmail));
        form.email = "a@b".into();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidEmail));
    }

    #[test]
    fn past_and_same_day_dates_are_refused() {
        let mut form = filled_form();
        form.date = "2024-03-10".into();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(
            form.validate(today()),
            Err(BookingError::DateTooEarly(tomorrow))
        );
    }

    #[test]
    fn garbled_date_is_invalid() {
        let mut form = filled_form();
        form.date = "15/03/2024".into();
        assert_eq!(form.validate(today()), Err(BookingError::InvalidDate));
    }

    #[test]
    fn submit_then_success_then_reset() {
        let t0 = Instant::now();
        let mut form = filled_form();

        assert!(form.submit(t0, today()).is_some());
        assert!(matches!(form.phase, Phase::Submitting { .. }));

        // Input is ignored while the call is in flight.
        form.input('x');
        assert_eq!(form.name, "Jane Doe");

        form.tick(t0 + Duration::from_secs(1));
        assert!(matches!(form.phase, Phase::Submitting { .. }));

        let t1 = t0 + SUBMIT;
        form.tick(t1);
        assert!(matches!(form.phase, Phase::Submitted { .. }));

        form.tick(t1 + SUCCESS);
        assert_eq!(form.phase, Phase::Editing);
        assert!(form.name.is_empty());
        assert_eq!(form.service, None);
    }

    #[test]
    fn refused_submit_stores_the_error() {
        let t0 = Instant::now();
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        assert!(form.submit(t0, today()).is_none());
        assert_eq!(form.error, Some(BookingError::Missing("name")));
        assert_eq!(form.phase, Phase::Editing);
    }

    #[test]
    fn pick_lists_cycle_with_wraparound() {
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        form.focus = Field::Time;
        form.cycle_option(-1);
        assert_eq!(form.time_slot, Some(0)); // first touch lands on the first slot
        form.cycle_option(-1);
        assert_eq!(form.time_slot, Some(TIME_SLOTS.len() - 1));
        form.cycle_option(1);
        assert_eq!(form.time_slot, Some(0));
    }

    #[test]
    fn date_field_rejects_letters() {
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        form.focus = Field::Date;
        for ch in "2024-x03-15".chars() {
            form.input(ch);
        }
        assert_eq!(form.date, "2024-03-15");
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = BookingForm::new(SUBMIT, SUCCESS);
        form.focus_prev();
        assert_eq!(form.focus, Field::Submit);
        form.focus_next();
        assert_eq!(form.focus, Field::Name);
    }
}
