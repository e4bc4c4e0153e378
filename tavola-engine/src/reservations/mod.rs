//! Reservation recorder
//!
//! Same append-only pattern as the order recorder, specialized to the
//! table-reservation wizard: guest fields, a date that may not be in the
//! past, a time slot from the fixed grid, party size, and optional
//! pre-order item ids and table selection.

use crate::error::{RecorderError, RecorderResult};
use crate::store::{RESERVATIONS_KEY, StoreAdapter};
use chrono::{NaiveDate, Utc};
use shared::{FieldError, ReservationForm, ReservationRecord};
use tracing::info;
use validator::ValidateEmail;

/// Fixed lunch/dinner slot grid offered by the wizard
pub const TIME_SLOTS: [&str; 13] = [
    "12:00 PM", "12:30 PM", "1:00 PM", "1:30 PM", "2:00 PM", "5:00 PM", "5:30 PM", "6:00 PM",
    "6:30 PM", "7:00 PM", "7:30 PM", "8:00 PM", "8:30 PM",
];

/// Largest party the wizard accepts
const MAX_GUESTS: u32 = 20;

/// Appends validated reservation submissions to the reservation log
pub struct ReservationRecorder<S: StoreAdapter> {
    store: S,
}

impl<S: StoreAdapter> ReservationRecorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the wizard submission and append a reservation record
    ///
    /// On any rejection the log is left untouched.
    pub fn submit(&self, form: &ReservationForm) -> RecorderResult<ReservationRecord> {
        self.submit_at(form, Utc::now().date_naive())
    }

    /// `submit` with an explicit "today" for the not-in-the-past check
    pub fn submit_at(
        &self,
        form: &ReservationForm,
        today: NaiveDate,
    ) -> RecorderResult<ReservationRecord> {
        let errors = validate_reservation_form(form, today);
        if !errors.is_empty() {
            return Err(RecorderError::Validation(errors));
        }

        // The date is present once validation passes
        let Some(date) = form.date else {
            return Err(RecorderError::Validation(vec![FieldError::new(
                "date",
                "Please select a date.",
            )]));
        };

        let record = ReservationRecord {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            date,
            time: form.time.clone(),
            guests: form.guests,
            special_requests: form
                .special_requests
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            preorder_items: form.preorder_items.clone().filter(|items| !items.is_empty()),
            table_id: form.table_id.clone(),
        };

        let mut reservations: Vec<ReservationRecord> =
            self.store.read_or(RESERVATIONS_KEY, Vec::new());
        reservations.push(record.clone());
        self.store.write(RESERVATIONS_KEY, &reservations)?;

        info!(
            date = %record.date,
            time = %record.time,
            guests = record.guests,
            "reservation recorded"
        );
        Ok(record)
    }
}

/// Field-level reservation validation against the given "today"
pub fn validate_reservation_form(form: &ReservationForm, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Please enter your name."));
    }
    if !form.email.trim().validate_email() {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address.",
        ));
    }
    if form.phone.trim().is_empty() {
        errors.push(FieldError::new("phone", "Please enter your phone number."));
    }
    match form.date {
        None => errors.push(FieldError::new("date", "Please select a date.")),
        Some(date) if date < today => {
            errors.push(FieldError::new("date", "The date cannot be in the past."));
        }
        Some(_) => {}
    }
    if !TIME_SLOTS.contains(&form.time.as_str()) {
        errors.push(FieldError::new("time", "Please select a time slot."));
    }
    if form.guests < 1 || form.guests > MAX_GUESTS {
        errors.push(FieldError::new(
            "guests",
            "Guest count must be between 1 and 20.",
        ));
    }

    errors
}
