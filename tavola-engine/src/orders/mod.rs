//! Order recorder
//!
//! Converts a validated checkout submission plus the current cart into one
//! immutable order record and appends it to the `orders` log. The total is
//! always recomputed from the captured line prices; a client-supplied
//! total is never trusted.

use crate::cart::CartEngine;
use crate::error::{RecorderError, RecorderResult};
use crate::store::{ORDERS_KEY, StoreAdapter};
use chrono::Utc;
use shared::{FieldError, OrderForm, OrderRecord};
use tracing::info;
use validator::ValidateEmail;

/// Minimum characters for the customer name
const MIN_NAME_CHARS: usize = 2;
/// Minimum characters for the phone number
const MIN_PHONE_CHARS: usize = 10;

/// Appends validated checkout submissions to the order log
pub struct OrderRecorder<S: StoreAdapter> {
    store: S,
}

impl<S: StoreAdapter> OrderRecorder<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate the submission, append an order record, and clear the cart
    ///
    /// Preconditions: non-empty cart and valid customer fields. On any
    /// rejection the log and the cart are left untouched. Two identical
    /// successful submissions create two records; each call is a
    /// distinct order intent, not an upsert.
    pub fn submit(
        &self,
        form: &OrderForm,
        cart: &mut CartEngine<S>,
    ) -> RecorderResult<OrderRecord> {
        if cart.is_empty() {
            return Err(RecorderError::EmptyCart);
        }

        let errors = validate_order_form(form);
        if !errors.is_empty() {
            return Err(RecorderError::Validation(errors));
        }

        let record = OrderRecord {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            address: form.address.trim().to_string(),
            message: form.message.clone(),
            fulfillment: form.fulfillment,
            items: cart.lines().to_vec(),
            total_price: cart.total_price(),
            date: Utc::now(),
        };

        // Read-modify-write append; a write failure must surface before
        // the cart is cleared
        let mut orders: Vec<OrderRecord> = self.store.read_or(ORDERS_KEY, Vec::new());
        orders.push(record.clone());
        self.store.write(ORDERS_KEY, &orders)?;

        cart.clear();

        info!(
            items = record.items.len(),
            total = %record.total_price,
            fulfillment = %record.fulfillment,
            "order recorded"
        );
        Ok(record)
    }
}

/// Field-level checkout validation
///
/// Collects every failing field instead of stopping at the first, so the
/// caller can surface all messages at once.
pub fn validate_order_form(form: &OrderForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if form.name.trim().chars().count() < MIN_NAME_CHARS {
        errors.push(FieldError::new(
            "name",
            "Name must be at least 2 characters.",
        ));
    }
    if !form.email.trim().validate_email() {
        errors.push(FieldError::new(
            "email",
            "Please enter a valid email address.",
        ));
    }
    if form.phone.trim().chars().count() < MIN_PHONE_CHARS {
        errors.push(FieldError::new(
            "phone",
            "Please enter a valid phone number.",
        ));
    }
    if form.address.trim().is_empty() {
        errors.push(FieldError::new("address", "Please enter your address."));
    }

    errors
}
