//! Shared types for the Tavola ordering engine
//!
//! Domain models and error types used by the engine crate and any
//! embedding UI shell: menu entries, cart lines, order and reservation
//! records, and the demo auth session.

pub mod error;
pub mod models;

// Re-exports
pub use error::FieldError;
pub use models::{
    AuthUser, CartInput, CartLine, Fulfillment, MenuCategory, MenuItem, OrderForm, OrderRecord,
    ReservationForm, ReservationRecord, UserRole,
};
