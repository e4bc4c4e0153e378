//! Domain models
//!
//! Wire layouts match the storage JSON produced by the original site, so
//! an engine pointed at pre-existing data rehydrates it unchanged.

mod auth_user;
mod cart;
mod menu;
mod order;
mod reservation;

pub use auth_user::{AuthUser, UserRole};
pub use cart::{CartInput, CartLine};
pub use menu::{MenuCategory, MenuItem};
pub use order::{Fulfillment, OrderForm, OrderRecord};
pub use reservation::{ReservationForm, ReservationRecord};
