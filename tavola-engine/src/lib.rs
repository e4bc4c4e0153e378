//! Tavola Engine - client-side restaurant ordering and reservation core
//!
//! # Architecture
//!
//! The engine is a library embedded by a UI shell. It owns everything
//! between the static menu catalog and the durable key-value store:
//!
//! - **Store** (`store`): persistent key-value adapter with safe JSON
//!   decoding (redb-backed, plus an in-memory stand-in for tests)
//! - **Catalog** (`catalog`): immutable menu data grouped by category
//! - **Cart** (`cart`): line merging, derived counts and totals, storage
//!   sync on every mutation
//! - **Recorders** (`orders`, `reservations`): validated, append-only
//!   order and reservation logs
//! - **Views** (`history`, `dashboard`): read-only filtering and
//!   aggregation over the persisted logs
//! - **Auth** (`auth`): demo-only login session
//!
//! # Module structure
//!
//! ```text
//! tavola-engine/src/
//! ├── core/          # configuration
//! ├── store/         # key-value store adapter
//! ├── catalog/       # static menu data
//! ├── cart/          # cart engine
//! ├── orders/        # order recorder
//! ├── reservations/  # reservation recorder
//! ├── history/       # order/reservation history view
//! ├── dashboard/     # admin metrics
//! ├── auth/          # demo login session
//! └── utils/         # logging
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod dashboard;
pub mod error;
pub mod history;
pub mod orders;
pub mod reservations;
pub mod store;
pub mod utils;

// Re-export public types
pub use auth::AuthSession;
pub use cart::CartEngine;
pub use core::Config;
pub use dashboard::Dashboard;
pub use error::RecorderError;
pub use history::HistoryView;
pub use orders::OrderRecorder;
pub use reservations::{ReservationRecorder, TIME_SLOTS};
pub use store::{MemoryStore, RedbStore, StoreAdapter, StoreError};

// Re-export logger functions
pub use utils::logger::init_logger;
