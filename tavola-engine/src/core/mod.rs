//! Engine configuration

mod config;

pub use config::Config;
