//! # Storage Layer
//!
//! File handling around the validation engine.
//!
//! ## Files
//!
//! | Data | Format | Default location |
//! |------|--------|------------------|
//! | Input records | Whitespace-delimited text | `car_records.txt` |
//! | Rejected lines | `<line> - <reasons>` text | `invalid_records.txt` |
//! | Config | TOML | `~/.config/car-inventory/config.toml` |
//!
//! ## Key Types
//!
//! - [`InventoryLoader`] - Streams input through the validator
//! - [`RejectLog`] - Recreated on every load, replayed verbatim
//! - [`Config`] - Paths, capacity and validation rules

mod config;
mod loader;
mod reject_log;

pub use config::{Config, ConfigError};
pub use loader::{InventoryLoader, LoadError, LoadReport, StreamError};
pub use reject_log::RejectLog;
