//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `menu` (default) | Load the inventory, then browse it interactively |
//! | `inventory` | Load and print the accepted records |
//! | `rejects` | Load and print the reject log |
//! | `check` | Validate one record given on the command line |
//!
//! ## Output Formats
//!
//! `inventory`, `rejects` and `check` support `--format json`.
//! The menu is always text.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod logging;
mod menu;
mod output;
mod report;

pub use app::{run, Cli, Commands};
pub use menu::{MenuChoice, MenuInputError};
pub use output::{Output, OutputFormat};
