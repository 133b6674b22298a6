//! Car Inventory - validates car inventory records and browses the results
//!
//! Each line of an input file is parsed into a candidate record and run
//! through a fixed set of field checks. Accepted records are kept in memory;
//! rejected lines are written to a reject log along with every reason they
//! failed.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{InventoryRecord, Reason, RejectionRecord, Validation, ValidationRules, Validator};
