//! Domain models for the car inventory
//!
//! Parsing and validation of inventory records, without any I/O concerns.

mod parser;
mod record;
mod validator;

pub use parser::{parse_line, ParseError};
pub use record::{CandidateRecord, InventoryRecord, Reason, RejectionRecord};
pub use validator::{is_valid_id, is_valid_model, Validation, ValidationRules, Validator, BODY_END};
