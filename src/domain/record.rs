//! Inventory record types
//!
//! A raw line becomes a [`CandidateRecord`] when it parses, and a candidate
//! becomes either an [`InventoryRecord`] or a [`RejectionRecord`] once the
//! validator has run every field check.

use serde::Serialize;
use std::fmt;

/// Four-field tuple extracted from a raw line, not yet validated
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecord {
    pub id: String,
    pub model: String,
    pub quantity: i32,
    pub price: f64,
}

impl CandidateRecord {
    pub fn new(id: impl Into<String>, model: impl Into<String>, quantity: i32, price: f64) -> Self {
        Self {
            id: id.into(),
            model: model.into(),
            quantity,
            price,
        }
    }
}

/// A record that passed every field check
///
/// Only the validator can build one, so holding an `InventoryRecord` means
/// every field already satisfies its rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRecord {
    id: String,
    model: String,
    quantity: i32,
    price: f64,
}

impl InventoryRecord {
    pub(super) fn from_candidate(candidate: CandidateRecord) -> Self {
        Self {
            id: candidate.id,
            model: candidate.model,
            quantity: candidate.quantity,
            price: candidate.price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the fields as a fresh candidate, e.g. to run them through the validator again
    pub fn to_candidate(&self) -> CandidateRecord {
        CandidateRecord::new(self.id.clone(), self.model.clone(), self.quantity, self.price)
    }
}

/// One specific rule violation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reason {
    InvalidId,
    InvalidModel,
    NonPositiveQuantity,
    /// Carries the floor the price failed to exceed
    PriceAtOrBelowFloor(f64),
    BadFormat,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::InvalidId => write!(f, "Invalid ID"),
            Reason::InvalidModel => write!(f, "Invalid model"),
            Reason::NonPositiveQuantity => write!(f, "Quantity must be above zero"),
            Reason::PriceAtOrBelowFloor(floor) => write!(f, "Price must be above ${:.2}", floor),
            Reason::BadFormat => write!(f, "Bad format"),
        }
    }
}

/// A line that was turned away, with every reason that applied
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionRecord {
    text: String,
    reasons: Vec<Reason>,
}

impl RejectionRecord {
    /// Creates a rejection; `reasons` must not be empty
    pub(super) fn new(text: impl Into<String>, reasons: Vec<Reason>) -> Self {
        debug_assert!(!reasons.is_empty(), "rejection without a reason");
        Self {
            text: text.into(),
            reasons,
        }
    }

    /// The original line, trimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reasons(&self) -> &[Reason] {
        &self.reasons
    }

    /// Every reason token followed by `"; "`, in check order
    pub fn reason_text(&self) -> String {
        self.reasons
            .iter()
            .map(|r| format!("{}; ", r))
            .collect()
    }

    /// Renders the line written to the reject log
    pub fn log_line(&self) -> String {
        format!("{} - {}", self.text, self.reason_text().trim_end())
    }
}
