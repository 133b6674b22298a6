//! Record validation
//!
//! Every candidate goes through four independent checks in a fixed order:
//! ID shape, model shape, quantity, price. All failing checks are reported,
//! not just the first one.
//!
//! ID format (default length 10):
//! - positions 0-1: letters
//! - positions 2-7: letters or digits
//! - remaining positions: digits
//!
//! The letter `O` (either case) is not allowed in the first eight positions,
//! so it can't be confused with the digit `0`.

use serde::{Deserialize, Serialize};

use super::parser::parse_line;
use super::record::{CandidateRecord, InventoryRecord, Reason, RejectionRecord};

/// Positions 0..LETTER_PREFIX must be letters
const LETTER_PREFIX: usize = 2;

/// Positions LETTER_PREFIX..BODY_END are letters or digits; the rest are digits
pub const BODY_END: usize = 8;

/// Tunable limits for the field checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Exact ID length in characters
    pub id_length: usize,

    /// Minimum model name length
    pub min_model_len: usize,

    /// Prices must be strictly above this value
    pub price_floor: f64,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            id_length: 10,
            min_model_len: 3,
            price_floor: 24995.00,
        }
    }
}

/// Checks the shape of a car ID
pub fn is_valid_id(id: &str, id_length: usize) -> bool {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() != id_length || id_length < BODY_END {
        return false;
    }

    let is_letter_o = |c: char| c.eq_ignore_ascii_case(&'o');

    let prefix_ok = chars[..LETTER_PREFIX]
        .iter()
        .all(|&c| c.is_ascii_alphabetic() && !is_letter_o(c));
    let body_ok = chars[LETTER_PREFIX..BODY_END]
        .iter()
        .all(|&c| c.is_ascii_alphanumeric() && !is_letter_o(c));
    let suffix_ok = chars[BODY_END..].iter().all(|c| c.is_ascii_digit());

    prefix_ok && body_ok && suffix_ok
}

/// Checks the shape of a model name
pub fn is_valid_model(model: &str, min_len: usize) -> bool {
    let mut chars = model.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());

    model.chars().count() >= min_len
        && starts_with_letter
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Outcome of validating one record
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Accepted(InventoryRecord),
    Rejected(RejectionRecord),
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted(_))
    }
}

/// Stateless validator over a fixed set of rules
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Runs every field check and collects the reasons for the ones that fail
    pub fn check(&self, candidate: &CandidateRecord) -> Vec<Reason> {
        let mut reasons = Vec::new();

        if !is_valid_id(&candidate.id, self.rules.id_length) {
            reasons.push(Reason::InvalidId);
        }

        if !is_valid_model(&candidate.model, self.rules.min_model_len) {
            reasons.push(Reason::InvalidModel);
        }

        if candidate.quantity <= 0 {
            reasons.push(Reason::NonPositiveQuantity);
        }

        if candidate.price <= self.rules.price_floor {
            reasons.push(Reason::PriceAtOrBelowFloor(self.rules.price_floor));
        }

        reasons
    }

    /// Validates a parsed candidate
    ///
    /// `text` is what gets stored on a rejection so a reader of the log can
    /// identify the record.
    pub fn validate(&self, candidate: CandidateRecord, text: &str) -> Validation {
        let reasons = self.check(&candidate);

        if reasons.is_empty() {
            Validation::Accepted(InventoryRecord::from_candidate(candidate))
        } else {
            Validation::Rejected(RejectionRecord::new(text.trim(), reasons))
        }
    }

    /// Parses and validates one raw line
    ///
    /// A line that doesn't parse is rejected with [`Reason::BadFormat`] alone;
    /// the field checks never run for it.
    pub fn process_line(&self, line: &str) -> Validation {
        match parse_line(line) {
            Ok(candidate) => self.validate(candidate, line),
            Err(err) => {
                tracing::debug!(line = line.trim(), error = %err, "line does not parse");
                Validation::Rejected(RejectionRecord::new(line.trim(), vec![Reason::BadFormat]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn validator() -> Validator {
        Validator::default()
    }

    fn reasons_for(line: &str) -> Vec<Reason> {
        match validator().process_line(line) {
            Validation::Accepted(_) => vec![],
            Validation::Rejected(rejection) => rejection.reasons().to_vec(),
        }
    }

    // =========================================================================
    // ID shape
    // =========================================================================

    #[test]
    fn id_with_expected_shape_is_valid() {
        assert!(is_valid_id("AB12345678", 10));
        assert!(is_valid_id("ab1c2d3e45", 10));
        assert!(is_valid_id("XYZZZZZZ00", 10));
    }

    #[test]
    fn id_length_must_match_exactly() {
        assert!(!is_valid_id("KL1234567", 10));
        assert!(!is_valid_id("IJ123456789", 10));
        assert!(!is_valid_id("", 10));
    }

    #[test]
    fn id_rejects_letter_o_in_prefix_and_body() {
        assert!(!is_valid_id("OP12345678", 10));
        assert!(!is_valid_id("aO12345678", 10));
        assert!(!is_valid_id("EF1234O678", 10));
        assert!(!is_valid_id("EF1o345678", 10));
    }

    #[test]
    fn id_prefix_must_be_letters() {
        assert!(!is_valid_id("1B12345678", 10));
        assert!(!is_valid_id("A-12345678", 10));
    }

    #[test]
    fn id_body_must_be_alphanumeric() {
        assert!(!is_valid_id("AB12_45678", 10));
        assert!(!is_valid_id("AB12 45678", 10));
    }

    #[test]
    fn id_suffix_must_be_digits() {
        assert!(!is_valid_id("AB123456A8", 10));
        assert!(!is_valid_id("AB1234567X", 10));
    }

    #[test]
    fn id_length_is_configurable() {
        assert!(is_valid_id("AB123456789", 11));
        assert!(!is_valid_id("AB12345678", 11));
        assert!(!is_valid_id("AB123456", 7));
    }

    // =========================================================================
    // Model shape
    // =========================================================================

    #[test]
    fn model_accepts_alphanumeric_starting_with_letter() {
        assert!(is_valid_model("ModelX", 3));
        assert!(is_valid_model("Epsilon345", 3));
        assert!(is_valid_model("abc", 3));
    }

    #[test]
    fn model_rejects_short_names() {
        assert!(!is_valid_model("Ab", 3));
        assert!(!is_valid_model("", 3));
    }

    #[test]
    fn model_rejects_leading_digit_or_symbol() {
        assert!(!is_valid_model("9Lives", 3));
        assert!(!is_valid_model("_Model", 3));
    }

    #[test]
    fn model_rejects_punctuation_anywhere() {
        assert!(!is_valid_model("Bad_Model", 3));
        assert!(!is_valid_model("Model-X", 3));
    }

    // =========================================================================
    // Record outcomes
    // =========================================================================

    #[test]
    fn accepts_valid_line_verbatim() {
        match validator().process_line("AB12345678 ModelX 5 30000.00") {
            Validation::Accepted(record) => {
                assert_eq!(record.id(), "AB12345678");
                assert_eq!(record.model(), "ModelX");
                assert_eq!(record.quantity(), 5);
                assert_eq!(record.price(), 30000.0);
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn letter_o_in_id_gives_only_invalid_id() {
        assert_eq!(reasons_for("EF1234O678 ModelZ 3 26000"), vec![Reason::InvalidId]);
    }

    #[test]
    fn accumulates_quantity_and_price_reasons() {
        assert_eq!(
            reasons_for("QR12345678 Beta456 0 20000"),
            vec![Reason::NonPositiveQuantity, Reason::PriceAtOrBelowFloor(24995.0)]
        );
    }

    #[test]
    fn accumulates_all_four_reasons_in_order() {
        assert_eq!(
            reasons_for("O 1x -3 10"),
            vec![
                Reason::InvalidId,
                Reason::InvalidModel,
                Reason::NonPositiveQuantity,
                Reason::PriceAtOrBelowFloor(24995.0),
            ]
        );
    }

    #[test]
    fn price_floor_is_exclusive() {
        assert_eq!(
            reasons_for("AB12345678 ModelX 5 24995.00"),
            vec![Reason::PriceAtOrBelowFloor(24995.0)]
        );
        assert!(reasons_for("AB12345678 ModelX 5 24995.01").is_empty());
    }

    #[test]
    fn quantity_must_be_positive() {
        assert_eq!(reasons_for("AB12345678 ModelX 0 30000"), vec![Reason::NonPositiveQuantity]);
        assert_eq!(reasons_for("AB12345678 ModelX -1 30000"), vec![Reason::NonPositiveQuantity]);
        assert!(reasons_for("AB12345678 ModelX 1 30000").is_empty());
    }

    #[test]
    fn unparseable_line_skips_field_checks() {
        assert_eq!(reasons_for("OO ModelX lots 1"), vec![Reason::BadFormat]);
        assert_eq!(reasons_for("AB12345678 ModelX"), vec![Reason::BadFormat]);
    }

    #[test]
    fn rejection_keeps_trimmed_original_text() {
        match validator().process_line("  UV12345678   Delta012 8 24000  ") {
            Validation::Rejected(rejection) => {
                assert_eq!(rejection.text(), "UV12345678   Delta012 8 24000");
                assert_eq!(rejection.log_line(), "UV12345678   Delta012 8 24000 - Price must be above $24995.00;");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn custom_floor_shows_in_reason() {
        let validator = Validator::new(ValidationRules {
            price_floor: 30000.5,
            ..ValidationRules::default()
        });

        match validator.process_line("AB12345678 ModelX 5 30000") {
            Validation::Rejected(rejection) => {
                assert_eq!(rejection.reason_text(), "Price must be above $30000.50; ");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #[test]
        fn well_formed_ids_are_accepted(id in "[A-NP-Za-np-z]{2}[A-NP-Za-np-z0-9]{6}[0-9]{2}") {
            prop_assert!(is_valid_id(&id, 10));
        }

        #[test]
        fn ids_of_wrong_length_are_rejected(id in "[A-Z0-9]{0,9}|[A-Z0-9]{11,16}") {
            prop_assert!(!is_valid_id(&id, 10));
        }

        #[test]
        fn letter_o_before_suffix_is_rejected(
            id in "[A-NP-Z]{2}[A-NP-Z0-9]{6}[0-9]{2}",
            pos in 0usize..8,
            upper in any::<bool>(),
        ) {
            let mut chars: Vec<char> = id.chars().collect();
            chars[pos] = if upper { 'O' } else { 'o' };
            let id: String = chars.into_iter().collect();
            prop_assert!(!is_valid_id(&id, 10));
        }

        #[test]
        fn every_reason_matches_a_failing_check(
            id in "[A-Za-z0-9]{8,12}",
            model in "[A-Za-z0-9_]{1,6}",
            quantity in -5i32..5,
            price in 24000.0f64..26000.0,
        ) {
            let rules = ValidationRules::default();
            let candidate = CandidateRecord::new(id.clone(), model.clone(), quantity, price);

            match Validator::new(rules.clone()).validate(candidate, "line") {
                Validation::Accepted(record) => {
                    prop_assert!(is_valid_id(record.id(), rules.id_length));
                    prop_assert!(is_valid_model(record.model(), rules.min_model_len));
                    prop_assert!(record.quantity() > 0);
                    prop_assert!(record.price() > rules.price_floor);
                }
                Validation::Rejected(rejection) => {
                    prop_assert!(!rejection.reasons().is_empty());
                    for reason in rejection.reasons() {
                        let failing = match reason {
                            Reason::InvalidId => !is_valid_id(&id, rules.id_length),
                            Reason::InvalidModel => !is_valid_model(&model, rules.min_model_len),
                            Reason::NonPositiveQuantity => quantity <= 0,
                            Reason::PriceAtOrBelowFloor(_) => price <= rules.price_floor,
                            Reason::BadFormat => false,
                        };
                        prop_assert!(failing, "reason {:?} without a failing check", reason);
                    }
                }
            }
        }

        #[test]
        fn revalidating_accepted_record_accepts_again(
            id in "[A-NP-Z]{2}[A-NP-Z0-9]{6}[0-9]{2}",
            model in "[A-Za-z][A-Za-z0-9]{2,10}",
            quantity in 1i32..1000,
            price in 24995.01f64..200000.0,
        ) {
            let validator = Validator::default();
            let first = validator.validate(CandidateRecord::new(id, model, quantity, price), "line");

            let Validation::Accepted(record) = first else {
                return Err(TestCaseError::fail("expected acceptance"));
            };
            prop_assert!(validator.validate(record.to_candidate(), "line").is_accepted());
        }
    }
}
