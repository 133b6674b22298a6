//! Line parser
//!
//! Turns a raw input line into a [`CandidateRecord`]. Lines hold
//! `ID MODEL QUANTITY PRICE` separated by any run of whitespace; tokens past
//! the fourth are ignored.

use thiserror::Error;

use super::record::CandidateRecord;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Quantity is not an integer: '{0}'")]
    InvalidQuantity(String),

    #[error("Price is not a decimal number: '{0}'")]
    InvalidPrice(String),
}

/// Parses one line into a candidate record
pub fn parse_line(line: &str) -> Result<CandidateRecord, ParseError> {
    let mut tokens = line.split_whitespace();

    let id = tokens.next().ok_or(ParseError::MissingField("id"))?;
    let model = tokens.next().ok_or(ParseError::MissingField("model"))?;
    let quantity = tokens.next().ok_or(ParseError::MissingField("quantity"))?;
    let price = tokens.next().ok_or(ParseError::MissingField("price"))?;

    let quantity = quantity
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidQuantity(quantity.to_string()))?;

    let price = match price.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return Err(ParseError::InvalidPrice(price.to_string())),
    };

    Ok(CandidateRecord::new(id, model, quantity, price))
}
