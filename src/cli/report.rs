//! Text rendering of the inventory table and the reject log

use std::io;

use crate::domain::InventoryRecord;
use crate::storage::RejectLog;

const ID_WIDTH: usize = 12;
const MODEL_WIDTH: usize = 15;
const QUANTITY_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 12;

fn rule() -> String {
    "-".repeat(ID_WIDTH + MODEL_WIDTH + QUANTITY_WIDTH + PRICE_WIDTH)
}

/// Renders accepted records as a fixed-width table
pub fn inventory_table(records: &[InventoryRecord]) -> String {
    if records.is_empty() {
        return "No valid records to display\n".to_string();
    }

    let mut out = String::new();
    out.push_str("\nCar Inventory:\n");
    out.push_str(&rule());
    out.push('\n');
    out.push_str(&format!(
        "{:<iw$}{:<mw$}{:>qw$}{:>pw$}\n",
        "ID",
        "Model",
        "Quantity",
        "Price",
        iw = ID_WIDTH,
        mw = MODEL_WIDTH,
        qw = QUANTITY_WIDTH,
        pw = PRICE_WIDTH,
    ));
    out.push_str(&rule());
    out.push('\n');

    for record in records {
        out.push_str(&format!(
            "{:<iw$}{:<mw$}{:>qw$}{:>pw$.2}\n",
            record.id(),
            record.model(),
            record.quantity(),
            record.price(),
            iw = ID_WIDTH,
            mw = MODEL_WIDTH,
            qw = QUANTITY_WIDTH,
            pw = PRICE_WIDTH,
        ));
    }

    out.push_str(&rule());
    out.push('\n');
    out
}

/// Renders the reject log, line for line
pub fn reject_replay(log: &RejectLog) -> io::Result<String> {
    let lines = match log.read_lines()? {
        None => return Ok("No invalid records found or error file missing\n".to_string()),
        Some(lines) if lines.is_empty() => return Ok("No invalid records found\n".to_string()),
        Some(lines) => lines,
    };

    let mut out = String::new();
    out.push_str("\nInvalid Records:\n");
    out.push_str(&rule());
    out.push('\n');
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&rule());
    out.push('\n');
    Ok(out)
}
