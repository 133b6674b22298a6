//! Interactive menu
//!
//! Reads numbered choices until the user exits or input runs out. Bad input
//! re-prompts and never ends the session.

use std::io::{self, BufRead, Write};

use super::report;
use crate::domain::InventoryRecord;
use crate::storage::RejectLog;

/// A valid menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowInventory,
    ShowRejects,
    Exit,
}

/// Why a line of menu input was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInputError {
    NotANumber,
    OutOfRange,
}

impl MenuInputError {
    fn message(&self) -> &'static str {
        match self {
            MenuInputError::NotANumber => "Invalid input. Please enter 1, 2, or 3",
            MenuInputError::OutOfRange => "Invalid choice, try again.",
        }
    }
}

impl MenuChoice {
    /// Parses one line of user input
    pub fn parse(input: &str) -> Result<Self, MenuInputError> {
        let number: i64 = input
            .trim()
            .parse()
            .map_err(|_| MenuInputError::NotANumber)?;

        match number {
            1 => Ok(MenuChoice::ShowInventory),
            2 => Ok(MenuChoice::ShowRejects),
            3 => Ok(MenuChoice::Exit),
            _ => Err(MenuInputError::OutOfRange),
        }
    }
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(
        out,
        "\nMenu Options:\n\
         1. Show inventory\n\
         2. Show invalid records\n\
         3. Exit\n\
         Enter your choice (1-3): "
    )?;
    out.flush()
}

/// Runs the menu loop over `input`, writing everything to `out`
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    inventory: &[InventoryRecord],
    reject_log: &RejectLog,
) -> io::Result<()> {
    let mut buf = Vec::new();

    loop {
        prompt(out)?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // End of input behaves like Exit
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(());
        }

        // Undecodable bytes just fail to parse as a number
        let line = String::from_utf8_lossy(&buf);
        let choice = match MenuChoice::parse(&line) {
            Ok(choice) => choice,
            Err(err) => {
                tracing::debug!(input = line.trim(), ?err, "menu input refused");
                writeln!(out, "{}", err.message())?;
                continue;
            }
        };

        match choice {
            MenuChoice::ShowInventory => write!(out, "{}", report::inventory_table(inventory))?,
            MenuChoice::ShowRejects => match report::reject_replay(reject_log) {
                Ok(text) => write!(out, "{}", text)?,
                Err(e) => writeln!(out, "Could not read '{}': {}", reject_log.path().display(), e)?,
            },
            MenuChoice::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
        }
    }
}
