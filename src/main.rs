//! Car Inventory CLI - validate inventory records and browse the results

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = car_inventory::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
