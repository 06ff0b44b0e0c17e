use std::process::exit;

use colored::Colorize;

fn main() {
    if let Err(e) = jobboard::app::run_cli() {
        eprintln!("{} {e}", "[ERR]".bold().red());
        exit(1);
    }
}
