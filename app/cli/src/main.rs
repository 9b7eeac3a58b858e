//! FILENAME: app/cli/src/main.rs
// PURPOSE: Console entry point.

fn main() {
    if let Err(e) = calc_lib::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
