//! The `tally` binary. All behavior lives in `cli/`; this file only runs it
//! and turns an error into exit code 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
