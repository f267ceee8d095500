// src/bin/html2md.rs
use std::process::ExitCode;

use toolshim::dispatch;

fn main() -> color_eyre::Result<ExitCode> {
    dispatch::run(env!("CARGO_BIN_NAME"))
}
