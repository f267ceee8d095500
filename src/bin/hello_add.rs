// src/bin/hello_add.rs
use std::io;

use toolshim::greeting;

fn main() -> io::Result<()> {
    greeting::write_add_demo(&mut io::stdout().lock())
}
