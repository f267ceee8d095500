// src/bin/hello.rs
use std::io;

use toolshim::greeting;

fn main() -> io::Result<()> {
    greeting::say_hello(&mut io::stdout().lock())
}
