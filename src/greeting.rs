// src/greeting.rs
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::Add;

use crate::config::consts::DEFAULT_NAME;

/// `Hello, <name>!` for anything printable.
pub fn greet(name: impl Display) -> String {
    format!("Hello, {name}!")
}

/// Greeting with the default name.
pub fn greet_default() -> String {
    greet(DEFAULT_NAME)
}

pub fn add<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Writes the fixed greeting line.
pub fn say_hello<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", greet_default())
}

/// Output of the `hello-add` program: the greeting, then `2 + 3 = 5`.
pub fn write_add_demo<W: Write>(out: &mut W) -> io::Result<()> {
    let (a, b) = (2, 3);
    say_hello(out)?;
    writeln!(out, "{a} + {b} = {}", add(a, b))
}
