// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod dispatch;
pub mod greeting;
pub mod log;
