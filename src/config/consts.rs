// src/config/consts.rs

// Greeting
pub const DEFAULT_NAME: &str = "World";

// Delegate lookup
pub const DELEGATE_SUFFIX: &str = "-cli"; // <tool>-cli, like cargo-<cmd> / git-<cmd>
pub const PATH_VAR: &str = "PATH";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "off"; // shims stay silent unless RUST_LOG says otherwise

// Exit status when a non-zero return value would wrap to 0 on the OS side
pub const WRAPPED_FAILURE: u8 = 1;
