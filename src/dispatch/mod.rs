// src/dispatch/mod.rs
//! Entry points for the tool shims.
//!
//! A shim resolves its tool's delegate, calls it once, and turns the outcome
//! into a process exit status according to its [`Variant`]. Failures are not
//! translated: they bubble out of [`run`] and the installed error reporter
//! prints them.

pub mod delegate;
pub mod error;
pub mod search;

use std::env;
use std::process::ExitCode;

use tracing::debug;

use crate::config::consts::{PATH_VAR, WRAPPED_FAILURE};
use crate::config::shims::{self, ShimSpec, Variant};

pub use delegate::{Delegate, ExternalCommand, FnDelegate};
pub use error::DispatchError;
pub use search::SearchPath;

/// Map a delegate's returned value to the process exit status.
pub fn exit_status(variant: Variant, returned: Option<i32>) -> u8 {
    match (variant, returned) {
        (Variant::FireAndForget, _) | (Variant::Propagating, None) => 0,
        (Variant::Propagating, Some(code)) => {
            // OS keeps the low byte; never let a failure wrap to success.
            let low = (code & 0xff) as u8;
            if low == 0 && code != 0 { WRAPPED_FAILURE } else { low }
        }
    }
}

/// Call the delegate once and map its result.
pub fn invoke(spec: &ShimSpec, delegate: &dyn Delegate) -> Result<u8, DispatchError> {
    let returned = delegate.call()?;
    let status = exit_status(spec.variant, returned);
    debug!(tool = spec.tool, ?returned, status, variant = ?spec.variant, "delegate returned");
    Ok(status)
}

/// Search path for `spec` in the current process.
pub fn search_path(spec: &ShimSpec) -> Result<SearchPath, DispatchError> {
    let path_var = env::var_os(PATH_VAR);
    if !spec.sibling_first {
        return Ok(SearchPath::new(None, path_var.as_deref()));
    }
    let exe = env::current_exe().map_err(DispatchError::CurrentExe)?;
    Ok(SearchPath::new(SearchPath::sibling_dir(&exe), path_var.as_deref()))
}

/// Resolve the external delegate for `spec`, forwarding this process's args.
pub fn prepare(spec: &ShimSpec) -> Result<ExternalCommand, DispatchError> {
    let search = search_path(spec)?;
    ExternalCommand::resolve(spec, &search, env::args_os().skip(1))
}

/// Shim registered for `tool`.
pub fn shim_for(tool: &str) -> Result<&'static ShimSpec, DispatchError> {
    shims::lookup(tool).ok_or_else(|| DispatchError::UnknownTool(s!(tool)))
}

/// Process entry for a shim binary; `tool` is the binary's own name.
pub fn run(tool: &str) -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    crate::log::init();

    let spec = shim_for(tool)?;
    let delegate = prepare(spec)?;
    let status = invoke(spec, &delegate)?;
    Ok(ExitCode::from(status))
}
