// src/dispatch/delegate.rs
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, info};

use super::error::{BoxError, DispatchError};
use super::search::SearchPath;
use crate::config::consts::PATH_VAR;
use crate::config::shims::{ShimSpec, Variant};

/// A tool's `main`: called once with no arguments, returns nothing or an
/// integer status, or fails.
pub trait Delegate {
    fn tool(&self) -> &str;
    fn call(&self) -> Result<Option<i32>, DispatchError>;
}

/// Delegate living in another executable, run with the shim's arguments.
/// Environment and stdio are inherited; only `PATH` may be overridden.
///
/// A process cannot hand back a value separately from its exit code, so a
/// non-zero code is a failure unless the shim propagates it.
#[derive(Clone, Debug)]
pub struct ExternalCommand {
    tool: String,
    program: PathBuf,
    args: Vec<OsString>,
    path_var: Option<OsString>,
    variant: Variant,
}

impl ExternalCommand {
    /// Locate `<tool>-cli` on `search`. Failing here means nothing ran yet.
    pub fn resolve<I>(spec: &ShimSpec, search: &SearchPath, args: I) -> Result<Self, DispatchError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let program = search.resolve(spec.tool, &spec.delegate_name())?;
        Ok(Self {
            tool: s!(spec.tool),
            program,
            args: args.into_iter().collect(),
            path_var: search.child_path_var()?,
            variant: spec.variant,
        })
    }
}

impl Delegate for ExternalCommand {
    fn tool(&self) -> &str {
        &self.tool
    }

    fn call(&self) -> Result<Option<i32>, DispatchError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(path) = &self.path_var {
            cmd.env(PATH_VAR, path);
        }

        info!(tool = %self.tool, program = %self.program.display(), "running delegate");
        let status = cmd.status().map_err(|source| DispatchError::Spawn {
            path: self.program.clone(),
            source,
        })?;
        debug!(tool = %self.tool, %status, "delegate exited");

        match (status.code(), self.variant) {
            (Some(0), _) => Ok(None),
            (Some(code), Variant::Propagating) => Ok(Some(code)),
            (Some(code), Variant::FireAndForget) => {
                Err(DispatchError::Exited { tool: self.tool.clone(), code })
            }
            (None, _) => Err(DispatchError::Terminated { tool: self.tool.clone(), status }),
        }
    }
}

/// In-process delegate wrapping a closure.
pub struct FnDelegate<F> {
    tool: String,
    f: F,
}

impl<F> FnDelegate<F>
where
    F: Fn() -> Result<Option<i32>, BoxError>,
{
    pub fn new(tool: &str, f: F) -> Self {
        Self { tool: s!(tool), f }
    }
}

impl<F> Delegate for FnDelegate<F>
where
    F: Fn() -> Result<Option<i32>, BoxError>,
{
    fn tool(&self) -> &str {
        &self.tool
    }

    fn call(&self) -> Result<Option<i32>, DispatchError> {
        (self.f)().map_err(|source| DispatchError::Failed { tool: self.tool.clone(), source })
    }
}
