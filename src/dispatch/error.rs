// src/dispatch/error.rs
use std::env::JoinPathsError;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("cannot locate the running shim executable")]
    CurrentExe(#[source] std::io::Error),

    #[error("delegate `{program}` for `{tool}` not found")]
    NotFound {
        tool: String,
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to run delegate {}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot build delegate search path")]
    SearchPath(#[from] JoinPathsError),

    #[error("delegate for `{tool}` exited with status {code}")]
    Exited { tool: String, code: i32 },

    #[error("no shim registered for `{0}`")]
    UnknownTool(String),

    #[error("delegate for `{tool}` terminated abnormally ({status})")]
    Terminated { tool: String, status: ExitStatus },

    #[error("delegate for `{tool}` failed")]
    Failed {
        tool: String,
        #[source]
        source: BoxError,
    },
}
