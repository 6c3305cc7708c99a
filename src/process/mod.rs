use std::fmt;
use std::io;

use thiserror::Error;

mod launcher;
pub mod signal;

pub use launcher::{Child, ProcessLauncher};

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("fork: {0}")]
    Spawn(#[source] io::Error),

    #[error("wait: {0}")]
    Wait(#[source] io::Error),

    #[error("{0}: argument contains a NUL byte")]
    InvalidArgument(String),

    #[error("no command given")]
    EmptyCommand,
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitState {
    Exited(i32),
    Signaled(i32),
}

impl fmt::Display for ExitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitState::Exited(code) => write!(f, "exited with status {}", code),
            ExitState::Signaled(sig) => write!(f, "killed by {}", signal::signal_name(*sig)),
        }
    }
}
