use thiserror::Error;

/// Errors that end the session. Everything recoverable is handled by the
/// dispatcher before it can get here.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("allocation error: could not grow the line buffer to {0} bytes")]
    OutOfMemory(usize),

    #[error("Ctrl-C error: {0}")]
    CtrlC(String),
}

impl From<ctrlc::Error> for ShellError {
    fn from(err: ctrlc::Error) -> Self {
        ShellError::CtrlC(err.to_string())
    }
}
