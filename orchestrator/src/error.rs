use std::{error::Error, fmt};

/// Failure modes of a single training step.
///
/// Any of these halts the remaining epoch loop; none of them is surfaced
/// as a distinct user-facing error state beyond "fewer epochs than
/// requested completed".
#[derive(Debug)]
pub enum StepError {
    /// The service answered with a non-success status.
    Http { status: u16 },
    /// The request never completed (connect, DNS, broken socket).
    Transport(String),
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepError::Http { status } => write!(f, "training service returned status {status}"),
            StepError::Transport(msg) => write!(f, "transport error: {msg}"),
            StepError::Decode(msg) => write!(f, "invalid training response: {msg}"),
        }
    }
}

impl Error for StepError {}
