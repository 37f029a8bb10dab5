use thiserror::Error;

/// Input errors. Reported to the log and the HUD status line; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Unrecognized command: '{0}'")]
    UnknownKey(char),

    #[error("'{0}' is not a valid iteration count (expected a whole number >= 1)")]
    InvalidIterations(String),
}
