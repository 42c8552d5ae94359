use std::io;
use thiserror::Error;

/// Failures that stop a progress line from being printed.
#[derive(Error, Debug)]
pub enum ProgressError {
    /// The digit width of the total is only defined for positive totals.
    #[error("total step count must be positive, got {0}")]
    InvalidTotalSteps(i64),

    #[error("failed to write progress line: {0}")]
    Io(#[from] io::Error),
}

impl ProgressError {
    /// Exit code reported to the calling build tool.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProgressError::InvalidTotalSteps(_) => crate::exit_codes::USAGE_ERROR,
            ProgressError::Io(_) => crate::exit_codes::RUNTIME_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProgressError>;
