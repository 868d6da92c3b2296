use thiserror::Error;

use super::types::KernelPhase;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("Invalid argument to {operation}: {reason}")]
    InvalidArgument {
        operation: &'static str,
        reason: String,
    },

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Kernel is {phase:?}, no steps remain")]
    InvalidState { phase: KernelPhase },
}

impl SimError {
    pub(crate) fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        SimError::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
