use serde::Serialize;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommandError {
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
        reason_code: Option<String>,
    },
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let message = other.to_string();
        let reason_code = Some(other.reason_code().to_string());
        match other {
            LibraryError::InvalidKey { .. } |
            LibraryError::InvalidLoanPeriod { .. } |
            LibraryError::DateOutOfRange { .. } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::DuplicateKey { .. } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::BorrowerNotFound { .. } |
            LibraryError::ItemNotFound { .. } |
            LibraryError::TransactionNotFound { .. } => {
                CommandError::NotFound { message, reason_code }
            }
            LibraryError::ItemUnavailable { .. } |
            LibraryError::BorrowerAtLimit { .. } |
            LibraryError::NotCurrentlyHeld { .. } |
            LibraryError::AlreadyReturned { .. } => {
                CommandError::Conflict { message, reason_code }
            }
            LibraryError::Serialization { .. } => {
                CommandError::Serialization { message }
            }
        }
    }
}
