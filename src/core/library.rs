use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("invalid key: {message}")]
    InvalidKey {
        message: String,
    },
    #[error("duplicate key: {message}")]
    DuplicateKey {
        message: String,
    },
    #[error("borrower not found: {borrower_id}")]
    BorrowerNotFound {
        borrower_id: String,
    },
    #[error("item not found: {item_id}")]
    ItemNotFound {
        item_id: String,
    },
    #[error("item is not available: {item_id}")]
    ItemUnavailable {
        item_id: String,
    },
    #[error("borrower {borrower_id} has reached the limit of {limit} items")]
    BorrowerAtLimit {
        borrower_id: String,
        limit: usize,
    },
    #[error("borrower {borrower_id} does not hold item {item_id}")]
    NotCurrentlyHeld {
        borrower_id: String,
        item_id: String,
    },
    // Raised by the ledger when a borrow record is stamped twice. The lending
    // service only stamps open records, so callers should never observe it.
    #[error("transaction {transaction_id} is already returned")]
    AlreadyReturned {
        transaction_id: u64,
    },
    #[error("transaction not found: {transaction_id}")]
    TransactionNotFound {
        transaction_id: u64,
    },
    #[error("loan period of {loan_days} days is outside 1..={max_days}")]
    InvalidLoanPeriod {
        loan_days: i64,
        max_days: i64,
    },
    #[error("{from} moved by {days} days is out of the calendar range")]
    DateOutOfRange {
        from: NaiveDate,
        days: i64,
    },
    #[error("serialization failed: {message}")]
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn invalid_key(message: &str) -> LibraryError {
        LibraryError::InvalidKey { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn borrower_not_found(borrower_id: &str) -> LibraryError {
        LibraryError::BorrowerNotFound { borrower_id: borrower_id.to_string() }
    }

    pub fn item_not_found(item_id: &str) -> LibraryError {
        LibraryError::ItemNotFound { item_id: item_id.to_string() }
    }

    pub fn item_unavailable(item_id: &str) -> LibraryError {
        LibraryError::ItemUnavailable { item_id: item_id.to_string() }
    }

    pub fn borrower_at_limit(borrower_id: &str, limit: usize) -> LibraryError {
        LibraryError::BorrowerAtLimit { borrower_id: borrower_id.to_string(), limit }
    }

    pub fn not_currently_held(borrower_id: &str, item_id: &str) -> LibraryError {
        LibraryError::NotCurrentlyHeld { borrower_id: borrower_id.to_string(), item_id: item_id.to_string() }
    }

    pub fn already_returned(transaction_id: u64) -> LibraryError {
        LibraryError::AlreadyReturned { transaction_id }
    }

    pub fn transaction_not_found(transaction_id: u64) -> LibraryError {
        LibraryError::TransactionNotFound { transaction_id }
    }

    pub fn invalid_loan_period(loan_days: i64, max_days: i64) -> LibraryError {
        LibraryError::InvalidLoanPeriod { loan_days, max_days }
    }

    pub fn date_out_of_range(from: NaiveDate, days: i64) -> LibraryError {
        LibraryError::DateOutOfRange { from, days }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // stable short code for callers that render or count failures
    pub fn reason_code(&self) -> &'static str {
        match self {
            LibraryError::InvalidKey { .. } => "invalid_key",
            LibraryError::DuplicateKey { .. } => "duplicate_key",
            LibraryError::BorrowerNotFound { .. } => "borrower_not_found",
            LibraryError::ItemNotFound { .. } => "item_not_found",
            LibraryError::ItemUnavailable { .. } => "item_unavailable",
            LibraryError::BorrowerAtLimit { .. } => "borrower_at_limit",
            LibraryError::NotCurrentlyHeld { .. } => "not_currently_held",
            LibraryError::AlreadyReturned { .. } => "already_returned",
            LibraryError::TransactionNotFound { .. } => "transaction_not_found",
            LibraryError::InvalidLoanPeriod { .. } => "invalid_loan_period",
            LibraryError::DateOutOfRange { .. } => "date_out_of_range",
            LibraryError::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json {:?}", err).as_str())
    }
}

/// A specialized Result type for the lending engine.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Borrow,
    Return,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TransactionKind::Borrow => write!(f, "BORROW"),
            TransactionKind::Return => write!(f, "RETURN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::library::{LibraryError, TransactionKind};

    #[test]
    fn test_should_create_lookup_errors() {
        assert!(matches!(LibraryError::borrower_not_found("M1"), LibraryError::BorrowerNotFound { borrower_id } if borrower_id == "M1"));
        assert!(matches!(LibraryError::item_not_found("111"), LibraryError::ItemNotFound { item_id } if item_id == "111"));
    }

    #[test]
    fn test_should_create_insert_errors() {
        assert!(matches!(LibraryError::invalid_key("blank"), LibraryError::InvalidKey { message: _ }));
        assert!(matches!(LibraryError::duplicate_key("111"), LibraryError::DuplicateKey { message: _ }));
    }

    #[test]
    fn test_should_format_borrow_errors() {
        assert_eq!("item is not available: 111", LibraryError::item_unavailable("111").to_string());
        assert_eq!("borrower M1 has reached the limit of 3 items",
                   LibraryError::borrower_at_limit("M1", 3).to_string());
        assert_eq!("borrower M1 does not hold item 111",
                   LibraryError::not_currently_held("M1", "111").to_string());
    }

    #[test]
    fn test_should_give_distinct_reason_codes() {
        let errors = vec![
            LibraryError::invalid_key("k"),
            LibraryError::duplicate_key("k"),
            LibraryError::borrower_not_found("b"),
            LibraryError::item_not_found("i"),
            LibraryError::item_unavailable("i"),
            LibraryError::borrower_at_limit("b", 1),
            LibraryError::not_currently_held("b", "i"),
            LibraryError::already_returned(1),
            LibraryError::transaction_not_found(1),
            LibraryError::invalid_loan_period(0, 365),
            LibraryError::date_out_of_range(NaiveDate::MAX, 1),
            LibraryError::serialization("s"),
        ];
        let mut codes: Vec<&str> = errors.iter().map(LibraryError::reason_code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(errors.len(), codes.len());
    }

    #[test]
    fn test_should_format_transaction_kind() {
        assert_eq!("BORROW", TransactionKind::Borrow.to_string());
        assert_eq!("RETURN", TransactionKind::Return.to_string());
    }

    #[test]
    fn test_should_format_date_errors() {
        assert_eq!("loan period of 0 days is outside 1..=365",
                   LibraryError::invalid_loan_period(0, 365).to_string());
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        assert_eq!("2024-01-01 moved by 5 days is out of the calendar range",
                   LibraryError::date_out_of_range(day, 5).to_string());
    }
}
