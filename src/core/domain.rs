use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

pub const DEFAULT_LOAN_DAYS: i64 = 14;
pub const MAX_LOAN_DAYS: i64 = 365;

// Identifiable defines the key shared by records kept in a keyed store
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for the lending engine
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub loan_days: i64,
    pub popular_items_limit: usize,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            loan_days: DEFAULT_LOAN_DAYS,
            popular_items_limit: 10,
        }
    }

    pub fn with_loan_days(mut self, loan_days: i64) -> LibraryResult<Self> {
        validate_loan_days(loan_days)?;
        self.loan_days = loan_days;
        Ok(self)
    }
}

pub fn validate_loan_days(loan_days: i64) -> LibraryResult<()> {
    if (1..=MAX_LOAN_DAYS).contains(&loan_days) {
        Ok(())
    } else {
        Err(LibraryError::invalid_loan_period(loan_days, MAX_LOAN_DAYS))
    }
}
