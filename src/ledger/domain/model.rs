use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::validate_loan_days;
use crate::core::library::{LibraryResult, TransactionKind};
use crate::utils::date::{add_days, days_between, opt_serializer, serializer};

// Transaction is one immutable ledger record. A BORROW record stays open
// until its return date is stamped; a RETURN record is born closed.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: u64,
    pub borrower_id: String,
    pub item_id: String,
    pub kind: TransactionKind,
    #[serde(with = "serializer")]
    pub borrowed_at: NaiveDate,
    #[serde(with = "opt_serializer", default)]
    pub due_at: Option<NaiveDate>,
    #[serde(with = "opt_serializer", default)]
    pub returned_at: Option<NaiveDate>,
}

impl Transaction {
    pub(crate) fn borrow(transaction_id: u64, borrower_id: &str, item_id: &str,
                         today: NaiveDate, due_at: NaiveDate) -> Self {
        Self::build(transaction_id, TransactionKind::Borrow, borrower_id, item_id, today, Some(due_at), None)
    }

    pub(crate) fn returned(transaction_id: u64, borrower_id: &str, item_id: &str, today: NaiveDate) -> Self {
        Self::build(transaction_id, TransactionKind::Return, borrower_id, item_id, today, None, Some(today))
    }

    fn build(transaction_id: u64, kind: TransactionKind, borrower_id: &str, item_id: &str, borrowed_at: NaiveDate,
             due_at: Option<NaiveDate>, returned_at: Option<NaiveDate>) -> Self {
        Self {
            transaction_id,
            borrower_id: borrower_id.to_string(),
            item_id: item_id.to_string(),
            kind,
            borrowed_at,
            due_at,
            returned_at,
        }
    }

    pub fn is_open(&self) -> bool {
        match self.kind {
            TransactionKind::Borrow => self.returned_at.is_none(),
            TransactionKind::Return => false,
        }
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match (self.kind, self.due_at) {
            (TransactionKind::Borrow, Some(due_at)) => self.returned_at.is_none() && today > due_at,
            _ => false,
        }
    }

    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        match self.due_at {
            Some(due_at) if self.is_overdue(today) => days_between(due_at, today),
            _ => 0,
        }
    }

    // human-readable id such as T0042
    pub fn display_id(&self) -> String {
        format!("T{:04}", self.transaction_id)
    }
}

// due date of a loan starting on `borrowed_at`
pub fn due_date(borrowed_at: NaiveDate, loan_days: i64) -> LibraryResult<NaiveDate> {
    validate_loan_days(loan_days)?;
    add_days(borrowed_at, loan_days)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use crate::core::library::{LibraryError, TransactionKind};
    use crate::ledger::domain::model::{due_date, Transaction};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date")
    }

    #[test]
    fn test_should_build_borrow_with_due_date() {
        let borrow = Transaction::borrow(1, "M1", "111", day(), day() + Duration::days(14));
        assert_eq!(TransactionKind::Borrow, borrow.kind);
        assert_eq!(Some(day() + Duration::days(14)), borrow.due_at);
        assert_eq!(None, borrow.returned_at);
        assert!(borrow.is_open());
    }

    #[test]
    fn test_should_build_return_closed() {
        let ret = Transaction::returned(2, "M1", "111", day());
        assert_eq!(TransactionKind::Return, ret.kind);
        assert_eq!(None, ret.due_at);
        assert_eq!(Some(day()), ret.returned_at);
        assert!(!ret.is_open());
        assert!(!ret.is_overdue(day() + Duration::days(100)));
        assert_eq!(0, ret.days_overdue(day() + Duration::days(100)));
    }

    #[test]
    fn test_should_compute_overdue_days() {
        let borrow = Transaction::borrow(1, "M1", "111", day(), day() + Duration::days(14));
        assert!(!borrow.is_overdue(day() + Duration::days(14)));
        assert_eq!(0, borrow.days_overdue(day() + Duration::days(14)));
        assert!(borrow.is_overdue(day() + Duration::days(16)));
        assert_eq!(2, borrow.days_overdue(day() + Duration::days(16)));
    }

    #[test]
    fn test_should_not_be_overdue_once_returned() {
        let mut borrow = Transaction::borrow(1, "M1", "111", day(), day() + Duration::days(14));
        borrow.returned_at = Some(day() + Duration::days(20));
        assert!(!borrow.is_overdue(day() + Duration::days(30)));
        assert_eq!(0, borrow.days_overdue(day() + Duration::days(30)));
    }

    #[test]
    fn test_should_format_display_id() {
        let t = |id| Transaction::borrow(id, "M1", "111", day(), day());
        assert_eq!("T0001", t(1).display_id());
        assert_eq!("T0420", t(420).display_id());
        assert_eq!("T12345", t(12345).display_id());
    }

    #[test]
    fn test_should_compute_due_date_or_fail() {
        assert_eq!(Ok(day() + Duration::days(14)), due_date(day(), 14));
        assert_eq!(Err(LibraryError::invalid_loan_period(0, 365)), due_date(day(), 0));
        assert_eq!(Err(LibraryError::invalid_loan_period(1_000_000_000, 365)), due_date(day(), 1_000_000_000));
        let last = NaiveDate::MAX - Duration::days(1);
        assert_eq!(Err(LibraryError::date_out_of_range(last, 14)), due_date(last, 14));
    }
}
