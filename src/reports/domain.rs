pub mod service;

use std::collections::BTreeMap;
use crate::catalog::domain::model::Item;
use crate::ledger::domain::model::Transaction;
use crate::reports::dto::{BorrowerActivity, LibraryStats, OverdueEntry};

// ReportService answers read-only questions. Each answer is built from one
// consistent view of catalog, directory and ledger.
pub trait ReportService: Sync + Send {
    fn popular_items(&self, limit: usize) -> Vec<Item>;
    fn overdue_transactions(&self) -> Vec<Transaction>;
    fn overdue_report(&self) -> Vec<OverdueEntry>;
    fn stats(&self) -> LibraryStats;
    fn activity_by_borrower(&self) -> BTreeMap<String, BorrowerActivity>;
    fn by_category(&self) -> BTreeMap<String, Vec<Item>>;
}
