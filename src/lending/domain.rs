pub mod service;

use crate::core::library::LibraryResult;
use crate::ledger::domain::model::Transaction;

// LendingService is the only writer of cross-entity state: every borrow and
// return updates catalog, directory and ledger as one step.
pub trait LendingService: Sync + Send {
    // returns the new BORROW record
    fn borrow(&self, borrower_id: &str, item_id: &str) -> LibraryResult<Transaction>;
    // returns the new RETURN record
    fn return_item(&self, borrower_id: &str, item_id: &str) -> LibraryResult<Transaction>;
    fn transactions(&self) -> Vec<Transaction>;
    fn open_transactions(&self) -> Vec<Transaction>;
}
