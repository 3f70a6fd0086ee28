use chrono::NaiveDate;
use crate::core::library::{LibraryError, LibraryResult, TransactionKind};
use crate::ledger::domain::model::Transaction;

// Ledger is the append-only record of borrow and return events. Ids start
// at 1 and grow by one per append, so append order and id order agree.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    next_id: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            transactions: vec![],
            next_id: 1,
        }
    }
}

impl Ledger {
    pub(crate) fn append_borrow(&mut self, borrower_id: &str, item_id: &str,
                                today: NaiveDate, due_at: NaiveDate) -> Transaction {
        let transaction = Transaction::borrow(self.next_id, borrower_id, item_id, today, due_at);
        self.push(transaction)
    }

    pub(crate) fn append_return(&mut self, borrower_id: &str, item_id: &str, today: NaiveDate) -> Transaction {
        let transaction = Transaction::returned(self.next_id, borrower_id, item_id, today);
        self.push(transaction)
    }

    fn push(&mut self, transaction: Transaction) -> Transaction {
        self.next_id += 1;
        self.transactions.push(transaction.clone());
        transaction
    }

    // earliest open BORROW record for the pair, in append order
    pub fn find_open_borrow(&self, borrower_id: &str, item_id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| {
            t.kind == TransactionKind::Borrow && t.returned_at.is_none() &&
                t.borrower_id == borrower_id && t.item_id == item_id
        })
    }

    pub(crate) fn stamp_return(&mut self, transaction_id: u64, today: NaiveDate) -> LibraryResult<Transaction> {
        let pos = self.transactions.binary_search_by_key(&transaction_id, |t| t.transaction_id)
            .map_err(|_| LibraryError::transaction_not_found(transaction_id))?;
        let transaction = &mut self.transactions[pos];
        if transaction.returned_at.is_some() {
            return Err(LibraryError::already_returned(transaction_id));
        }
        transaction.returned_at = Some(today);
        Ok(transaction.clone())
    }

    pub fn get(&self, transaction_id: u64) -> Option<Transaction> {
        self.transactions.binary_search_by_key(&transaction_id, |t| t.transaction_id)
            .ok()
            .and_then(|pos| self.transactions.get(pos))
            .cloned()
    }

    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item=&Transaction> {
        self.transactions.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.transactions.len()
    }
}
