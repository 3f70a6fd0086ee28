use serde::{Deserialize, Serialize};
use crate::ledger::domain::model::Transaction;

// LibraryStats is recomputed on every call.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total_items: usize,
    pub available_items: usize,
    pub held_items: usize,
    pub total_borrowers: usize,
    pub borrow_events: usize,
    pub return_events: usize,
    pub items_held_by_borrowers: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BorrowerActivity {
    pub name: String,
    pub held_count: usize,
    pub limit: usize,
    pub held_item_ids: Vec<String>,
}

// OverdueEntry joins an overdue BORROW record with the names a reader of
// the report wants to see.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct OverdueEntry {
    pub transaction: Transaction,
    pub item_title: Option<String>,
    pub borrower_name: Option<String>,
    pub days_overdue: i64,
}
