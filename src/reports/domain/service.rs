use std::collections::BTreeMap;
use std::sync::Arc;
use crate::catalog::domain::model::Item;
use crate::core::clock::Clock;
use crate::core::library::TransactionKind;
use crate::core::state::SharedState;
use crate::ledger::domain::model::Transaction;
use crate::reports::domain::ReportService;
use crate::reports::dto::{BorrowerActivity, LibraryStats, OverdueEntry};

pub(crate) struct ReportServiceImpl {
    state: SharedState,
    clock: Arc<dyn Clock>,
}

impl ReportServiceImpl {
    pub(crate) fn new(state: SharedState, clock: Arc<dyn Clock>) -> Self {
        Self {
            state,
            clock,
        }
    }
}

impl ReportService for ReportServiceImpl {
    fn popular_items(&self, limit: usize) -> Vec<Item> {
        let mut items = self.state.read().catalog.all();
        // sort_by is stable, so equal counts keep catalog order
        items.sort_by(|a, b| b.borrow_count.cmp(&a.borrow_count));
        items.truncate(limit);
        items
    }

    fn overdue_transactions(&self) -> Vec<Transaction> {
        let today = self.clock.today();
        self.state.read().ledger.iter()
            .filter(|t| t.kind == TransactionKind::Borrow && t.is_overdue(today))
            .cloned().collect()
    }

    fn overdue_report(&self) -> Vec<OverdueEntry> {
        let today = self.clock.today();
        let state = self.state.read();
        state.ledger.iter()
            .filter(|t| t.kind == TransactionKind::Borrow && t.is_overdue(today))
            .map(|t| OverdueEntry {
                transaction: t.clone(),
                item_title: state.catalog.find(t.item_id.as_str()).map(|i| i.title.to_string()),
                borrower_name: state.directory.find(t.borrower_id.as_str()).map(|b| b.name.to_string()),
                days_overdue: t.days_overdue(today),
            })
            .collect()
    }

    fn stats(&self) -> LibraryStats {
        let state = self.state.read();
        let total_items = state.catalog.len();
        let available_items = state.catalog.iter().filter(|i| i.available).count();
        let (borrow_events, return_events) = state.ledger.iter()
            .fold((0, 0), |(borrows, returns), t| match t.kind {
                TransactionKind::Borrow => (borrows + 1, returns),
                TransactionKind::Return => (borrows, returns + 1),
            });
        LibraryStats {
            total_items,
            available_items,
            held_items: total_items - available_items,
            total_borrowers: state.directory.len(),
            borrow_events,
            return_events,
            items_held_by_borrowers: state.directory.iter().map(|b| b.held_count()).sum(),
        }
    }

    fn activity_by_borrower(&self) -> BTreeMap<String, BorrowerActivity> {
        self.state.read().directory.iter()
            .map(|b| (b.borrower_id.to_string(), BorrowerActivity {
                name: b.name.to_string(),
                held_count: b.held_count(),
                limit: b.limit,
                held_item_ids: b.held_items.iter().cloned().collect(),
            }))
            .collect()
    }

    fn by_category(&self) -> BTreeMap<String, Vec<Item>> {
        let state = self.state.read();
        let mut categories: BTreeMap<String, Vec<Item>> = BTreeMap::new();
        for item in state.catalog.iter() {
            categories.entry(item.category.to_string()).or_default().push(item.clone());
        }
        categories
    }
}
