use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::state::{LibraryState, SharedState};
use crate::gateway::events::{publish_committed, EventPublisher};
use crate::ledger::domain::model::{due_date, Transaction};
use crate::lending::domain::LendingService;

pub(crate) struct LendingServiceImpl {
    branch_id: String,
    loan_days: i64,
    state: SharedState,
    clock: Arc<dyn Clock>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub(crate) fn new(config: &Configuration, state: SharedState, clock: Arc<dyn Clock>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            loan_days: config.loan_days,
            state,
            clock,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch_id".to_string(), self.branch_id.to_string())])
    }
}

// Checks run in a fixed order and the first failure wins. Nothing is
// mutated until every check has passed, the due date included.
fn check_borrow(state: &LibraryState, borrower_id: &str, item_id: &str) -> LibraryResult<()> {
    let borrower = state.directory.find(borrower_id)
        .ok_or_else(|| LibraryError::borrower_not_found(borrower_id))?;
    let item = state.catalog.find(item_id)
        .ok_or_else(|| LibraryError::item_not_found(item_id))?;
    if !item.available {
        return Err(LibraryError::item_unavailable(item_id));
    }
    if !borrower.can_hold_more() {
        return Err(LibraryError::borrower_at_limit(borrower_id, borrower.limit));
    }
    Ok(())
}

fn check_return(state: &LibraryState, borrower_id: &str, item_id: &str) -> LibraryResult<()> {
    let borrower = state.directory.find(borrower_id)
        .ok_or_else(|| LibraryError::borrower_not_found(borrower_id))?;
    if state.catalog.find(item_id).is_none() {
        return Err(LibraryError::item_not_found(item_id));
    }
    if !borrower.holds(item_id) {
        return Err(LibraryError::not_currently_held(borrower_id, item_id));
    }
    Ok(())
}

impl LendingService for LendingServiceImpl {
    fn borrow(&self, borrower_id: &str, item_id: &str) -> LibraryResult<Transaction> {
        let borrowed = {
            let mut guard = self.state.write();
            let state = &mut *guard;
            // read under the lock so ledger dates follow transaction ids
            let today = self.clock.today();
            check_borrow(state, borrower_id, item_id)?;
            let due_at = due_date(today, self.loan_days)?;
            state.catalog.mark_borrowed(item_id)?;
            state.directory.attach(borrower_id, item_id)?;
            state.ledger.append_borrow(borrower_id, item_id, today, due_at)
        };
        debug!(transaction_id = borrowed.transaction_id, borrower_id, item_id,
            due_at = ?borrowed.due_at, "item borrowed");
        publish_committed(self.events_publisher.as_ref(), DomainEvent::added(
            "item_borrowed", "lending", borrowed.display_id().as_str(), &self.metadata(), &borrowed));
        Ok(borrowed)
    }

    fn return_item(&self, borrower_id: &str, item_id: &str) -> LibraryResult<Transaction> {
        let (closed, returned) = {
            let mut guard = self.state.write();
            let state = &mut *guard;
            let today = self.clock.today();
            check_return(state, borrower_id, item_id)?;
            state.catalog.mark_returned(item_id)?;
            state.directory.detach(borrower_id, item_id)?;
            let open_id = state.ledger.find_open_borrow(borrower_id, item_id).map(|t| t.transaction_id);
            let closed = match open_id {
                Some(id) => Some(state.ledger.stamp_return(id, today)?),
                None => {
                    warn!(borrower_id, item_id, "no open borrow record for returned item");
                    None
                }
            };
            let returned = state.ledger.append_return(borrower_id, item_id, today);
            (closed, returned)
        };
        debug!(transaction_id = returned.transaction_id, borrower_id, item_id, "item returned");
        if let Some(closed) = closed {
            publish_committed(self.events_publisher.as_ref(), DomainEvent::updated(
                "borrow_closed", "lending", closed.display_id().as_str(), &self.metadata(), &closed));
        }
        publish_committed(self.events_publisher.as_ref(), DomainEvent::added(
            "item_returned", "lending", returned.display_id().as_str(), &self.metadata(), &returned));
        Ok(returned)
    }

    fn transactions(&self) -> Vec<Transaction> {
        self.state.read().ledger.all()
    }

    fn open_transactions(&self) -> Vec<Transaction> {
        self.state.read().ledger.iter().filter(|t| t.is_open()).cloned().collect()
    }
}
