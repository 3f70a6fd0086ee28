use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::state::SharedState;
use crate::directory::domain::DirectoryService;
use crate::directory::domain::model::Borrower;
use crate::gateway::events::{publish_committed, EventPublisher};

pub(crate) struct DirectoryServiceImpl {
    branch_id: String,
    state: SharedState,
    clock: Arc<dyn Clock>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl DirectoryServiceImpl {
    pub(crate) fn new(config: &Configuration, state: SharedState, clock: Arc<dyn Clock>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        DirectoryServiceImpl {
            branch_id: config.branch_id.to_string(),
            state,
            clock,
            events_publisher,
        }
    }
}

impl DirectoryService for DirectoryServiceImpl {
    fn add_borrower(&self, borrower: &Borrower) -> LibraryResult<Borrower> {
        let mut borrower = borrower.clone();
        if borrower.enrolled_at.is_none() {
            borrower.enrolled_at = Some(self.clock.today());
        }
        let stored = self.state.write().directory.insert(&borrower)?;
        debug!(borrower_id = %stored.borrower_id, limit = stored.limit, "borrower added");
        publish_committed(self.events_publisher.as_ref(), DomainEvent::added(
            "borrower_added", "directory", stored.borrower_id.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &stored));
        Ok(stored)
    }

    fn find_borrower_by_id(&self, id: &str) -> LibraryResult<Borrower> {
        self.state.read().directory.get(id).ok_or_else(|| LibraryError::borrower_not_found(id))
    }

    fn all_borrowers(&self) -> Vec<Borrower> {
        self.state.read().directory.all()
    }

    fn can_hold_more(&self, id: &str) -> bool {
        self.state.read().directory.can_hold_more(id)
    }
}
