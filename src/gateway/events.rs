use tracing::warn;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};

pub trait EventPublisher: Sync + Send {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()>;
}

// Publishes the event of a change that is already committed. A failure here
// cannot undo the change, so it is logged and dropped.
pub(crate) fn publish_committed(publisher: &dyn EventPublisher, event: serde_json::Result<DomainEvent>) {
    let res = event.map_err(LibraryError::from)
        .and_then(|event| publisher.publish(&event));
    if let Err(err) = res {
        warn!(error = %err, reason_code = err.reason_code(), "failed to publish domain event");
    }
}
