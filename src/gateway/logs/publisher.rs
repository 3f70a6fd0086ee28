use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;

// LogPublisher forwards events to the installed tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        LogPublisher
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        info!(event_id = %event.event_id, name = %event.name, group = %event.group,
            key = %event.key, kind = ?event.kind, data = %event.json_data, "domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[test]
    fn test_should_publish_without_subscriber() {
        let event = DomainEvent::added("item_added", "catalog", "111", &HashMap::new(), &"data").expect("build event");
        assert!(LogPublisher::new().publish(&event).is_ok());
    }
}
