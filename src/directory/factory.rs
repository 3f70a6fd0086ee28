use std::sync::Arc;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::state::SharedState;
use crate::directory::domain::DirectoryService;
use crate::directory::domain::service::DirectoryServiceImpl;
use crate::gateway::events::EventPublisher;

pub fn create_directory_service(config: &Configuration, state: SharedState, clock: Arc<dyn Clock>,
                                publisher: Arc<dyn EventPublisher>) -> Box<dyn DirectoryService> {
    Box::new(DirectoryServiceImpl::new(config, state, clock, publisher))
}
