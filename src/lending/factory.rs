use std::sync::Arc;
use crate::core::clock::Clock;
use crate::core::domain::Configuration;
use crate::core::state::SharedState;
use crate::gateway::events::EventPublisher;
use crate::lending::domain::LendingService;
use crate::lending::domain::service::LendingServiceImpl;

pub fn create_lending_service(config: &Configuration, state: SharedState, clock: Arc<dyn Clock>,
                              publisher: Arc<dyn EventPublisher>) -> Box<dyn LendingService> {
    Box::new(LendingServiceImpl::new(config, state, clock, publisher))
}
