use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::state::SharedState;
use crate::gateway::events::EventPublisher;

pub fn create_catalog_service(config: &Configuration, state: SharedState,
                              publisher: Arc<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, state, publisher))
}
