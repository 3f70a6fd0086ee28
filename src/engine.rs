use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory::create_catalog_service;
use crate::core::clock::{Clock, SystemClock};
use crate::core::domain::Configuration;
use crate::core::state::LibraryState;
use crate::directory::domain::DirectoryService;
use crate::directory::factory::create_directory_service;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::lending::domain::LendingService;
use crate::lending::factory::create_lending_service;
use crate::reports::domain::ReportService;
use crate::reports::factory::create_report_service;

/// LendingEngine is the explicit instance a caller builds and shares. All of
/// its services work on the same state, so an item borrowed through
/// `lending()` is immediately unavailable in `catalog()` and counted by
/// `reports()`.
///
/// The engine is `Send + Sync`; wrap it in an `Arc` to use it from several
/// threads.
pub struct LendingEngine {
    config: Configuration,
    catalog_service: Box<dyn CatalogService>,
    directory_service: Box<dyn DirectoryService>,
    lending_service: Box<dyn LendingService>,
    report_service: Box<dyn ReportService>,
}

impl LendingEngine {
    /// Engine reading today from the system clock and publishing events as
    /// tracing records.
    pub fn new(config: &Configuration) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &Configuration, clock: Arc<dyn Clock>) -> Self {
        Self::with_publisher(config, clock, create_publisher(GatewayPublisherVia::Logs))
    }

    pub fn with_publisher(config: &Configuration, clock: Arc<dyn Clock>,
                          publisher: Arc<dyn EventPublisher>) -> Self {
        let state = LibraryState::shared();
        Self {
            config: config.clone(),
            catalog_service: create_catalog_service(config, state.clone(), publisher.clone()),
            directory_service: create_directory_service(config, state.clone(), clock.clone(), publisher.clone()),
            lending_service: create_lending_service(config, state.clone(), clock.clone(), publisher),
            report_service: create_report_service(state, clock),
        }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn catalog(&self) -> &dyn CatalogService {
        self.catalog_service.as_ref()
    }

    pub fn directory(&self) -> &dyn DirectoryService {
        self.directory_service.as_ref()
    }

    pub fn lending(&self) -> &dyn LendingService {
        self.lending_service.as_ref()
    }

    pub fn reports(&self) -> &dyn ReportService {
        self.report_service.as_ref()
    }
}
