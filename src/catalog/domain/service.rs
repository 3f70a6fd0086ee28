use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Item;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::state::SharedState;
use crate::gateway::events::{publish_committed, EventPublisher};

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    state: SharedState,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, state: SharedState,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            state,
            events_publisher,
        }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_item(&self, item: &Item) -> LibraryResult<Item> {
        let stored = self.state.write().catalog.insert(item)?;
        debug!(item_id = %stored.item_id, title = %stored.title, "item added");
        publish_committed(self.events_publisher.as_ref(), DomainEvent::added(
            "item_added", "catalog", stored.item_id.as_str(),
            &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &stored));
        Ok(stored)
    }

    fn find_item_by_id(&self, id: &str) -> LibraryResult<Item> {
        self.state.read().catalog.get(id).ok_or_else(|| LibraryError::item_not_found(id))
    }

    fn all_items(&self) -> Vec<Item> {
        self.state.read().catalog.all()
    }

    fn search(&self, term: &str) -> Vec<Item> {
        self.state.read().catalog.search(term)
    }

    fn available_items(&self) -> Vec<Item> {
        self.state.read().catalog.available()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::model::Item;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::state::LibraryState;
    use crate::gateway::memory::publisher::MemoryPublisher;

    fn item(id: &str, title: &str, category: &str) -> Item {
        Item::new(id, title, "X author", category, NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
    }

    fn sut() -> (Box<dyn CatalogService>, Arc<MemoryPublisher>) {
        let publisher = Arc::new(MemoryPublisher::new());
        let svc = factory::create_catalog_service(&Configuration::new("test"), LibraryState::shared(), publisher.clone());
        (svc, publisher)
    }

    #[test]
    fn test_should_add_item() {
        let (catalog_svc, publisher) = sut();

        let added = catalog_svc.add_item(&item("111", "Rust in Action", "Prog")).expect("should add item");
        let loaded = catalog_svc.find_item_by_id("111").expect("should return item");
        assert_eq!(added, loaded);
        assert_eq!(vec!["item_added"], publisher.names());
    }

    #[test]
    fn test_should_not_publish_rejected_item() {
        let (catalog_svc, publisher) = sut();

        let _ = catalog_svc.add_item(&item("111", "Rust in Action", "Prog")).expect("should add item");
        let res = catalog_svc.add_item(&item("111", "Other", "Prog"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        assert_eq!(1, publisher.events().len());
    }

    #[test]
    fn test_should_fail_find_unknown_item() {
        let (catalog_svc, _) = sut();
        assert_eq!(Err(LibraryError::item_not_found("404")), catalog_svc.find_item_by_id("404"));
    }

    #[test]
    fn test_should_find_programming_by_prefix() {
        let (catalog_svc, _) = sut();

        let _ = catalog_svc.add_item(&item("111", "Rust in Action", "Programming")).expect("should add item");
        let _ = catalog_svc.add_item(&item("222", "Dune", "Fiction")).expect("should add item");
        let res = catalog_svc.search("prog");
        assert_eq!(1, res.len());
        assert_eq!("111", res[0].item_id.as_str());
        assert_eq!(2, catalog_svc.search(" ").len());
        assert_eq!(2, catalog_svc.all_items().len());
        assert_eq!(2, catalog_svc.available_items().len());
    }
}
