pub mod model;
pub mod service;

use crate::catalog::domain::model::Item;
use crate::core::library::LibraryResult;

pub trait CatalogService: Sync + Send {
    fn add_item(&self, item: &Item) -> LibraryResult<Item>;
    fn find_item_by_id(&self, id: &str) -> LibraryResult<Item>;
    fn all_items(&self) -> Vec<Item>;
    fn search(&self, term: &str) -> Vec<Item>;
    fn available_items(&self) -> Vec<Item>;
}
