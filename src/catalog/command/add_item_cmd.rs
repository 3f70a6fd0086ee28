use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::Item;
use crate::core::command::{Command, CommandError};
use crate::utils::date::serializer;

pub struct AddItemCommand<'a> {
    catalog_service: &'a dyn CatalogService,
}

impl<'a> AddItemCommand<'a> {
    pub fn new(catalog_service: &'a dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemCommandRequest {
    item_id: String,
    title: String,
    author: String,
    category: String,
    #[serde(with = "serializer")]
    published_at: NaiveDate,
}

impl AddItemCommandRequest {
    pub fn new(item_id: &str, title: &str, author: &str, category: &str, published_at: NaiveDate) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            published_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemCommandResponse {
    pub item: Item,
}

impl AddItemCommandResponse {
    pub fn new(item: Item) -> Self {
        Self {
            item,
        }
    }
}

impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand<'_> {
    fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = Item::new(req.item_id.as_str(), req.title.as_str(), req.author.as_str(),
                             req.category.as_str(), req.published_at);
        self.catalog_service.add_item(&item)
            .map_err(CommandError::from).map(AddItemCommandResponse::new)
    }
}
