use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// Item abstracts a lendable catalog entry such as a book, keyed by its isbn
// or another caller-chosen identifier.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(with = "serializer")]
    pub published_at: NaiveDate,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub borrow_count: u32,
}

fn default_available() -> bool {
    true
}

impl Item {
    pub fn new(item_id: &str, title: &str, author: &str, category: &str, published_at: NaiveDate) -> Self {
        Self {
            item_id: item_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            published_at,
            available: true,
            borrow_count: 0,
        }
    }

    // case-insensitive substring match on title, author or category;
    // `term` must already be lower case
    pub(crate) fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) ||
            self.author.to_lowercase().contains(term) ||
            self.category.to_lowercase().contains(term)
    }
}

impl Identifiable for Item {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}
