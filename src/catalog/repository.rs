use crate::catalog::domain::model::Item;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::KeyedStore;

// Catalog owns every Item and its availability. Only the lending service
// flips availability, through mark_borrowed and mark_returned.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: KeyedStore<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: KeyedStore::new("item"),
        }
    }
}

impl Catalog {
    // inserted items always start available and never borrowed
    pub fn insert(&mut self, item: &Item) -> LibraryResult<Item> {
        let mut item = item.clone();
        item.available = true;
        item.borrow_count = 0;
        self.items.create(item.clone())?;
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Option<Item> {
        self.items.get(id).cloned()
    }

    pub(crate) fn find(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    pub fn all(&self) -> Vec<Item> {
        self.items.snapshot()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item=&Item> {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn mark_borrowed(&mut self, id: &str) -> LibraryResult<()> {
        let item = self.items.get_mut(id).ok_or_else(|| LibraryError::item_not_found(id))?;
        item.available = false;
        item.borrow_count += 1;
        Ok(())
    }

    pub(crate) fn mark_returned(&mut self, id: &str) -> LibraryResult<()> {
        let item = self.items.get_mut(id).ok_or_else(|| LibraryError::item_not_found(id))?;
        item.available = true;
        Ok(())
    }

    // a blank term returns the whole catalog
    pub fn search(&self, term: &str) -> Vec<Item> {
        if term.trim().is_empty() {
            return self.all();
        }
        let term = term.to_lowercase();
        self.items.iter().filter(|item| item.matches(term.as_str())).cloned().collect()
    }

    pub fn available(&self) -> Vec<Item> {
        self.items.iter().filter(|item| item.available).cloned().collect()
    }
}
