use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::KeyedStore;
use crate::directory::domain::model::Borrower;

// Directory owns every Borrower. Held items change only through attach and
// detach, which the lending service calls under the state lock.
#[derive(Debug, Clone)]
pub struct Directory {
    borrowers: KeyedStore<Borrower>,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            borrowers: KeyedStore::new("borrower"),
        }
    }
}

impl Directory {
    // inserted borrowers never start out holding anything
    pub fn insert(&mut self, borrower: &Borrower) -> LibraryResult<Borrower> {
        let mut borrower = borrower.clone();
        borrower.held_items.clear();
        self.borrowers.create(borrower.clone())?;
        Ok(borrower)
    }

    pub fn get(&self, id: &str) -> Option<Borrower> {
        self.borrowers.get(id).cloned()
    }

    pub(crate) fn find(&self, id: &str) -> Option<&Borrower> {
        self.borrowers.get(id)
    }

    pub fn all(&self) -> Vec<Borrower> {
        self.borrowers.snapshot()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item=&Borrower> {
        self.borrowers.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.borrowers.len()
    }

    // unknown borrowers cannot hold anything
    pub fn can_hold_more(&self, id: &str) -> bool {
        self.borrowers.get(id).map(Borrower::can_hold_more).unwrap_or(false)
    }

    pub(crate) fn attach(&mut self, id: &str, item_id: &str) -> LibraryResult<()> {
        let borrower = self.borrowers.get_mut(id).ok_or_else(|| LibraryError::borrower_not_found(id))?;
        if !borrower.can_hold_more() {
            return Err(LibraryError::borrower_at_limit(id, borrower.limit));
        }
        borrower.held_items.insert(item_id.to_string());
        Ok(())
    }

    pub(crate) fn detach(&mut self, id: &str, item_id: &str) -> LibraryResult<()> {
        let borrower = self.borrowers.get_mut(id).ok_or_else(|| LibraryError::borrower_not_found(id))?;
        if !borrower.held_items.remove(item_id) {
            return Err(LibraryError::not_currently_held(id, item_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::directory::domain::model::Borrower;
    use crate::directory::repository::Directory;

    fn directory_with(borrower: Borrower) -> Directory {
        let mut directory = Directory::default();
        directory.insert(&borrower).expect("should insert");
        directory
    }

    #[test]
    fn test_should_insert_without_held_items() {
        let mut borrower = Borrower::new("M1", "Ann", "ann@email.com", "555");
        borrower.held_items.insert("111".to_string());
        let directory = directory_with(borrower);
        assert_eq!(Some(0), directory.get("M1").map(|b| b.held_count()));
    }

    #[test]
    fn test_should_reject_duplicate_and_blank_keys() {
        let mut directory = directory_with(Borrower::new("M1", "Ann", "ann@email.com", "555"));
        let res = directory.insert(&Borrower::new("M1", "Bob", "bob@email.com", "556"));
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
        let res = directory.insert(&Borrower::new("", "Bob", "bob@email.com", "556"));
        assert!(matches!(res, Err(LibraryError::InvalidKey { .. })));
        assert_eq!(Some("Ann".to_string()), directory.get("M1").map(|b| b.name));
        assert_eq!(1, directory.len());
    }

    #[test]
    fn test_should_attach_up_to_limit() {
        let mut directory = directory_with(Borrower::new("M1", "Ann", "ann@email.com", "555").with_limit(2));
        directory.attach("M1", "111").expect("should attach");
        assert!(directory.can_hold_more("M1"));
        directory.attach("M1", "222").expect("should attach");
        assert!(!directory.can_hold_more("M1"));
        let res = directory.attach("M1", "333");
        assert!(matches!(res, Err(LibraryError::BorrowerAtLimit { limit: 2, .. })));
        assert_eq!(Some(2), directory.get("M1").map(|b| b.held_count()));
    }

    #[test]
    fn test_should_detach_held_item_only() {
        let mut directory = directory_with(Borrower::new("M1", "Ann", "ann@email.com", "555"));
        directory.attach("M1", "111").expect("should attach");
        assert!(matches!(directory.detach("M1", "222"), Err(LibraryError::NotCurrentlyHeld { .. })));
        directory.detach("M1", "111").expect("should detach");
        assert_eq!(Some(true), directory.get("M1").map(|b| b.held_items.is_empty()));
    }

    #[test]
    fn test_should_not_let_unknown_borrower_hold() {
        let mut directory = Directory::default();
        assert!(!directory.can_hold_more("ghost"));
        assert!(matches!(directory.attach("ghost", "111"), Err(LibraryError::BorrowerNotFound { .. })));
    }
}
