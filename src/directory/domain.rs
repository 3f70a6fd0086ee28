pub mod model;
pub mod service;

use crate::core::library::LibraryResult;
use crate::directory::domain::model::Borrower;

pub trait DirectoryService: Sync + Send {
    fn add_borrower(&self, borrower: &Borrower) -> LibraryResult<Borrower>;
    fn find_borrower_by_id(&self, id: &str) -> LibraryResult<Borrower>;
    fn all_borrowers(&self) -> Vec<Borrower>;
    fn can_hold_more(&self, id: &str) -> bool;
}
