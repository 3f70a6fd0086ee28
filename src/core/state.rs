use std::sync::Arc;
use parking_lot::RwLock;
use crate::catalog::repository::Catalog;
use crate::directory::repository::Directory;
use crate::ledger::repository::Ledger;

// LibraryState is everything the services coordinate. One lock guards all
// three stores, so a borrow or return is never observed half applied.
#[derive(Debug, Default)]
pub struct LibraryState {
    pub(crate) catalog: Catalog,
    pub(crate) directory: Directory,
    pub(crate) ledger: Ledger,
}

pub type SharedState = Arc<RwLock<LibraryState>>;

impl LibraryState {
    pub fn shared() -> SharedState {
        Arc::new(RwLock::new(LibraryState::default()))
    }
}
