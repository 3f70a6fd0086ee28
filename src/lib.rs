pub mod catalog;
pub mod core;
pub mod directory;
pub mod engine;
pub mod gateway;
pub mod ledger;
pub mod lending;
pub mod reports;
pub mod utils;

pub use crate::catalog::domain::model::Item;
pub use crate::core::clock::{Clock, ManualClock, SystemClock};
pub use crate::core::domain::Configuration;
pub use crate::core::library::{LibraryError, LibraryResult, TransactionKind};
pub use crate::directory::domain::model::Borrower;
pub use crate::engine::LendingEngine;
pub use crate::ledger::domain::model::Transaction;
