use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::ledger::domain::model::Transaction;
use crate::lending::domain::LendingService;

pub struct BorrowItemCommand<'a> {
    lending_service: &'a dyn LendingService,
}

impl<'a> BorrowItemCommand<'a> {
    pub fn new(lending_service: &'a dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BorrowItemCommandRequest {
    borrower_id: String,
    item_id: String,
}

impl BorrowItemCommandRequest {
    pub fn new(borrower_id: &str, item_id: &str) -> Self {
        Self {
            borrower_id: borrower_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowItemCommandResponse {
    pub transaction: Transaction,
}

impl BorrowItemCommandResponse {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
        }
    }
}

impl Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand<'_> {
    fn execute(&self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.lending_service.borrow(req.borrower_id.as_str(), req.item_id.as_str())
            .map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}
