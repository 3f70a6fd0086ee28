use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::ledger::domain::model::Transaction;
use crate::lending::domain::LendingService;

pub struct ReturnItemCommand<'a> {
    lending_service: &'a dyn LendingService,
}

impl<'a> ReturnItemCommand<'a> {
    pub fn new(lending_service: &'a dyn LendingService) -> Self {
        Self {
            lending_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReturnItemCommandRequest {
    borrower_id: String,
    item_id: String,
}

impl ReturnItemCommandRequest {
    pub fn new(borrower_id: &str, item_id: &str) -> Self {
        Self {
            borrower_id: borrower_id.to_string(),
            item_id: item_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnItemCommandResponse {
    pub transaction: Transaction,
}

impl ReturnItemCommandResponse {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
        }
    }
}

impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand<'_> {
    fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.lending_service.return_item(req.borrower_id.as_str(), req.item_id.as_str())
            .map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::catalog::domain::model::Item;
    use crate::core::clock::ManualClock;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::TransactionKind;
    use crate::directory::domain::model::Borrower;
    use crate::engine::LendingEngine;
    use crate::lending::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::lending::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};

    #[test]
    fn test_should_run_return_item() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let engine = LendingEngine::with_clock(&Configuration::new("test"), Arc::new(ManualClock::new(today)));
        let _ = engine.directory().add_borrower(&Borrower::new("M002", "Jane Smith", "jane.smith@email.com", "555-5678"))
            .expect("should add borrower");
        let _ = engine.catalog().add_item(&Item::new("978-0132350884", "Clean Code", "Robert Martin", "Programming", today))
            .expect("should add item");
        let _ = BorrowItemCommand::new(engine.lending())
            .execute(BorrowItemCommandRequest::new("M002", "978-0132350884")).expect("should borrow");
        let cmd = ReturnItemCommand::new(engine.lending());

        let res = cmd.execute(ReturnItemCommandRequest::new("M002", "978-0132350884")).expect("should return");
        assert_eq!(TransactionKind::Return, res.transaction.kind);
        assert_eq!(Some(today), res.transaction.returned_at);

        let res = cmd.execute(ReturnItemCommandRequest::new("M002", "978-0132350884"));
        assert!(matches!(res, Err(CommandError::Conflict { .. })));
    }

    #[test]
    fn test_should_parse_return_item_request() {
        let req: ReturnItemCommandRequest = serde_json::from_str(r#"{"borrower_id":"M1","item_id":"111"}"#)
            .expect("should parse request");
        assert_eq!("M1", req.borrower_id.as_str());
        assert_eq!("111", req.item_id.as_str());
    }
}
