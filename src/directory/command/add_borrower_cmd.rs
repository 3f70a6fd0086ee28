use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::directory::domain::DirectoryService;
use crate::directory::domain::model::Borrower;
use crate::utils::date::opt_serializer;

pub struct AddBorrowerCommand<'a> {
    directory_service: &'a dyn DirectoryService,
}

impl<'a> AddBorrowerCommand<'a> {
    pub fn new(directory_service: &'a dyn DirectoryService) -> Self {
        Self {
            directory_service,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddBorrowerCommandRequest {
    borrower_id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    limit: Option<usize>,
    // the directory's clock date when absent
    #[serde(with = "opt_serializer", default)]
    enrolled_at: Option<NaiveDate>,
}

impl AddBorrowerCommandRequest {
    pub fn new(borrower_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            borrower_id: borrower_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            limit: None,
            enrolled_at: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn enrolled_on(mut self, enrolled_at: NaiveDate) -> Self {
        self.enrolled_at = Some(enrolled_at);
        self
    }
}

#[derive(Debug, Serialize)]
pub struct AddBorrowerCommandResponse {
    pub borrower: Borrower,
}

impl AddBorrowerCommandResponse {
    pub fn new(borrower: Borrower) -> Self {
        Self {
            borrower,
        }
    }
}

impl Command<AddBorrowerCommandRequest, AddBorrowerCommandResponse> for AddBorrowerCommand<'_> {
    fn execute(&self, req: AddBorrowerCommandRequest) -> Result<AddBorrowerCommandResponse, CommandError> {
        let mut borrower = Borrower::new(req.borrower_id.as_str(), req.name.as_str(),
                                         req.email.as_str(), req.phone.as_str());
        if let Some(limit) = req.limit {
            borrower = borrower.with_limit(limit);
        }
        if let Some(enrolled_at) = req.enrolled_at {
            borrower = borrower.enrolled_on(enrolled_at);
        }
        self.directory_service.add_borrower(&borrower)
            .map_err(CommandError::from).map(AddBorrowerCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::NaiveDate;
    use crate::core::clock::ManualClock;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::state::LibraryState;
    use crate::directory::command::add_borrower_cmd::{AddBorrowerCommand, AddBorrowerCommandRequest};
    use crate::directory::factory::create_directory_service;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[test]
    fn test_should_run_add_borrower() {
        let today = NaiveDate::from_ymd_opt(2001, 1, 1).expect("valid date");
        let svc = create_directory_service(&Configuration::new("test"), LibraryState::shared(),
                                           Arc::new(ManualClock::new(today)), Arc::new(MemoryPublisher::new()));
        let cmd = AddBorrowerCommand::new(svc.as_ref());

        let res = cmd.execute(AddBorrowerCommandRequest::new("M001", "John Doe", "john.doe@email.com", "555-1234")
            .with_limit(5)).expect("should add borrower");
        assert_eq!("M001", res.borrower.borrower_id.as_str());
        assert_eq!(5, res.borrower.limit);
        assert_eq!(Some(today), res.borrower.enrolled_at);

        let enrolled = NaiveDate::from_ymd_opt(1998, 4, 2).expect("valid date");
        let res = cmd.execute(AddBorrowerCommandRequest::new("M002", "Jane Smith", "", "").enrolled_on(enrolled))
            .expect("should add borrower");
        assert_eq!(Some(enrolled), res.borrower.enrolled_at);

        let res = cmd.execute(AddBorrowerCommandRequest::new("M001", "Again", "", ""));
        assert!(matches!(res, Err(CommandError::DuplicateKey { .. })));
    }

    #[test]
    fn test_should_parse_add_borrower_request() {
        let req: AddBorrowerCommandRequest = serde_json::from_str(r#"{"borrower_id":"M9","name":"Nine"}"#)
            .expect("should parse request");
        assert_eq!(None, req.limit);
        assert_eq!(None, req.enrolled_at);
        assert!(req.email.is_empty());

        let req: AddBorrowerCommandRequest = serde_json::from_str(
            r#"{"borrower_id":"M9","name":"Nine","enrolled_at":"2020-02-29"}"#)
            .expect("should parse request");
        assert_eq!(NaiveDate::from_ymd_opt(2020, 2, 29), req.enrolled_at);
    }
}
