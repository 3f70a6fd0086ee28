use std::collections::BTreeSet;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::opt_serializer;

pub const DEFAULT_BORROW_LIMIT: usize = 3;

// Borrower abstracts a library member entitled to hold up to `limit` items.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Borrower {
    pub borrower_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    // set by the directory service from its clock when left empty
    #[serde(with = "opt_serializer", default)]
    pub enrolled_at: Option<NaiveDate>,
    #[serde(default)]
    pub held_items: BTreeSet<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_BORROW_LIMIT
}

impl Borrower {
    pub fn new(borrower_id: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            borrower_id: borrower_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            enrolled_at: None,
            held_items: BTreeSet::new(),
            limit: DEFAULT_BORROW_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn enrolled_on(mut self, enrolled_at: NaiveDate) -> Self {
        self.enrolled_at = Some(enrolled_at);
        self
    }

    pub fn can_hold_more(&self) -> bool {
        self.held_items.len() < self.limit
    }

    pub fn holds(&self, item_id: &str) -> bool {
        self.held_items.contains(item_id)
    }

    pub fn held_count(&self) -> usize {
        self.held_items.len()
    }
}

impl Identifiable for Borrower {
    fn id(&self) -> String {
        self.borrower_id.to_string()
    }
}
