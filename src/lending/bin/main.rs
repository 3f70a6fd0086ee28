use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use lending_engine::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
use lending_engine::core::clock::{Clock, ManualClock, SystemClock};
use lending_engine::core::command::{Command, CommandError};
use lending_engine::core::domain::Configuration;
use lending_engine::directory::command::add_borrower_cmd::{AddBorrowerCommand, AddBorrowerCommandRequest};
use lending_engine::engine::LendingEngine;
use lending_engine::ledger::domain::model::Transaction;
use lending_engine::lending::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
use lending_engine::lending::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
use lending_engine::catalog::domain::model::Item;
use lending_engine::reports::dto::{BorrowerActivity, LibraryStats, OverdueEntry};
use lending_engine::utils::date::{parse_date, serializer};
use lending_engine::utils::logs::setup_tracing;

/// Runs a batch of lending intents against a fresh engine and prints the
/// resulting reports as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with items, borrowers and intents; the sample library is used when absent
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Date the run starts on (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,

    /// Loan period in days, between 1 and 365
    #[arg(long, default_value_t = 14)]
    loan_days: i64,

    /// Number of entries in the popular items report
    #[arg(long, default_value_t = 10)]
    popular: usize,

    /// Branch recorded in event metadata
    #[arg(long, default_value = "main")]
    branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
enum Intent {
    Borrow { borrower_id: String, item_id: String },
    Return { borrower_id: String, item_id: String },
    // moves the simulated calendar forward
    Advance { days: i64 },
}

#[derive(Debug, Deserialize)]
struct Seed {
    #[serde(default)]
    items: Vec<AddItemCommandRequest>,
    #[serde(default)]
    borrowers: Vec<AddBorrowerCommandRequest>,
    #[serde(default)]
    intents: Vec<Intent>,
}

#[derive(Debug, Serialize)]
struct IntentOutcome {
    intent: Intent,
    result: Result<Option<Transaction>, CommandError>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    branch_id: String,
    #[serde(with = "serializer")]
    today: NaiveDate,
    outcomes: Vec<IntentOutcome>,
    stats: LibraryStats,
    popular_items: Vec<Item>,
    overdue: Vec<OverdueEntry>,
    activity: BTreeMap<String, BorrowerActivity>,
    by_category: BTreeMap<String, Vec<Item>>,
}

fn sample_seed() -> Result<Seed, chrono::ParseError> {
    let books = [
        ("978-0134685991", "Effective Java", "Joshua Bloch", "2017-12-27"),
        ("978-0596009205", "Head First Design Patterns", "Eric Freeman", "2004-10-25"),
        ("978-0321356680", "Effective C++", "Scott Meyers", "2005-05-22"),
        ("978-0132350884", "Clean Code", "Robert Martin", "2008-08-01"),
        ("978-0201616224", "The Pragmatic Programmer", "Andrew Hunt", "1999-10-20"),
    ];
    let mut items = Vec::new();
    for (isbn, title, author, published) in books {
        items.push(AddItemCommandRequest::new(isbn, title, author, "Programming", parse_date(published)?));
    }
    let borrowers = vec![
        AddBorrowerCommandRequest::new("M001", "John Doe", "john.doe@email.com", "555-1234"),
        AddBorrowerCommandRequest::new("M002", "Jane Smith", "jane.smith@email.com", "555-5678"),
        AddBorrowerCommandRequest::new("M003", "Bob Johnson", "bob.johnson@email.com", "555-9012"),
    ];
    Ok(Seed { items, borrowers, intents: vec![] })
}

fn load_seed(path: &Option<PathBuf>) -> Result<Seed, Box<dyn Error>> {
    match path {
        Some(path) => Ok(serde_json::from_str(fs::read_to_string(path)?.as_str())?),
        None => Ok(sample_seed()?),
    }
}

fn run_intent(engine: &LendingEngine, clock: &ManualClock, intent: &Intent) -> Result<Option<Transaction>, CommandError> {
    match intent {
        Intent::Borrow { borrower_id, item_id } => {
            BorrowItemCommand::new(engine.lending())
                .execute(BorrowItemCommandRequest::new(borrower_id, item_id))
                .map(|res| Some(res.transaction))
        }
        Intent::Return { borrower_id, item_id } => {
            ReturnItemCommand::new(engine.lending())
                .execute(ReturnItemCommandRequest::new(borrower_id, item_id))
                .map(|res| Some(res.transaction))
        }
        Intent::Advance { days } => {
            clock.advance_days(*days).map(|_| None).map_err(CommandError::from)
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_tracing();

    let mut config = Configuration::new(args.branch.as_str()).with_loan_days(args.loan_days)?;
    config.popular_items_limit = args.popular;

    let clock = Arc::new(ManualClock::new(args.today.unwrap_or_else(|| SystemClock.today())));
    let engine = LendingEngine::with_clock(&config, clock.clone());
    let seed = load_seed(&args.seed)?;

    let add_item = AddItemCommand::new(engine.catalog());
    for req in seed.items {
        if let Err(err) = add_item.execute(req) {
            warn!(error = ?err, "skipping item");
        }
    }
    let add_borrower = AddBorrowerCommand::new(engine.directory());
    for req in seed.borrowers {
        if let Err(err) = add_borrower.execute(req) {
            warn!(error = ?err, "skipping borrower");
        }
    }

    let outcomes: Vec<IntentOutcome> = seed.intents.into_iter()
        .map(|intent| {
            let result = run_intent(&engine, clock.as_ref(), &intent);
            IntentOutcome { intent, result }
        })
        .collect();
    info!(intents = outcomes.len(), failed = outcomes.iter().filter(|o| o.result.is_err()).count(),
        "intents applied");

    let reports = engine.reports();
    let report = RunReport {
        branch_id: engine.config().branch_id.to_string(),
        today: clock.today(),
        outcomes,
        stats: reports.stats(),
        popular_items: reports.popular_items(engine.config().popular_items_limit),
        overdue: reports.overdue_report(),
        activity: reports.activity_by_borrower(),
        by_category: reports.by_category(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
