use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use crate::core::library::LibraryResult;
use crate::utils::date::add_days;

// Clock supplies the calendar date the engine treats as today
pub trait Clock: Sync + Send {
    fn today(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

// ManualClock is a settable clock for simulations and tests
#[derive(Debug)]
pub struct ManualClock {
    date: RwLock<NaiveDate>,
}

impl ManualClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: RwLock::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        *self.date.write() = date;
    }

    // the clock stays put when the move would leave the calendar
    pub fn advance_days(&self, days: i64) -> LibraryResult<NaiveDate> {
        let mut date = self.date.write();
        *date = add_days(*date, days)?;
        Ok(*date)
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.date.read()
    }
}
